use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::get;
use axum::{Extension, Router};
use bible_study::bible::handlers::{
    handle_chapter_count, handle_get_books, handle_get_chapter, handle_get_passage,
    handle_list_versions, handle_search,
};
use bible_study::bible::source::FsTextSource;
use bible_study::bible::store::VersionStore;
use bible_study::lexicon::handlers::{handle_get_entry, handle_query};
use bible_study::lexicon::store::LexiconStore;
use bible_study::studies::handlers::{
    handle_create_study, handle_delete_study, handle_list_studies, handle_update_study, AuthToken,
};
use bible_study::studies::store::WordStudyStore;
use tokio::signal::ctrl_c;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut port: u16 = 8086;
    let mut data_dir = PathBuf::from("./data");
    let mut auth_token = "demo-token".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                port = args[i + 1].parse()?;
                i += 2;
            }
            "--data" => {
                data_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--token" => {
                auth_token = args[i + 1].clone();
                i += 2;
            }
            "--help" => {
                eprintln!(
                    "Usage: {} [--port <port>] [--data <dir>] [--token <bearer token>]",
                    args[0]
                );
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Data directory: {}", data_dir.display());

    // 1. Stores:
    let versions = Arc::new(VersionStore::new(Arc::new(FsTextSource::new(
        data_dir.clone(),
    ))));
    tracing::info!(
        available = versions.list_versions().len(),
        "version catalog scanned"
    );

    let lexicon = Arc::new(LexiconStore::load(
        &data_dir.join("strongs-complete.json"),
    )?);
    let studies = Arc::new(WordStudyStore::new());

    // 2. HTTP Router:
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/bible/versions", get(handle_list_versions))
        .route("/api/bible/search", get(handle_search))
        .route("/api/bible/:version/books", get(handle_get_books))
        .route(
            "/api/bible/:version/:book/chapters",
            get(handle_chapter_count),
        )
        .route("/api/bible/:version/:book/:chapter", get(handle_get_chapter))
        .route(
            "/api/bible/:version/:book/:chapter/:verses",
            get(handle_get_passage),
        )
        .route("/api/lexicon", get(handle_query))
        .route("/api/lexicon/:code", get(handle_get_entry))
        .route(
            "/api/word-studies",
            get(handle_list_studies).post(handle_create_study),
        )
        .route(
            "/api/word-studies/:id",
            axum::routing::put(handle_update_study).delete(handle_delete_study),
        )
        .layer(cors)
        .layer(Extension(versions))
        .layer(Extension(lexicon))
        .layer(Extension(studies))
        .layer(Extension(AuthToken(Arc::new(auth_token))));

    // 3. Serve:
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("HTTP server listening on {}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
