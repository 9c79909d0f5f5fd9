//! Bible Text Module
//!
//! The core subsystem: loads translation data from compressed backing files,
//! caches it in memory for the process lifetime, and answers chapter, passage,
//! and full-text search requests against the cached structure.
//!
//! ## Data Flow
//! 1. **Catalog**: a fixed table of known translations, each declaring its
//!    verse-numbering strategy.
//! 2. **Source**: the backing-resource provider yields raw bytes (gzip or
//!    plain) for a translation identifier.
//! 3. **Store**: `VersionStore` decompresses, parses, and memoizes the
//!    translation exactly once per identifier; all accessors operate on the
//!    cached structure.
//! 4. **Search**: a linear scan over books -> chapters -> verses, emitting
//!    highlight spans, capped at 100 results.
//!
//! ## Submodules
//! - **`catalog`**: the static version catalog.
//! - **`source`**: the `TextSource` trait and filesystem implementation.
//! - **`text`**: the decoded translation structure and verse numbering rules.
//! - **`store`**: load-and-cache plus chapter/passage/book accessors.
//! - **`search`**: the substring scan engine.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod catalog;
pub mod handlers;
pub mod search;
pub mod source;
pub mod store;
pub mod text;
pub mod types;
