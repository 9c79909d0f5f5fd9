//! Bible Study Service Library
//!
//! This library crate defines the core modules of the Bible study backend.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled subsystems plus a shared
//! error layer:
//!
//! - **`bible`**: The text retrieval core. Loads compressed translation data on
//!   demand, caches it for the process lifetime, and serves chapter/passage
//!   lookups and full-text substring search with highlight offsets.
//! - **`lexicon`**: A read-only Greek/Hebrew lexicon backed by a static
//!   Strong's dataset. Supports lookup by Strong's number and filtered,
//!   paginated substring queries.
//! - **`studies`**: In-memory CRUD for user word-study records, gated by a
//!   bearer-token check.
//! - **`error`**: The typed error taxonomy shared by all modules and its
//!   translation into HTTP responses.

pub mod bible;
pub mod error;
pub mod lexicon;
pub mod studies;
