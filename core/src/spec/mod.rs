#![deny(missing_docs)]

//! # Document Model & Loading
//!
//! - **model**: typed structures for the OpenAPI-shaped source document.
//! - **loader**: file/text loading, top-level shape validation, base URL.

pub mod loader;
pub mod model;

// Re-export the pieces the rest of the crate works with.
pub use loader::{base_url, load_file, load_str};
pub use model::{ApiDocument, SchemaObject};
