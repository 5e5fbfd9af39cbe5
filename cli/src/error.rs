#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate. Only process-fatal conditions live
//! here; recoverable query failures stay values inside the dispatch
//! layer and never reach this type.

use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Document loading failure from the core crate.
    #[display("{_0}")]
    Spec(apidex_core::SpecError),

    /// General failure message.
    #[display("Operation failed: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// Implemented manually (instead of `derive(Error)`) because the
/// `General(String)` variant contains a `String`, which does not implement
/// `std::error::Error`, so an auto-derived `source()` would fail to compile.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
