//! Transform error types.

use thiserror::Error;

/// Errors that halt a document rewrite.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// A link tag was authored without any props object.
    #[error("Encountered \"{tag}\" element without required prop `href`")]
    MissingProps { tag: String },
}
