//! Error types for the input layer.

use thiserror::Error;

/// Input-layer error type.
///
/// Only configuration can fail. Resolution never returns an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A binding description is malformed
    #[error("Invalid binding: {0}")]
    InvalidBinding(String),

    /// A raw action id does not belong to any known namespace
    #[error("Unknown action id: {0:#06x}")]
    UnknownAction(u16),

    /// A value does not fit the range it is stored in
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
