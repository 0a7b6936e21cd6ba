//! Error types for the money library.

/// Errors from parsing the canonical `µ<micros>(1x)` money form.
#[derive(Debug, thiserror::Error)]
pub enum ParseMoneyError {
    #[error("Unrecognized money format (expected µ<micros>(1x)): {0}")]
    UnrecognizedFormat(String),

    #[error("Invalid micros count: {0}")]
    InvalidMicros(#[from] std::num::ParseIntError),
}
