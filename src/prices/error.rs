use thiserror::Error;

/// Errors raised while editing, importing or storing rune prices.
#[derive(Debug, Error, PartialEq)]
pub enum PriceFileError {
    #[error("invalid price file: {0}")]
    InvalidFormat(String),
    #[error("unknown rune '{0}'")]
    UnknownRune(String),
    #[error("price file I/O failed: {0}")]
    Io(String),
}

impl From<std::io::Error> for PriceFileError {
    fn from(err: std::io::Error) -> Self {
        PriceFileError::Io(err.to_string())
    }
}
