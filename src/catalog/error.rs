use thiserror::Error;

/// Errors raised while talking to the item catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog API error: {code} {text}")]
    Status { code: u16, text: String },
    #[error("catalog unreachable: {0}")]
    Transport(String),
    #[error("unexpected catalog response: {0}")]
    Decode(String),
}

impl From<ureq::Error> for CatalogError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, response) => CatalogError::Status {
                code,
                text: response.status_text().to_string(),
            },
            ureq::Error::Transport(transport) => CatalogError::Transport(transport.to_string()),
        }
    }
}
