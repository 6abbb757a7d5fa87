use thiserror::Error;

/// Draw inputs that cannot produce a result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("enter at least one participant (names separated by '|' or '/')")]
    NoParticipants,
    #[error("the number of winners must be at least 1")]
    InvalidWinnerCount,
    #[error("cannot draw {requested} winners from {available} participants")]
    TooManyWinners { requested: usize, available: usize },
}
