use std::path::PathBuf;

use thiserror::Error;

use crate::model::{forms::FormError, session::VoteError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] figment::Error),
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed seed data: {0}")]
    Seed(#[from] serde_json::Error),
    #[error("Duplicate {scope} id `{id}`")]
    DuplicateId { scope: &'static str, id: String },
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
    #[error(transparent)]
    Vote(#[from] VoteError),
    #[error(transparent)]
    Form(#[from] FormError),
}
