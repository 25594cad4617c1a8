pub mod location_query;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The request failed: {0}")]
    Fetch(String),
    #[error("The API rejected the request: {0}")]
    Api(String),
    #[error("The response contained an invalid location: {0}")]
    InvalidLocation(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
