use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod gateway;
mod public;
mod retry;

pub use self::{public::*, retry::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("{0}")]
    Api(#[from] gems_boundary::Error),
}

impl Error {
    /// Failures that might disappear when the request is repeated.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Fetch(_) => true,
            Self::Decode(_) => false,
            Self::Api(err) => err.status_code >= 500,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(format!("{err}"))
        } else {
            Self::Fetch(format!("{err}"))
        }
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    // ensure we've got 2xx status
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let body = response.text().await?;
        Err(api_error(status, &body).into())
    }
}

fn api_error(status: StatusCode, body: &str) -> gems_boundary::Error {
    serde_json::from_str(body).unwrap_or_else(|_| gems_boundary::Error {
        status_code: status.as_u16(),
        message: gems_boundary::ErrorMessage::Single(
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_owned(),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_body() {
        let err = api_error(
            StatusCode::BAD_REQUEST,
            r#"{"statusCode":400,"message":["maxLat must be a number"]}"#,
        );
        assert_eq!(err.status_code, 400);
        assert_eq!(err.to_string(), "400: maxLat must be a number");
    }

    #[test]
    fn fall_back_to_the_status_code() {
        let err = api_error(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>");
        assert_eq!(err.status_code, 502);
        assert_eq!(err.to_string(), "502: Bad Gateway");
    }

    #[test]
    fn transient_errors() {
        assert!(Error::Fetch("connection refused".into()).is_transient());
        assert!(!Error::Decode("expected value".into()).is_transient());
        let api = |status_code| {
            Error::Api(gems_boundary::Error {
                status_code,
                message: gems_boundary::ErrorMessage::Single("".into()),
            })
        };
        assert!(api(500).is_transient());
        assert!(api(503).is_transient());
        assert!(!api(400).is_transient());
        assert!(!api(404).is_transient());
    }
}
