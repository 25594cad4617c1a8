use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

mod lenient;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id            : String,
    pub name          : String,
    #[serde(default)]
    pub description   : String,
    #[serde(default)]
    pub category      : String,
    // Decimal columns may be delivered as strings.
    #[serde(with = "lenient::f64")]
    pub latitude      : f64,
    #[serde(with = "lenient::f64")]
    pub longitude     : f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address       : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city          : Option<String>,
    #[serde(default)]
    pub photos        : Vec<Photo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status        : Option<ReviewStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub created_at    : Option<OffsetDateTime>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

/// Query parameters of `GET /locations` restricted to a bounding box.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct BoundsQuery {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// Query parameters of `GET /locations/search`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SearchQuery {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Error body of a failed API request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{status_code}: {message}")]
pub struct Error {
    pub status_code: u16,
    pub message: ErrorMessage,
}

/// Validation failures are reported as a list of messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Multiple(Vec<String>),
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Single(msg) => f.write_str(msg),
            Self::Multiple(msgs) => f.write_str(&msgs.join("; ")),
        }
    }
}
