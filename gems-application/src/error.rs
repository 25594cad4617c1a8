use gems_core::gateways::Error as GatewayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("The background task has stopped")]
    Stopped,
}

/// The error signal that is published to observers.
///
/// Only the message survives so that it can be cloned
/// into every observed state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to load locations: {reason}")]
pub struct LoadError {
    reason: String,
}

impl LoadError {
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<GatewayError> for LoadError {
    fn from(err: GatewayError) -> Self {
        Self {
            reason: err.to_string(),
        }
    }
}
