//! Error taxonomy for the reporting client.
//!
//! Precondition failures (`Config`, `State`) are returned before any network
//! activity. Everything else comes back from an awaited request.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GaError {
    /// A required construction or login argument was missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The client is not in a state that allows the operation.
    #[error("state error: {0}")]
    State(String),

    /// The identity provider rejected the credentials or failed to answer.
    #[error("login failed: {0}")]
    Login(String),

    /// Network or HTTP-level failure before a response was read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The reporting API answered with a non-200 status.
    #[error("Bad GA query ({status}): {body}")]
    Api { status: u16, body: String },

    /// The reporting API answered 200 with a body that is not valid JSON.
    #[error("failed to parse GA response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GaError {
    pub fn config(msg: impl Into<String>) -> Self {
        GaError::Config(msg.into())
    }

    pub fn state(msg: impl Into<String>) -> Self {
        GaError::State(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GaError>;
