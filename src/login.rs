//! Identity provider seam.
//!
//! The reporting API accepts an opaque token; how it is obtained is up to the
//! provider plugged into [`Client::login`](crate::Client::login).

use crate::error::{GaError, Result};
use std::future::Future;

/// Scope requested for reporting API tokens.
pub const ANALYTICS_SCOPE: &str = "analytics";

pub trait LoginProvider {
    /// Exchange credentials for a token valid for `scope`.
    fn login(
        &self,
        email: &str,
        password: &str,
        scope: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// Provider that hands back a token obtained out of band.
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl LoginProvider for StaticToken {
    async fn login(&self, _email: &str, _password: &str, _scope: &str) -> Result<String> {
        if self.token.is_empty() {
            return Err(GaError::Login("no token configured".to_string()));
        }
        Ok(self.token.clone())
    }
}
