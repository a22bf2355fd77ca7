//! Reporting API client
//!
//! A [`Client`] is bound to one analytics view. It starts unauthenticated,
//! picks up a token through [`Client::login`], and only then hands out
//! [`QueryBuilder`]s.

use crate::config::ApiConfig;
use crate::error::{GaError, Result};
use crate::login::{LoginProvider, ANALYTICS_SCOPE};
use crate::query::{QueryBuilder, QueryOptions, DEFAULT_ENDPOINT};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: String,
    view_id: String,
    token: Option<String>,
}

impl Client {
    /// Create a client for `view_id` against the default endpoint.
    pub fn new(view_id: impl Into<String>) -> Result<Self> {
        Self::with_http(view_id, reqwest::Client::new(), DEFAULT_ENDPOINT)
    }

    /// Create a client using the endpoint and timeout from `config`.
    pub fn from_config(view_id: impl Into<String>, config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Self::with_http(view_id, builder.build()?, &config.endpoint)
    }

    fn with_http(view_id: impl Into<String>, http: reqwest::Client, endpoint: &str) -> Result<Self> {
        let view_id = view_id.into();
        if view_id.is_empty() {
            return Err(GaError::config("GA requires a view id."));
        }
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            view_id,
            token: None,
        })
    }

    /// Point queries at a different reporting endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn view_id(&self) -> &str {
        &self.view_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Log in through `provider` and keep the returned token.
    ///
    /// Empty credentials are rejected before the provider is contacted. A
    /// provider failure leaves the client untouched and is returned as-is.
    pub async fn login<P: LoginProvider>(
        &mut self,
        provider: &P,
        email: &str,
        password: &str,
    ) -> Result<()> {
        if email.is_empty() {
            return Err(GaError::config("Email is required."));
        }
        if password.is_empty() {
            return Err(GaError::config("Password is required."));
        }

        debug!(email, "logging in ..");
        match provider.login(email, password, ANALYTICS_SCOPE).await {
            Ok(token) => {
                debug!(email, token = %redact(&token), "logged in");
                self.token = Some(token);
                Ok(())
            }
            Err(err) => {
                warn!(email, error = %err, "login failed");
                Err(err)
            }
        }
    }

    /// Start a query with default options.
    pub fn query(&self) -> Result<QueryBuilder> {
        self.query_with(QueryOptions::default())
    }

    /// Start a query seeded with `options`.
    pub fn query_with(&self, options: QueryOptions) -> Result<QueryBuilder> {
        let token = self
            .token
            .as_ref()
            .ok_or_else(|| GaError::state("Login to GA first."))?;
        Ok(QueryBuilder::new(
            self.http.clone(),
            self.endpoint.clone(),
            token.clone(),
            self.view_id.clone(),
            options,
        ))
    }
}

fn redact(token: &str) -> String {
    let prefix: String = token.chars().take(4).collect();
    format!("{}***", prefix)
}
