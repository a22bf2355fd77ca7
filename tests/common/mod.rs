#![allow(dead_code)]

use ga_query::{Client, GaError, LoginProvider, StaticToken};
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::MockServer;

pub const VIEW_ID: &str = "12345";
pub const TOKEN: &str = "test-token";

/// Provider that counts how often it was asked and answers with a fixed outcome.
pub struct CountingProvider {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingProvider {
    pub fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LoginProvider for CountingProvider {
    async fn login(&self, _email: &str, _password: &str, scope: &str) -> ga_query::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(scope, "analytics");
        if self.fail {
            Err(GaError::Login("bad credentials".to_string()))
        } else {
            Ok(TOKEN.to_string())
        }
    }
}

pub const DATA_PATH: &str = "/analytics/v3/data/ga";

pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), DATA_PATH)
}

/// A logged-in client pointed at the mock server.
pub async fn logged_in_client(server: &MockServer) -> Client {
    let mut client = Client::new(VIEW_ID)
        .expect("view id is set")
        .with_endpoint(endpoint(server));
    client
        .login(&StaticToken::new(TOKEN), "email", "password")
        .await
        .expect("static login succeeds");
    client
}
