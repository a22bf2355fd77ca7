//! GA Query Library
//!
//! A fluent client for the Google Analytics core reporting API. A [`Client`]
//! is bound to one view, logs in through a pluggable [`LoginProvider`], and
//! hands out [`QueryBuilder`]s that accumulate dimensions, metrics, filters,
//! date ranges and paging before issuing a single authenticated GET.
//!
//! ## Modules
//!
//! - [`client`] - view-bound client and the login lifecycle
//! - [`query`] - query options, the chaining builder and the wire format
//! - [`shortcuts`] - fixed dimension/metric shortcut tables
//! - [`dates`] - date values and `YYYY-MM-DD` formatting
//! - [`login`] - identity provider trait
//! - [`error`] - error taxonomy
//! - [`config`] - configuration with environment variable support
//! - [`logging`] - structured logging with JSON and pretty-print formats
//!
//! ## Example
//!
//! ```rust,no_run
//! use ga_query::{Client, StaticToken};
//!
//! # async fn example() -> ga_query::Result<()> {
//! let mut client = Client::new("12345678")?;
//! client
//!     .login(&StaticToken::new("ya29.token"), "me@example.com", "secret")
//!     .await?;
//!
//! let report = client
//!     .query()?
//!     .visitors()
//!     .weekly()
//!     .start("2014-01-01")
//!     .end("2014-02-01")
//!     .get()
//!     .await?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod dates;
pub mod error;
pub mod logging;
pub mod login;
pub mod query;
pub mod shortcuts;

pub use client::Client;
pub use dates::DateValue;
pub use error::{GaError, Result};
pub use login::{LoginProvider, StaticToken};
pub use query::{QueryBuilder, QueryOptions};
