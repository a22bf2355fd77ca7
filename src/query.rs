//! Report query builder
//!
//! A [`QueryBuilder`] is handed out by [`Client::query`](crate::Client::query)
//! already bound to the client's token and view. Setters consume and return the
//! builder so calls chain; [`QueryBuilder::get`] borrows it, so the same
//! configuration can be re-issued.
//!
//! ```rust,no_run
//! # async fn example(client: &ga_query::Client) -> ga_query::Result<()> {
//! use chrono::NaiveDate;
//!
//! let report = client
//!     .query()?
//!     .visitors()
//!     .weekly()
//!     .start(NaiveDate::from_ymd_opt(2014, 1, 1).unwrap())
//!     .end("2014-02-01")
//!     .get()
//!     .await?;
//! println!("{}", report["rows"]);
//! # Ok(())
//! # }
//! ```

use crate::dates::{self, DateValue};
use crate::error::{GaError, Result};
use crate::shortcuts;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;

/// Core reporting API v3 data endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/analytics/v3/data/ga";

/// Everything a report query carries besides credentials.
///
/// Caller options are merged over the defaults with struct-update syntax:
///
/// ```rust
/// use ga_query::QueryOptions;
///
/// let options = QueryOptions { results: 500, ..Default::default() };
/// assert_eq!(options.index, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub dimensions: Vec<String>,
    pub metrics: Vec<String>,
    pub filters: Vec<String>,
    pub segment: Option<String>,
    pub sort: Option<String>,
    pub start: DateValue,
    pub end: DateValue,
    /// 1-based index of the first row returned.
    pub index: u32,
    /// Maximum rows per page.
    pub results: u32,
    pub pretty: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            dimensions: Vec::new(),
            metrics: Vec::new(),
            filters: Vec::new(),
            segment: None,
            sort: None,
            start: dates::default_start(),
            end: dates::default_end(),
            index: 1,
            results: 100,
            pretty: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    http: reqwest::Client,
    endpoint: String,
    token: String,
    view_id: String,
    options: QueryOptions,
}

impl QueryBuilder {
    pub(crate) fn new(
        http: reqwest::Client,
        endpoint: String,
        token: String,
        view_id: String,
        options: QueryOptions,
    ) -> Self {
        Self {
            http,
            endpoint,
            token,
            view_id,
            options,
        }
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    pub fn view_id(&self) -> &str {
        &self.view_id
    }

    pub fn dimension(mut self, dimension: impl Into<String>) -> Self {
        self.options.dimensions.push(dimension.into());
        self
    }

    pub fn metric(mut self, metric: impl Into<String>) -> Self {
        self.options.metrics.push(metric.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.options.filters.push(filter.into());
        self
    }

    /// Replace the segment.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.options.segment = Some(segment.into());
        self
    }

    /// Replace the sort expression, e.g. `-ga:visits`.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.options.sort = Some(sort.into());
        self
    }

    /// Dates are formatted as `YYYY-MM-DD` right away; strings are kept verbatim.
    pub fn start(mut self, start: impl Into<DateValue>) -> Self {
        self.options.start = start.into().normalized();
        self
    }

    pub fn end(mut self, end: impl Into<DateValue>) -> Self {
        self.options.end = end.into().normalized();
        self
    }

    pub fn results(mut self, results: u32) -> Self {
        self.options.results = results;
        self
    }

    pub fn index(mut self, index: u32) -> Self {
        self.options.index = index;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.options.pretty = pretty;
        self
    }

    pub fn minutely(self) -> Self {
        self.dimension(shortcuts::MINUTE)
    }

    pub fn hourly(self) -> Self {
        self.dimension(shortcuts::HOUR)
    }

    pub fn date(self) -> Self {
        self.dimension(shortcuts::DATE)
    }

    pub fn daily(self) -> Self {
        self.dimension(shortcuts::DAY)
    }

    pub fn weekly(self) -> Self {
        self.dimension(shortcuts::WEEK)
    }

    pub fn monthly(self) -> Self {
        self.dimension(shortcuts::MONTH)
    }

    pub fn yearly(self) -> Self {
        self.dimension(shortcuts::YEAR)
    }

    pub fn visitors(self) -> Self {
        self.metric(shortcuts::VISITS)
    }

    /// Add the dimension registered under a shortcut name such as `"weekly"`.
    pub fn dimension_shortcut(self, key: &str) -> Result<Self> {
        let value = shortcuts::dimension(key)
            .ok_or_else(|| GaError::config(format!("Unknown dimension shortcut: {}", key)))?;
        Ok(self.dimension(value))
    }

    pub fn metric_shortcut(self, key: &str) -> Result<Self> {
        let value = shortcuts::metric(key)
            .ok_or_else(|| GaError::config(format!("Unknown metric shortcut: {}", key)))?;
        Ok(self.metric(value))
    }

    /// The query string parameters `get` will send, in wire order.
    ///
    /// Fails with a config error when `results` or `index` is zero.
    pub fn query_pairs(&self) -> Result<Vec<(&'static str, String)>> {
        let options = &self.options;
        if options.results == 0 {
            return Err(GaError::config("Results must be at least 1."));
        }
        if options.index == 0 {
            return Err(GaError::config("Start index must be at least 1."));
        }

        let mut pairs = vec![
            ("ids", format!("ga:{}", self.view_id)),
            ("dimensions", options.dimensions.join(",")),
            ("metrics", options.metrics.join(",")),
            ("filters", options.filters.join(",")),
            ("start-date", options.start.as_wire()),
            ("end-date", options.end.as_wire()),
            ("max-results", options.results.to_string()),
            ("prettyprint", options.pretty.to_string()),
            ("start-index", options.index.to_string()),
        ];
        if let Some(sort) = &options.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(segment) = &options.segment {
            pairs.push(("segment", segment.clone()));
        }
        Ok(pairs)
    }

    /// Run the query and return the parsed JSON report.
    pub async fn get(&self) -> Result<serde_json::Value> {
        self.get_as().await
    }

    /// Run the query and deserialize the report into `T`.
    pub async fn get_as<T: DeserializeOwned>(&self) -> Result<T> {
        let pairs = self.query_pairs()?;
        let span = info_span!(
            "ga_query",
            request_id = %Uuid::new_v4(),
            view_id = %self.view_id
        );

        async move {
            debug!(params = ?pairs, "querying ..");

            let response = self
                .http
                .get(&self.endpoint)
                .header(AUTHORIZATION, format!("GoogleLogin {}", self.token))
                .query(&pairs)
                .send()
                .await?;

            let status = response.status();
            let body = response.text().await?;
            debug!(status = status.as_u16(), bytes = body.len(), "finished query");

            if status != StatusCode::OK {
                warn!(status = status.as_u16(), "GA query rejected");
                return Err(GaError::Api {
                    status: status.as_u16(),
                    body,
                });
            }

            Ok(serde_json::from_str(&body)?)
        }
        .instrument(span)
        .await
    }
}
