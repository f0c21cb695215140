//! HTTP answer source

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ORIGIN, USER_AGENT};
use tracing::{debug, info};

use super::{AnswerSource, Puzzle, parse_response};
use crate::error::{Error, Result};
use crate::storage::date_key;
use chrono::NaiveDate;

/// Upstream puzzle endpoint; `{date}` is replaced with `YYYY-MM-DD`.
pub const DEFAULT_ANSWER_URL: &str = "https://www.nytimes.com/svc/wordle/v2/{date}.json";

/// Origin header the upstream endpoint expects.
const UPSTREAM_ORIGIN: &str = "https://www.nytimes.com";

/// Fetches answers from a URL template.
pub struct HttpAnswerSource {
    client: Client,
    url_template: String,
}

impl HttpAnswerSource {
    /// Create a source for `url_template` with the given request timeout.
    ///
    /// # Errors
    /// Returns `Error::AnswerUnavailable` if the HTTP client cannot be built.
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url_template: url_template.into(),
        })
    }

    /// Request URL for `date`.
    #[must_use]
    pub fn url_for(&self, date: NaiveDate) -> String {
        self.url_template.replace("{date}", &date_key(date))
    }
}

impl AnswerSource for HttpAnswerSource {
    fn puzzle(&self, date: NaiveDate) -> Result<Puzzle> {
        let url = self.url_for(date);
        debug!(%url, "Fetching answer");

        let response = self
            .client
            .get(&url)
            .header(ORIGIN, UPSTREAM_ORIGIN)
            .header(
                USER_AGENT,
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            )
            .send()?;

        let status = response.status();
        let body = response.text()?;

        let puzzle = interpret_response(status, &body)?;
        info!(date = %date_key(date), id = ?puzzle.id, "Fetched answer");
        Ok(puzzle)
    }
}

/// Combine the HTTP status with the parsed body.
///
/// A non-2xx status is unavailable even when the body parses; error bodies
/// may still carry a readable message, which is kept.
fn interpret_response(status: StatusCode, body: &str) -> Result<Puzzle> {
    match parse_response(body) {
        Ok(puzzle) if status.is_success() => Ok(puzzle),
        Ok(_) => Err(Error::AnswerUnavailable(format!("HTTP {status}"))),
        Err(e) if status.is_success() => Err(e),
        Err(e) => Err(Error::AnswerUnavailable(format!("HTTP {status}: {e}"))),
    }
}
