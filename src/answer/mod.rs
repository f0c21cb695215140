//! Answer sources
//!
//! The answer for a date comes from an [`AnswerSource`]. A response either
//! carries a `solution` (with optional puzzle metadata) or an error message;
//! errors surface as `Error::AnswerUnavailable` and solving does not start.

mod http;

pub use http::{DEFAULT_ANSWER_URL, HttpAnswerSource};

use crate::core::Word;
use crate::error::{Error, Result};
use crate::storage::date_key;
use chrono::NaiveDate;
use serde::Deserialize;

/// Puzzle metadata for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub solution: Word,
    pub id: Option<u64>,
    pub print_date: Option<String>,
    pub days_since_launch: Option<u32>,
    pub editor: Option<String>,
}

impl Puzzle {
    /// Puzzle with only a solution
    #[must_use]
    pub const fn bare(solution: Word) -> Self {
        Self {
            solution,
            id: None,
            print_date: None,
            days_since_launch: None,
            editor: None,
        }
    }
}

/// Provider of the answer for a puzzle date
pub trait AnswerSource {
    /// Fetch the puzzle for `date`
    ///
    /// # Errors
    /// Returns `Error::AnswerUnavailable` if the answer cannot be obtained.
    fn puzzle(&self, date: NaiveDate) -> Result<Puzzle>;

    /// Fetch just the answer word for `date`
    ///
    /// # Errors
    /// Same as [`AnswerSource::puzzle`].
    fn answer(&self, date: NaiveDate) -> Result<Word> {
        self.puzzle(date).map(|p| p.solution)
    }
}

/// Source that always returns the same word, for offline use
#[derive(Debug, Clone)]
pub struct FixedAnswer(Word);

impl FixedAnswer {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self(word)
    }
}

impl AnswerSource for FixedAnswer {
    fn puzzle(&self, date: NaiveDate) -> Result<Puzzle> {
        let mut puzzle = Puzzle::bare(self.0.clone());
        puzzle.print_date = Some(date_key(date));
        Ok(puzzle)
    }
}

/// Wire format of an answer response
///
/// Accepts both the proxied shape (`success` plus fields, or `success: false`
/// with `error`) and the bare upstream payload, which has no `success` field
/// and reports failures as `status: "ERROR"` with an `errors` list.
#[derive(Debug, Deserialize)]
struct AnswerResponse {
    success: Option<bool>,
    solution: Option<String>,
    id: Option<u64>,
    print_date: Option<String>,
    days_since_launch: Option<u32>,
    editor: Option<String>,
    error: Option<String>,
    status: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
}

impl AnswerResponse {
    fn into_puzzle(self) -> Result<Puzzle> {
        let failed = self.success == Some(false)
            || self.status.as_deref() == Some("ERROR")
            || self.error.is_some();
        if failed {
            let message = self
                .error
                .or_else(|| (!self.errors.is_empty()).then(|| self.errors.join(", ")))
                .unwrap_or_else(|| "answer source reported failure".to_string());
            return Err(Error::AnswerUnavailable(message));
        }

        let solution = self
            .solution
            .ok_or_else(|| Error::AnswerUnavailable("response has no solution".to_string()))?;
        let solution = Word::new(&solution)
            .map_err(|e| Error::AnswerUnavailable(format!("bad solution {solution:?}: {e}")))?;

        Ok(Puzzle {
            solution,
            id: self.id,
            print_date: self.print_date,
            days_since_launch: self.days_since_launch,
            editor: self.editor,
        })
    }
}

/// Parse an answer response body
///
/// # Errors
/// Returns `Error::AnswerUnavailable` for failure responses, responses
/// without a valid solution, and bodies that are not JSON.
pub fn parse_response(body: &str) -> Result<Puzzle> {
    let response: AnswerResponse = serde_json::from_str(body)
        .map_err(|e| Error::AnswerUnavailable(format!("unreadable response: {e}")))?;
    response.into_puzzle()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_response() {
        let body = r#"{
            "success": true,
            "id": 1234,
            "solution": "crane",
            "print_date": "2024-03-07",
            "days_since_launch": 992,
            "editor": "Tracy Bennett"
        }"#;

        let puzzle = parse_response(body).unwrap();
        assert_eq!(puzzle.solution.text(), "crane");
        assert_eq!(puzzle.id, Some(1234));
        assert_eq!(puzzle.print_date.as_deref(), Some("2024-03-07"));
        assert_eq!(puzzle.days_since_launch, Some(992));
        assert_eq!(puzzle.editor.as_deref(), Some("Tracy Bennett"));
    }

    #[test]
    fn parses_bare_upstream_payload() {
        let body = r#"{"id": 1, "solution": "SLATE", "print_date": "2024-01-01"}"#;
        assert_eq!(parse_response(body).unwrap().solution.text(), "slate");
    }

    #[test]
    fn failure_response_is_unavailable() {
        let body = r#"{"success": false, "error": "Internal Server Error"}"#;
        let err = parse_response(body).unwrap_err();
        assert!(matches!(err, Error::AnswerUnavailable(ref m) if m == "Internal Server Error"));
    }

    #[test]
    fn upstream_error_payload_is_unavailable() {
        let body = r#"{"status": "ERROR", "errors": ["Not Found"], "results": []}"#;
        let err = parse_response(body).unwrap_err();
        assert!(matches!(err, Error::AnswerUnavailable(ref m) if m == "Not Found"));
    }

    #[test]
    fn success_without_solution_is_unavailable() {
        assert!(matches!(
            parse_response(r#"{"success": true}"#),
            Err(Error::AnswerUnavailable(_))
        ));
    }

    #[test]
    fn invalid_solution_is_unavailable() {
        assert!(matches!(
            parse_response(r#"{"success": true, "solution": "cr4ne"}"#),
            Err(Error::AnswerUnavailable(_))
        ));
    }

    #[test]
    fn non_json_is_unavailable() {
        assert!(matches!(
            parse_response("<html>oops</html>"),
            Err(Error::AnswerUnavailable(_))
        ));
    }

    #[test]
    fn fixed_answer_ignores_date() {
        let source = FixedAnswer::new(Word::new("crane").unwrap());
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

        assert_eq!(source.answer(date).unwrap().text(), "crane");
        assert_eq!(
            source.puzzle(date).unwrap().print_date.as_deref(),
            Some("2024-03-07")
        );
    }
}
