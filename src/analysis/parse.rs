//! Tolerant parsing of model JSON.
//!
//! Models often wrap JSON in Markdown code fences and occasionally return
//! something that is not JSON at all. Neither is worth failing an analysis
//! over: fences are stripped, and anything unparseable becomes
//! [`ParseResult::Empty`] so the UI shows empty sections instead of an
//! error.

use serde::de::DeserializeOwned;

/// Outcome of parsing a model response.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<T> {
    /// The response parsed.
    Ok(T),
    /// The response was not valid JSON for `T`.
    Empty,
}

impl<T> ParseResult<T> {
    /// Whether parsing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The parsed value, if any.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Borrow the parsed value, if any.
    #[must_use]
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// The parsed value, or the "empty object" (all fields defaulted).
    #[must_use]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.ok().unwrap_or_default()
    }
}

/// Remove a surrounding Markdown code fence (with or without a language
/// tag) and outer whitespace.
#[must_use]
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.split_once('\n') {
        Some((_tag, body)) => body,
        None => rest.trim_start_matches(char::is_alphanumeric),
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse a model response into `T`, never failing.
pub fn parse_model_json<T: DeserializeOwned>(raw: &str) -> ParseResult<T> {
    let body = strip_code_fences(raw);
    match serde_json::from_str(body) {
        Ok(value) => ParseResult::Ok(value),
        Err(e) => {
            log::warn!(
                "unparseable model response ({e}); treating as empty: {:.120}",
                body
            );
            ParseResult::Empty
        }
    }
}
