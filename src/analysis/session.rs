//! Result and error state for one analysis panel.

use super::ParseResult;
use crate::error::MolsightError;

const GENERIC_FAILURE: &str = "The analysis failed. Please try again.";

/// The last result of one kind of analysis, plus a dismissible error.
///
/// A failure clears the previous result so stale output is never shown
/// under a new error. Retrying is simply another call.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSession<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> Default for AnalysisSession<T> {
    fn default() -> Self {
        Self {
            result: None,
            error: None,
        }
    }
}

impl<T> AnalysisSession<T> {
    /// Empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last successful result.
    #[must_use]
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// The current error message.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Store a reply. Unparseable replies show as the empty result.
    pub fn succeed(&mut self, result: ParseResult<T>)
    where
        T: Default,
    {
        self.result = Some(result.unwrap_or_default());
        self.error = None;
    }

    /// Record a failure, clearing any previous result.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("analysis failed: {message}");
        self.result = None;
        self.error = Some(if message.trim().is_empty() {
            GENERIC_FAILURE.to_owned()
        } else {
            message
        });
    }

    /// Store the outcome of an analysis call.
    pub fn record(&mut self, outcome: Result<ParseResult<T>, MolsightError>)
    where
        T: Default,
    {
        match outcome {
            Ok(result) => self.succeed(result),
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Hide the error banner.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TextAnalysis;

    fn summary(text: &str) -> ParseResult<TextAnalysis> {
        ParseResult::Ok(TextAnalysis {
            summary: text.to_owned(),
            ..TextAnalysis::default()
        })
    }

    #[test]
    fn failure_clears_the_previous_result() {
        let mut session = AnalysisSession::new();
        session.record(Ok(summary("first")));
        assert_eq!(session.result().unwrap().summary, "first");

        session.record(Err(MolsightError::Upstream("quota exceeded".to_owned())));
        assert!(session.result().is_none());
        assert_eq!(session.error(), Some("quota exceeded"));

        session.dismiss_error();
        assert!(session.error().is_none());
    }

    #[test]
    fn retry_after_failure_clears_the_error() {
        let mut session = AnalysisSession::new();
        session.fail("");
        assert_eq!(session.error(), Some(GENERIC_FAILURE));
        session.record(Ok(summary("again")));
        assert!(session.error().is_none());
        assert!(session.result().is_some());
    }

    #[test]
    fn empty_reply_is_an_empty_result() {
        let mut session: AnalysisSession<TextAnalysis> = AnalysisSession::new();
        session.succeed(ParseResult::Empty);
        assert_eq!(session.result(), Some(&TextAnalysis::default()));
        assert!(session.error().is_none());
    }
}
