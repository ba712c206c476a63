//! Two-molecule comparison, gated on input validation.

use super::{
    compare_molecules, validate_inputs, AnalysisSession, ComparisonResult,
    ModelClient, ParseResult,
};
use crate::error::MolsightError;

const MISSING_INPUTS: &str = "Enter two molecules to compare.";

/// Result of [`Comparator::compare`].
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonOutcome {
    /// Both inputs were accepted and the comparison ran.
    Compared(ParseResult<ComparisonResult>),
    /// An input was rejected; no comparison request was made.
    InvalidInput {
        /// User-facing explanation naming the rejected input.
        message: String,
    },
}

/// The message shown when `input` is rejected.
#[must_use]
pub fn invalid_input_message(input: &str) -> String {
    format!("\"{input}\" is not a recognized molecule or valid structure format.")
}

/// Runs validation, then comparison, against one client.
pub struct Comparator<'a, C: ?Sized> {
    client: &'a C,
}

impl<'a, C: ModelClient + ?Sized> Comparator<'a, C> {
    /// Compare through `client`.
    #[must_use]
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Validate both inputs, then compare them.
    ///
    /// The first rejected input is reported and the comparison request is
    /// never sent. A validation reply that cannot be parsed does not block
    /// the comparison.
    ///
    /// # Errors
    ///
    /// Returns the client's error if either request fails.
    pub fn compare(
        &self,
        first: &str,
        second: &str,
    ) -> Result<ComparisonOutcome, MolsightError> {
        let (first, second) = (first.trim(), second.trim());
        if first.is_empty() || second.is_empty() {
            return Ok(ComparisonOutcome::InvalidInput {
                message: MISSING_INPUTS.to_owned(),
            });
        }

        match validate_inputs(self.client, first, second)? {
            ParseResult::Ok(v) if !v.input1_valid => {
                return Ok(invalid(first));
            }
            ParseResult::Ok(v) if !v.input2_valid => {
                return Ok(invalid(second));
            }
            ParseResult::Ok(_) => {}
            ParseResult::Empty => {
                log::warn!("input validation reply unreadable; comparing anyway");
            }
        }

        compare_molecules(self.client, first, second)
            .map(ComparisonOutcome::Compared)
    }

    /// Compare and record the outcome in `session`. Rejected inputs and
    /// upstream failures become the session's error.
    pub fn compare_into(
        &self,
        session: &mut AnalysisSession<ComparisonResult>,
        first: &str,
        second: &str,
    ) {
        match self.compare(first, second) {
            Ok(ComparisonOutcome::Compared(result)) => session.succeed(result),
            Ok(ComparisonOutcome::InvalidInput { message }) => session.fail(message),
            Err(e) => session.fail(e.to_string()),
        }
    }
}

fn invalid(input: &str) -> ComparisonOutcome {
    ComparisonOutcome::InvalidInput {
        message: invalid_input_message(input),
    }
}
