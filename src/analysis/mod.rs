//! The model boundary.
//!
//! Each analysis builds a prompt and a fixed response schema, hands them to
//! a [`ModelClient`], and parses the reply tolerantly. Transport failures
//! are errors; replies that are not valid JSON are not (they come back as
//! [`ParseResult::Empty`]).

pub mod comparison;
pub mod parse;
pub mod prompt;
pub mod schema;
pub mod session;
pub mod types;

pub use comparison::{invalid_input_message, Comparator, ComparisonOutcome};
pub use parse::{parse_model_json, strip_code_fences, ParseResult};
pub use session::AnalysisSession;
pub use types::{
    ComparedMolecule, ComparisonResult, Entity, ImageAnalysis, InputValidation,
    Property, ReportSection, ResearchReport, TextAnalysis,
};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::MolsightError;

/// Binary data sent alongside the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineData {
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// Raw bytes.
    pub data: Vec<u8>,
}

/// One request to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    /// Prompt text.
    pub prompt: String,
    /// JSON schema the response must follow.
    pub schema: Value,
    /// Optional attachment.
    pub inline_data: Option<InlineData>,
}

impl ModelRequest {
    /// A text-only request.
    #[must_use]
    pub fn new(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            schema,
            inline_data: None,
        }
    }

    /// Attach binary data.
    #[must_use]
    pub fn with_inline_data(mut self, data: InlineData) -> Self {
        self.inline_data = Some(data);
        self
    }
}

/// Sends a request to the hosted model and returns its raw text reply.
///
/// Implementations map transport and API failures (network, quota, auth)
/// to [`MolsightError::Upstream`] with the reason when one is known.
pub trait ModelClient {
    /// Generate a reply for `request`.
    ///
    /// # Errors
    ///
    /// Any failure to obtain a reply.
    fn generate(&self, request: &ModelRequest) -> Result<String, MolsightError>;
}

impl<F> ModelClient for F
where
    F: Fn(&ModelRequest) -> Result<String, MolsightError>,
{
    fn generate(&self, request: &ModelRequest) -> Result<String, MolsightError> {
        self(request)
    }
}

fn run<T, C>(client: &C, request: &ModelRequest) -> Result<ParseResult<T>, MolsightError>
where
    T: DeserializeOwned,
    C: ModelClient + ?Sized,
{
    let raw = client.generate(request)?;
    Ok(parse_model_json(&raw))
}

/// Identify the molecule in an image.
///
/// # Errors
///
/// Returns the client's error if the request fails.
pub fn analyze_image<C: ModelClient + ?Sized>(
    client: &C,
    image: InlineData,
) -> Result<ParseResult<ImageAnalysis>, MolsightError> {
    let request = ModelRequest::new(prompt::IMAGE, schema::image_analysis())
        .with_inline_data(image);
    run(client, &request)
}

/// Extract entities and findings from text.
///
/// # Errors
///
/// Returns the client's error if the request fails.
pub fn analyze_text<C: ModelClient + ?Sized>(
    client: &C,
    text: &str,
) -> Result<ParseResult<TextAnalysis>, MolsightError> {
    let request = ModelRequest::new(prompt::text(text), schema::text_analysis());
    run(client, &request)
}

/// Ask whether both comparison inputs are recognized molecules.
///
/// # Errors
///
/// Returns the client's error if the request fails.
pub fn validate_inputs<C: ModelClient + ?Sized>(
    client: &C,
    first: &str,
    second: &str,
) -> Result<ParseResult<InputValidation>, MolsightError> {
    let request = ModelRequest::new(
        prompt::validate(first, second),
        schema::input_validation(),
    );
    run(client, &request)
}

/// Compare two molecules without validating them first. Most callers want
/// [`Comparator::compare`].
///
/// # Errors
///
/// Returns the client's error if the request fails.
pub fn compare_molecules<C: ModelClient + ?Sized>(
    client: &C,
    first: &str,
    second: &str,
) -> Result<ParseResult<ComparisonResult>, MolsightError> {
    let request =
        ModelRequest::new(prompt::compare(first, second), schema::comparison());
    run(client, &request)
}

/// Write a research report.
///
/// # Errors
///
/// Returns the client's error if the request fails.
pub fn generate_report<C: ModelClient + ?Sized>(
    client: &C,
    topic: &str,
    context: &str,
) -> Result<ParseResult<ResearchReport>, MolsightError> {
    let request =
        ModelRequest::new(prompt::report(topic, context), schema::research_report());
    run(client, &request)
}
