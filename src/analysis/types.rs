//! Typed views of the model's analysis responses.
//!
//! Every struct defaults every field, so a response missing a section (or
//! the "empty object" produced for unparseable output) still deserializes
//! and renders as empty sections.

use serde::{Deserialize, Serialize};

use crate::structure::Structure;

/// A named physical or chemical property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    /// Property name, e.g. "Molar mass".
    #[serde(deserialize_with = "crate::lenient::string")]
    pub name: String,
    /// Value with unit, as text.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub value: String,
}

/// Structure elucidation from an image.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageAnalysis {
    /// Common or IUPAC name.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub molecule_name: String,
    /// Molecular formula.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub formula: String,
    /// What the image shows and how the structure was inferred.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub description: String,
    /// Notable properties.
    #[serde(deserialize_with = "crate::lenient::list")]
    pub properties: Vec<Property>,
    /// Functional groups present.
    #[serde(deserialize_with = "crate::lenient::list")]
    pub functional_groups: Vec<String>,
    /// The proposed structure.
    #[serde(deserialize_with = "crate::lenient::optional")]
    pub structure: Option<Structure>,
}

/// A chemical entity mentioned in a text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    /// Entity name as written.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub name: String,
    /// Kind of entity ("compound", "reaction", "element", ...).
    #[serde(rename = "type", deserialize_with = "crate::lenient::string")]
    pub kind: String,
    /// Short description.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub description: String,
}

/// Entity extraction and summary for a block of text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextAnalysis {
    /// Summary of the text.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub summary: String,
    /// Chemical entities found.
    #[serde(deserialize_with = "crate::lenient::list")]
    pub entities: Vec<Entity>,
    /// Key findings.
    #[serde(deserialize_with = "crate::lenient::list")]
    pub key_findings: Vec<String>,
}

/// Whether each comparison input names a molecule or a structure format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputValidation {
    /// First input is a molecule name, formula, SMILES, or InChI.
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub input1_valid: bool,
    /// Second input is a molecule name, formula, SMILES, or InChI.
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub input2_valid: bool,
}

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparedMolecule {
    /// Resolved name.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub name: String,
    /// Molecular formula.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub formula: String,
    /// Structure for rendering.
    #[serde(deserialize_with = "crate::lenient::optional")]
    pub structure: Option<Structure>,
}

/// Side-by-side comparison of two molecules.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComparisonResult {
    /// First molecule.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub molecule1: ComparedMolecule,
    /// Second molecule.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub molecule2: ComparedMolecule,
    /// Structural similarity, 0 to 100.
    #[serde(deserialize_with = "crate::lenient::float")]
    pub similarity_score: f32,
    /// Shared features.
    #[serde(deserialize_with = "crate::lenient::list")]
    pub similarities: Vec<String>,
    /// Distinguishing features.
    #[serde(deserialize_with = "crate::lenient::list")]
    pub differences: Vec<String>,
    /// Overall verdict.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub summary: String,
}

impl ComparisonResult {
    /// The similarity score clamped to 0..=100; non-finite scores read as 0.
    #[must_use]
    pub fn similarity_percent(&self) -> f32 {
        if self.similarity_score.is_finite() {
            self.similarity_score.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

/// One report section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Section heading.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub heading: String,
    /// Section body.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub content: String,
}

/// A generated research report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchReport {
    /// Report title.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub title: String,
    /// Short abstract.
    #[serde(rename = "abstract", deserialize_with = "crate::lenient::string")]
    pub summary: String,
    /// Report body.
    #[serde(deserialize_with = "crate::lenient::list")]
    pub sections: Vec<ReportSection>,
    /// Cited sources.
    #[serde(deserialize_with = "crate::lenient::list")]
    pub references: Vec<String>,
}
