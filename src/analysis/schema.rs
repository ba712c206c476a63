//! Fixed JSON response schemas sent with each model request.
//!
//! These mirror the serde layouts in [`super::types`]; a schema change
//! without the matching struct change shows up as empty sections.

use serde_json::{json, Value};

fn string_list() -> Value {
    json!({"type": "array", "items": {"type": "string"}})
}

fn bond() -> Value {
    json!({
        "type": "object",
        "properties": {
            "from": {"type": "integer"},
            "to": {"type": "integer"},
            "order": {"type": "integer", "description": "1 single, 2 double, 3 triple, 4 aromatic"}
        },
        "required": ["from", "to", "order"]
    })
}

/// Schema for a [`Structure`](crate::Structure): 3D atoms, bonds, and an
/// optional 2D layout.
#[must_use]
pub fn structure() -> Value {
    json!({
        "type": "object",
        "properties": {
            "smiles": {"type": "string"},
            "inchi": {"type": "string"},
            "verification": {"type": "string"},
            "atoms": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "integer"},
                        "element": {"type": "string"},
                        "x": {"type": "number"},
                        "y": {"type": "number"},
                        "z": {"type": "number"}
                    },
                    "required": ["element", "x", "y", "z"]
                }
            },
            "bonds": {"type": "array", "items": bond()},
            "structure2d": {
                "type": "object",
                "properties": {
                    "atoms": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "id": {"type": "integer"},
                                "element": {"type": "string"},
                                "x": {"type": "number"},
                                "y": {"type": "number"}
                            },
                            "required": ["id", "element", "x", "y"]
                        }
                    },
                    "bonds": {"type": "array", "items": bond()}
                }
            }
        },
        "required": ["smiles", "atoms", "bonds"]
    })
}

/// Schema for [`ImageAnalysis`](super::ImageAnalysis).
#[must_use]
pub fn image_analysis() -> Value {
    json!({
        "type": "object",
        "properties": {
            "moleculeName": {"type": "string"},
            "formula": {"type": "string"},
            "description": {"type": "string"},
            "properties": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "value": {"type": "string"}
                    },
                    "required": ["name", "value"]
                }
            },
            "functionalGroups": string_list(),
            "structure": structure()
        },
        "required": ["moleculeName", "formula", "description", "structure"]
    })
}

/// Schema for [`TextAnalysis`](super::TextAnalysis).
#[must_use]
pub fn text_analysis() -> Value {
    json!({
        "type": "object",
        "properties": {
            "summary": {"type": "string"},
            "entities": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "type": {"type": "string"},
                        "description": {"type": "string"}
                    },
                    "required": ["name", "type"]
                }
            },
            "keyFindings": string_list()
        },
        "required": ["summary", "entities", "keyFindings"]
    })
}

/// Schema for [`InputValidation`](super::InputValidation).
#[must_use]
pub fn input_validation() -> Value {
    json!({
        "type": "object",
        "properties": {
            "input1Valid": {"type": "boolean"},
            "input2Valid": {"type": "boolean"}
        },
        "required": ["input1Valid", "input2Valid"]
    })
}

/// Schema for [`ComparisonResult`](super::ComparisonResult).
#[must_use]
pub fn comparison() -> Value {
    let molecule = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "formula": {"type": "string"},
            "structure": structure()
        },
        "required": ["name", "structure"]
    });
    json!({
        "type": "object",
        "properties": {
            "molecule1": molecule.clone(),
            "molecule2": molecule,
            "similarityScore": {"type": "number", "minimum": 0, "maximum": 100},
            "similarities": string_list(),
            "differences": string_list(),
            "summary": {"type": "string"}
        },
        "required": ["molecule1", "molecule2", "similarityScore", "similarities", "differences"]
    })
}

/// Schema for [`ResearchReport`](super::ResearchReport).
#[must_use]
pub fn research_report() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": {"type": "string"},
            "abstract": {"type": "string"},
            "sections": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "heading": {"type": "string"},
                        "content": {"type": "string"}
                    },
                    "required": ["heading", "content"]
                }
            },
            "references": string_list()
        },
        "required": ["title", "abstract", "sections"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemas_name_the_serde_fields() {
        let image = image_analysis();
        assert!(image["properties"]["moleculeName"].is_object());
        assert!(image["properties"]["structure"]["properties"]["structure2d"].is_object());
        assert!(input_validation()["properties"]["input1Valid"].is_object());
        assert!(comparison()["properties"]["similarityScore"].is_object());
        assert!(research_report()["properties"]["abstract"].is_object());
        assert!(text_analysis()["properties"]["keyFindings"].is_object());
    }

    #[test]
    fn every_schema_is_an_object_with_required_fields() {
        for schema in [
            structure(),
            image_analysis(),
            text_analysis(),
            input_validation(),
            comparison(),
            research_report(),
        ] {
            assert_eq!(schema["type"], "object");
            assert!(schema["required"].as_array().is_some_and(|r| !r.is_empty()));
        }
    }
}
