use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "2D Rendering", inline)]
#[serde(default)]
/// Stroke and label parameters for the 2D drawing.
pub struct RenderOptions {
    /// Single-bond stroke width in model-coordinate units at zoom 1.
    #[schemars(title = "Bond Width", range(min = 0.5, max = 6.0), extend("step" = 0.1))]
    pub base_stroke: f32,
    /// Stroke/label scale for PubChem coordinates relative to model ones.
    /// PubChem bond lengths are about 1 unit, model layouts about 40.
    #[schemars(skip)]
    pub external_density: f32,
    /// Opacity of the solid line in an aromatic bond.
    #[schemars(title = "Aromatic Opacity", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub aromatic_opacity: f32,
    /// Dash pattern for the aromatic dashed line, in stroke widths.
    #[schemars(skip)]
    pub dash_length: f32,
    /// Atom label font size in model-coordinate units.
    #[schemars(title = "Label Size", range(min = 6.0, max = 32.0), extend("step" = 1.0))]
    pub font_size: f32,
    /// Label carbon atoms as well as heteroatoms.
    #[schemars(title = "Show Carbon Labels")]
    pub label_carbons: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_stroke: 2.0,
            external_density: 0.1,
            aromatic_opacity: 0.5,
            dash_length: 2.0,
            font_size: 14.0,
            label_carbons: false,
        }
    }
}
