use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Coordinate normalization and 2D viewport sizing.
pub struct LayoutOptions {
    /// Radius the 3D structure is scaled to fit around its centroid.
    #[schemars(title = "Target Radius", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub target_radius: f32,
    /// Magnification applied when projecting 3D atoms onto the XY plane.
    #[schemars(skip)]
    pub projection_scale: f32,
    /// Viewport padding around PubChem coordinates (tight units).
    #[schemars(skip)]
    pub external_padding: f32,
    /// Viewport padding around model or projected coordinates.
    #[schemars(skip)]
    pub loose_padding: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            target_radius: 5.0,
            projection_scale: 40.0,
            external_padding: 1.5,
            loose_padding: 40.0,
        }
    }
}
