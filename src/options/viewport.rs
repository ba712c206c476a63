use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewport", inline)]
#[serde(default)]
/// Pan/zoom control parameters for the 2D drawing.
///
/// The scale bounds themselves are fixed; see
/// [`viewport::MIN_SCALE`](crate::viewport::MIN_SCALE).
pub struct ViewportOptions {
    /// Multiplier applied by one zoom-in step (divisor for zoom-out).
    #[schemars(title = "Zoom Step", range(min = 1.05, max = 2.0), extend("step" = 0.05))]
    pub zoom_step: f32,
    /// Scale change per unit of wheel delta.
    #[schemars(title = "Wheel Sensitivity", range(min = 0.0001, max = 0.01), extend("step" = 0.0001))]
    pub wheel_sensitivity: f32,
    /// CSS transition applied to the transform while not dragging.
    #[schemars(skip)]
    pub transition: String,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            zoom_step: 1.2,
            wheel_sensitivity: 0.001,
            transition: "transform 0.1s ease-out".to_owned(),
        }
    }
}
