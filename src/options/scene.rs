use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "3D Scene", inline)]
#[serde(default)]
/// Ball-and-stick sizing in normalized scene units.
pub struct SceneOptions {
    /// Sphere radius for hydrogen atoms.
    #[schemars(title = "Hydrogen Radius", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub hydrogen_radius: f32,
    /// Sphere radius for every other element.
    #[schemars(title = "Atom Radius", range(min = 0.1, max = 1.5), extend("step" = 0.05))]
    pub atom_radius: f32,
    /// Cylinder radius for bonds.
    #[schemars(title = "Bond Radius", range(min = 0.02, max = 0.5), extend("step" = 0.01))]
    pub bond_radius: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            hydrogen_radius: 0.25,
            atom_radius: 0.45,
            bond_radius: 0.12,
        }
    }
}
