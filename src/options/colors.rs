use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::structure::element::{cpk_color, NEUTRAL_COLOR};

/// Color palette for 2D drawings and 3D scenes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Drawing background. Also used for the gap line in multiple bonds.
    pub background: [f32; 3],
    /// 2D bond stroke color.
    pub bond: [f32; 3],
    /// 3D bond cylinder color.
    pub scene_bond: [f32; 3],
    /// Per-element color overrides keyed by symbol (any case).
    pub element_overrides: HashMap<String, [f32; 3]>,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: [1.0, 1.0, 1.0],
            bond: [0.2, 0.2, 0.2],
            scene_bond: [0.6, 0.6, 0.6],
            element_overrides: HashMap::new(),
        }
    }
}

impl ColorOptions {
    /// Look up an element color. Overrides win over the CPK table; unlisted
    /// elements fall back to neutral gray.
    #[must_use]
    pub fn element_color(&self, symbol: &str) -> [f32; 3] {
        let symbol = symbol.trim();
        self.element_overrides
            .iter()
            .find(|(s, _)| s.eq_ignore_ascii_case(symbol))
            .map(|(_, c)| *c)
            .or_else(|| cpk_color(symbol))
            .unwrap_or(NEUTRAL_COLOR)
    }
}
