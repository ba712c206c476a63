//! Centralized rendering/lookup options with TOML preset support.
//!
//! All tweakable settings (viewport control, layout sizing, 2D strokes, 3D
//! radii, colors, PubChem lookup, keybindings) are consolidated here.
//! Options serialize to/from TOML so a view preset can be saved and loaded.

mod colors;
mod fetch;
mod keybindings;
mod layout;
mod render;
mod scene;
mod viewport;

use std::path::Path;

pub use colors::ColorOptions;
pub use fetch::FetchOptions;
pub use keybindings::KeybindingOptions;
pub use layout::LayoutOptions;
pub use render::RenderOptions;
use schemars::JsonSchema;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};
pub use viewport::ViewportOptions;

use crate::error::MolsightError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[render]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Pan/zoom control parameters.
    pub viewport: ViewportOptions,
    /// Coordinate normalization and viewport sizing.
    pub layout: LayoutOptions,
    /// 2D stroke and label parameters.
    pub render: RenderOptions,
    /// 3D ball-and-stick sizing.
    pub scene: SceneOptions,
    /// Color palette.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// PubChem lookup settings.
    pub fetch: FetchOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MolsightError> {
        let content =
            std::fs::read_to_string(path).map_err(MolsightError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, MolsightError> {
        toml::from_str(content)
            .map_err(|e| MolsightError::OptionsParse(e.to_string()))
    }

    /// Write these options as a preset, creating parent directories.
    ///
    /// # Errors
    ///
    /// Fails if the options cannot be serialized or the file cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), MolsightError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolsightError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }

    /// Names of the presets (`*.toml` stems) in `dir`, sorted. A missing
    /// directory has no presets.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| {
                path.file_stem().and_then(|s| s.to_str()).map(str::to_owned)
            })
            .collect();
        names.sort();
        names
    }

    /// Load the preset `name` from `dir`.
    ///
    /// # Errors
    ///
    /// [`MolsightError::OptionsParse`] naming the available presets when
    /// `name` is not one of them, or any error from [`Options::load`].
    pub fn load_preset(dir: &Path, name: &str) -> Result<Self, MolsightError> {
        let presets = Self::list_presets(dir);
        if !presets.iter().any(|p| p == name) {
            return Err(MolsightError::OptionsParse(format!(
                "no preset {name:?} in {} (available: {})",
                dir.display(),
                if presets.is_empty() {
                    "none".to_owned()
                } else {
                    presets.join(", ")
                }
            )));
        }
        Self::load(&dir.join(format!("{name}.toml")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[render]
base_stroke = 3.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.render.base_stroke, 3.0);
        // Everything else should be default
        assert_eq!(opts.render.external_density, 0.1);
        assert_eq!(opts.viewport.zoom_step, 1.2);
        assert!(opts.fetch.enabled);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[render\nbase_stroke = ").unwrap_err();
        assert!(matches!(err, MolsightError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("Equal"), Some(KeyAction::ZoomIn));
        assert_eq!(
            opts.keybindings.lookup("Digit0"),
            Some(KeyAction::ResetView)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn keybindings_survive_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(
            parsed.keybindings.lookup("Minus"),
            Some(crate::input::KeyAction::ZoomOut)
        );
    }

    #[test]
    fn element_color_overrides_win() {
        let mut colors = ColorOptions::default();
        let _ = colors
            .element_overrides
            .insert("c".to_owned(), [0.0, 0.0, 0.0]);
        assert_eq!(colors.element_color("C"), [0.0, 0.0, 0.0]);
        assert_eq!(colors.element_color("o"), [1.0, 0.05, 0.05]);
        assert_eq!(
            colors.element_color("Uuo"),
            crate::structure::element::NEUTRAL_COLOR
        );
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("viewport"));
        assert!(props.contains_key("layout"));
        assert!(props.contains_key("render"));
        assert!(props.contains_key("scene"));
        assert!(props.contains_key("fetch"));

        // Skipped sections should be absent
        assert!(!props.contains_key("colors"));
        assert!(!props.contains_key("keybindings"));

        // Render should have exposed fields but not skipped ones
        let render = &props["render"]["properties"];
        assert!(render.get("base_stroke").is_some());
        assert!(render.get("external_density").is_none());
    }

    fn scratch_dir(test: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("molsight-{test}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn saved_preset_is_listed_and_loads_back() {
        let dir = scratch_dir("presets");
        let mut opts = Options::default();
        opts.render.label_carbons = true;
        opts.viewport.zoom_step = 1.5;
        opts.save(&dir.join("print.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "not a preset").unwrap();

        assert_eq!(Options::list_presets(&dir), ["default", "print"]);
        assert_eq!(Options::load_preset(&dir, "print").unwrap(), opts);

        let err = Options::load_preset(&dir, "poster").unwrap_err();
        assert!(err.to_string().contains("default, print"), "{err}");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_preset_dir_has_no_presets() {
        let dir = scratch_dir("absent");
        assert!(Options::list_presets(&dir).is_empty());
        assert!(Options::load_preset(&dir, "default").is_err());
    }
}
