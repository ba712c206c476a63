use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Structure Lookup", inline)]
#[serde(default)]
/// PubChem lookup settings.
pub struct FetchOptions {
    /// Look up canonical 2D layouts by molecule name.
    #[schemars(title = "Fetch PubChem Layouts")]
    pub enabled: bool,
    /// PUG REST base URL.
    #[schemars(skip)]
    pub base_url: String,
    /// Whole-request timeout in seconds.
    #[schemars(title = "Timeout (s)", range(min = 1, max = 60))]
    pub timeout_secs: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://pubchem.ncbi.nlm.nih.gov/rest/pug".to_owned(),
            timeout_secs: 10,
        }
    }
}
