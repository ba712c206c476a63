//! PubChem PUG REST client and record parser.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use url::Url;

use super::FetchError;
use crate::structure::element::symbol_for_atomic_number;
use crate::structure::{Atom2d, Bond, Layout2d};

/// URL of the 2D JSON record for `name` under a PUG REST base URL.
pub fn record_url(base_url: &str, name: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| FetchError::Network(format!("bad base url: {e}")))?;
    {
        let mut segments = url.path_segments_mut().map_err(|()| {
            FetchError::Network(format!("bad base url: {base_url}"))
        })?;
        let _ = segments.pop_if_empty().extend([
            "compound",
            "name",
            name.trim(),
            "JSON",
        ]);
    }
    let _ = url.query_pairs_mut().append_pair("record_type", "2d");
    Ok(url)
}

#[derive(Deserialize)]
struct Record {
    #[serde(rename = "PC_Compounds", default)]
    compounds: Vec<Compound>,
}

#[derive(Deserialize)]
struct Compound {
    atoms: Atoms,
    #[serde(default)]
    bonds: Option<Bonds>,
    #[serde(default)]
    coords: Vec<Coords>,
}

#[derive(Deserialize)]
struct Atoms {
    aid: Vec<i64>,
    element: Vec<u32>,
}

#[derive(Deserialize)]
struct Bonds {
    aid1: Vec<i64>,
    aid2: Vec<i64>,
    #[serde(default)]
    order: Vec<u8>,
}

#[derive(Deserialize)]
struct Coords {
    aid: Vec<i64>,
    conformers: Vec<Conformer>,
}

#[derive(Deserialize)]
struct Conformer {
    x: Vec<f32>,
    y: Vec<f32>,
}

/// Translate a PubChem bond order to the wire code used everywhere else.
///
/// PubChem records are Kekulé (no aromatic code); 4 is a quadruple bond,
/// drawn with the widest pattern we have. Dative, complex, ionic and
/// unknown bonds draw as single.
fn bond_code(pubchem_order: u8) -> u8 {
    match pubchem_order {
        2 => 2,
        3 | 4 => 3,
        _ => 1,
    }
}

fn malformed(msg: &str) -> FetchError {
    FetchError::Malformed(msg.to_owned())
}

/// Parse a PUG REST 2D JSON record.
///
/// Atomic numbers become element symbols (`"X"` when unknown), y is
/// negated for a y-down surface, and bonds without an order are single.
/// Atoms with no coordinates are dropped.
pub fn parse_record(body: &str) -> Result<Layout2d, FetchError> {
    let record: Record = serde_json::from_str(body)
        .map_err(|e| FetchError::Malformed(e.to_string()))?;
    let compound = record
        .compounds
        .into_iter()
        .next()
        .ok_or_else(|| malformed("no compounds"))?;

    let atoms = &compound.atoms;
    if atoms.aid.len() != atoms.element.len() {
        return Err(malformed("atom id/element length mismatch"));
    }

    let coords = compound
        .coords
        .first()
        .ok_or_else(|| malformed("no coordinate set"))?;
    let conformer = coords
        .conformers
        .first()
        .ok_or_else(|| malformed("no conformer"))?;
    if conformer.x.len() != coords.aid.len()
        || conformer.y.len() != coords.aid.len()
    {
        return Err(malformed("coordinate length mismatch"));
    }

    let positions: FxHashMap<i64, (f32, f32)> = coords
        .aid
        .iter()
        .zip(conformer.x.iter().zip(&conformer.y))
        .map(|(&id, (&x, &y))| (id, (x, y)))
        .collect();

    let atoms: Vec<Atom2d> = atoms
        .aid
        .iter()
        .zip(&atoms.element)
        .filter_map(|(&id, &number)| {
            positions.get(&id).map(|&(x, y)| Atom2d {
                id,
                element: symbol_for_atomic_number(number).to_owned(),
                x,
                y: -y,
            })
        })
        .collect();
    if atoms.is_empty() {
        return Err(malformed("no atoms with coordinates"));
    }

    let bonds = match compound.bonds {
        Some(b) if b.aid1.len() != b.aid2.len() => {
            return Err(malformed("bond endpoint length mismatch"));
        }
        Some(b) => b
            .aid1
            .iter()
            .zip(&b.aid2)
            .enumerate()
            .map(|(i, (&from, &to))| {
                Bond::new(from, to, bond_code(b.order.get(i).copied().unwrap_or(1)))
            })
            .collect(),
        None => Vec::new(),
    };

    Ok(Layout2d { atoms, bonds })
}

/// Looks up 2D layouts over HTTP.
#[cfg(feature = "pubchem")]
pub struct PubChemSource {
    agent: ureq::Agent,
    base_url: String,
}

#[cfg(feature = "pubchem")]
impl PubChemSource {
    /// Create a client with the configured base URL and timeout.
    #[must_use]
    pub fn new(options: &crate::options::FetchOptions) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(std::time::Duration::from_secs(
                options.timeout_secs,
            )))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
            base_url: options.base_url.clone(),
        }
    }
}

#[cfg(feature = "pubchem")]
impl super::StructureSource for PubChemSource {
    fn lookup(&self, name: &str) -> Result<Layout2d, FetchError> {
        let url = record_url(&self.base_url, name)?;
        let body = self
            .agent
            .get(url.as_str())
            .call()
            .map_err(|e| match e {
                ureq::Error::StatusCode(404) => {
                    FetchError::NotFound(name.to_owned())
                }
                ureq::Error::StatusCode(code) => FetchError::Status(code),
                other => FetchError::Network(other.to_string()),
            })?
            .into_body()
            .read_to_string()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_record(&body)
    }
}
