//! Molecular structure data as returned by the model.
//!
//! A [`Structure`] is parsed once per analysis response and never mutated
//! afterwards. Every field tolerates absence so that partial model output
//! still renders whatever it does contain.

pub mod element;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An atom with 3D coordinates (Angstrom-like units).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Atom3d {
    /// Element symbol, any case (`"C"`, `"cl"`, `"Na"`).
    #[serde(deserialize_with = "crate::lenient::string")]
    pub element: String,
    /// X coordinate.
    #[serde(deserialize_with = "crate::lenient::float")]
    pub x: f32,
    /// Y coordinate.
    #[serde(deserialize_with = "crate::lenient::float")]
    pub y: f32,
    /// Z coordinate.
    #[serde(deserialize_with = "crate::lenient::float")]
    pub z: f32,
    /// Explicit atom id. When absent the atom's list index is its id.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::optional_integer"
    )]
    pub id: Option<i64>,
}

impl Atom3d {
    /// Position as a vector.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// The id bonds use to refer to this atom.
    #[must_use]
    pub fn key(&self, index: usize) -> i64 {
        self.id.unwrap_or(index as i64)
    }
}

/// An atom in a 2D layout. Units depend on where the layout came from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Atom2d {
    /// Source-defined id; not necessarily contiguous or zero-based.
    #[serde(deserialize_with = "crate::lenient::integer")]
    pub id: i64,
    /// Element symbol.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub element: String,
    /// X coordinate.
    #[serde(deserialize_with = "crate::lenient::float")]
    pub x: f32,
    /// Y coordinate, increasing downward.
    #[serde(deserialize_with = "crate::lenient::float")]
    pub y: f32,
}

/// Bond multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondOrder {
    /// One shared pair.
    Single,
    /// Two shared pairs.
    Double,
    /// Three shared pairs.
    Triple,
    /// Delocalized (aromatic) bonding.
    Aromatic,
}

impl BondOrder {
    /// Map the integer wire code (1/2/3/4) to a bond order. Unrecognized
    /// codes draw as single bonds.
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => Self::Double,
            3 => Self::Triple,
            4 => Self::Aromatic,
            _ => Self::Single,
        }
    }
}

/// A bond between two atom ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bond {
    /// Id of the first atom.
    #[serde(deserialize_with = "crate::lenient::integer")]
    pub from: i64,
    /// Id of the second atom.
    #[serde(deserialize_with = "crate::lenient::integer")]
    pub to: i64,
    /// Wire bond order: 1 single, 2 double, 3 triple, 4 aromatic.
    #[serde(deserialize_with = "crate::lenient::bond_order")]
    pub order: u8,
}

impl Default for Bond {
    fn default() -> Self {
        Self {
            from: 0,
            to: 0,
            order: 1,
        }
    }
}

impl Bond {
    /// Create a bond.
    #[must_use]
    pub fn new(from: i64, to: i64, order: u8) -> Self {
        Self { from, to, order }
    }

    /// Decoded bond order.
    #[must_use]
    pub fn kind(&self) -> BondOrder {
        BondOrder::from_code(self.order)
    }
}

/// A 2D atom/bond list pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout2d {
    /// Atoms with 2D coordinates.
    #[serde(deserialize_with = "crate::lenient::list")]
    pub atoms: Vec<Atom2d>,
    /// Bonds between `atoms` ids.
    #[serde(deserialize_with = "crate::lenient::list")]
    pub bonds: Vec<Bond>,
}

impl Layout2d {
    /// A layout without atoms has nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

/// A molecular structure hypothesis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Structure {
    /// Canonical SMILES string.
    #[serde(deserialize_with = "crate::lenient::string")]
    pub smiles: String,
    /// Standard InChI, when the model produced one.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::optional"
    )]
    pub inchi: Option<String>,
    /// Free-text provenance or verification note.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::optional"
    )]
    pub verification: Option<String>,
    /// Atoms with 3D coordinates.
    #[serde(deserialize_with = "crate::lenient::list")]
    pub atoms: Vec<Atom3d>,
    /// Bonds between 3D atoms.
    #[serde(deserialize_with = "crate::lenient::list")]
    pub bonds: Vec<Bond>,
    /// Model-generated 2D layout.
    #[serde(
        rename = "structure2d",
        alias = "structure2D",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::optional"
    )]
    pub structure_2d: Option<Layout2d>,
}

impl Structure {
    /// Whether there is anything to draw at all.
    #[must_use]
    pub fn has_atoms(&self) -> bool {
        !self.atoms.is_empty()
            || self.structure_2d.as_ref().is_some_and(|l| !l.is_empty())
    }
}
