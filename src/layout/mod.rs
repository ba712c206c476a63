//! Chooses the 2D coordinate source for a drawing and sizes its viewport.
//!
//! Three candidate sources are tried in a fixed order, stopping at the
//! first one that has atoms:
//!
//! 1. [`LayoutSource::External`] - a PubChem 2D record
//! 2. [`LayoutSource::Model`] - the model's own 2D layout
//! 3. [`LayoutSource::Projected`] - the 3D atoms flattened onto XY
//!
//! Only one source is active per render.

use std::fmt;

use crate::options::LayoutOptions;
use crate::structure::{Atom2d, Layout2d, Structure};

/// Where a 2D layout came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutSource {
    /// Canonical layout fetched from PubChem. Tight units (~1 per bond).
    External,
    /// Layout generated by the model alongside the 3D structure.
    Model,
    /// 3D atoms projected onto the XY plane.
    Projected,
}

impl LayoutSource {
    /// Sources in priority order.
    pub const PRIORITY: [Self; 3] = [Self::External, Self::Model, Self::Projected];

    /// Whether coordinates use the tight external units.
    #[must_use]
    pub fn is_tight(self) -> bool {
        self == Self::External
    }
}

/// Logical drawing rectangle: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl ViewBox {
    /// Bounding box of `atoms` grown by `padding` on every side.
    #[must_use]
    pub fn around(atoms: &[Atom2d], padding: f32) -> Self {
        let (min_x, min_y, max_x, max_y) = atoms.iter().fold(
            (f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
            |(min_x, min_y, max_x, max_y), a| {
                (min_x.min(a.x), min_y.min(a.y), max_x.max(a.x), max_y.max(a.y))
            },
        );
        if !min_x.is_finite() || !max_x.is_finite() {
            return Self {
                x: -padding,
                y: -padding,
                width: 2.0 * padding,
                height: 2.0 * padding,
            };
        }
        Self {
            x: min_x - padding,
            y: min_y - padding,
            width: (max_x - min_x) + 2.0 * padding,
            height: (max_y - min_y) + 2.0 * padding,
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// The chosen atom/bond set and its viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLayout {
    /// Which candidate won.
    pub source: LayoutSource,
    /// The chosen atoms and bonds.
    pub layout: Layout2d,
    /// Padded bounding rectangle.
    pub view_box: ViewBox,
}

impl ResolvedLayout {
    /// True when the drawing is a projection of the 3D coordinates.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == LayoutSource::Projected
    }
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A layout to draw.
    Resolved(ResolvedLayout),
    /// No candidate had atoms; show a placeholder.
    Unavailable,
}

impl Resolution {
    /// The resolved layout, if any.
    #[must_use]
    pub fn layout(&self) -> Option<&ResolvedLayout> {
        match self {
            Self::Resolved(layout) => Some(layout),
            Self::Unavailable => None,
        }
    }
}

/// Pick the highest-priority non-empty source and compute its viewport.
#[must_use]
pub fn resolve(
    external: Option<&Layout2d>,
    structure: &Structure,
    options: &LayoutOptions,
) -> Resolution {
    let Some((source, layout)) = LayoutSource::PRIORITY
        .iter()
        .find_map(|&source| {
            candidate(source, external, structure, options)
                .map(|layout| (source, layout))
        })
    else {
        return Resolution::Unavailable;
    };

    if source != LayoutSource::External && external.is_some() {
        log::debug!("external layout empty, drawing {source:?} coordinates");
    }

    let padding = if source.is_tight() {
        options.external_padding
    } else {
        options.loose_padding
    };
    let view_box = ViewBox::around(&layout.atoms, padding);
    Resolution::Resolved(ResolvedLayout {
        source,
        layout,
        view_box,
    })
}

/// One candidate, or `None` when it has no atoms.
fn candidate(
    source: LayoutSource,
    external: Option<&Layout2d>,
    structure: &Structure,
    options: &LayoutOptions,
) -> Option<Layout2d> {
    match source {
        LayoutSource::External => external.filter(|l| !l.is_empty()).cloned(),
        LayoutSource::Model => structure
            .structure_2d
            .as_ref()
            .filter(|l| !l.is_empty())
            .cloned(),
        LayoutSource::Projected => {
            project(structure, options.projection_scale)
        }
    }
}

/// Flatten the 3D atoms onto XY. Y is flipped so "up" in the model stays up
/// on a y-down surface.
fn project(structure: &Structure, magnification: f32) -> Option<Layout2d> {
    if structure.atoms.is_empty() {
        return None;
    }
    let atoms = structure
        .atoms
        .iter()
        .enumerate()
        .map(|(i, a)| Atom2d {
            id: a.key(i),
            element: a.element.clone(),
            x: a.x * magnification,
            y: -a.y * magnification,
        })
        .collect();
    Some(Layout2d {
        atoms,
        bonds: structure.bonds.clone(),
    })
}
