//! Ball-and-stick scene description for a 3D viewer.
//!
//! Atoms become spheres colored by element; bonds become uniform gray
//! cylinders. Bond order is not shown in 3D. The output is plain data so
//! any renderer (WebGL, wgpu, a test) can consume it.

use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;

use crate::geometry::NormalizedAtom;
use crate::options::{ColorOptions, SceneOptions};
use crate::structure::element::is_hydrogen;
use crate::structure::Bond;

/// One atom sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereInstance {
    /// Atom id the sphere belongs to.
    pub atom_id: i64,
    /// Center in normalized scene units.
    pub center: Vec3,
    /// Radius in normalized scene units.
    pub radius: f32,
    /// RGB color.
    pub color: [f32; 3],
}

/// One bond cylinder, modeled along +Y before rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderInstance {
    /// Midpoint between the two atoms.
    pub center: Vec3,
    /// Rotation taking +Y onto the bond axis.
    pub rotation: Quat,
    /// Distance between the two atom centers.
    pub length: f32,
    /// Cylinder radius.
    pub radius: f32,
    /// RGB color.
    pub color: [f32; 3],
}

impl CylinderInstance {
    /// The two cylinder end points.
    #[must_use]
    pub fn endpoints(&self) -> [Vec3; 2] {
        let half = self.rotation * Vec3::Y * (self.length * 0.5);
        [self.center - half, self.center + half]
    }
}

/// Everything a 3D viewer needs to draw one structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene3d {
    /// One per atom, in atom order.
    pub spheres: Vec<SphereInstance>,
    /// One per resolvable bond.
    pub cylinders: Vec<CylinderInstance>,
}

impl Scene3d {
    /// Nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

/// Build spheres and cylinders from normalized atoms. Bonds whose endpoint
/// ids are unknown are skipped.
#[must_use]
pub fn build_scene(
    atoms: &[NormalizedAtom],
    bonds: &[Bond],
    options: &SceneOptions,
    colors: &ColorOptions,
) -> Scene3d {
    if atoms.is_empty() {
        return Scene3d::default();
    }

    let spheres = atoms
        .iter()
        .map(|atom| SphereInstance {
            atom_id: atom.id,
            center: atom.position,
            radius: if is_hydrogen(&atom.element) {
                options.hydrogen_radius
            } else {
                options.atom_radius
            },
            color: colors.element_color(&atom.element),
        })
        .collect();

    let positions: FxHashMap<i64, Vec3> =
        atoms.iter().map(|a| (a.id, a.position)).collect();
    let cylinders = bonds
        .iter()
        .filter_map(|bond| {
            let from = positions.get(&bond.from)?;
            let to = positions.get(&bond.to)?;
            Some(cylinder(*from, *to, options.bond_radius, colors.scene_bond))
        })
        .collect();

    Scene3d { spheres, cylinders }
}

fn cylinder(from: Vec3, to: Vec3, radius: f32, color: [f32; 3]) -> CylinderInstance {
    let axis = to - from;
    let length = axis.length();
    let rotation = if length > 0.0 {
        Quat::from_rotation_arc(Vec3::Y, axis / length)
    } else {
        Quat::IDENTITY
    };
    CylinderInstance {
        center: (from + to) * 0.5,
        rotation,
        length,
        radius,
        color,
    }
}
