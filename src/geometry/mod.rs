//! Centers and scales 3D atom coordinates to a fixed display radius.

use glam::Vec3;

use crate::structure::Atom3d;

/// An atom after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAtom {
    /// Id bonds refer to (explicit id or list index).
    pub id: i64,
    /// Element symbol as received.
    pub element: String,
    /// Position relative to the centroid, scaled to the target radius.
    pub position: Vec3,
}

/// Result of [`normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Normalization {
    /// Mean of the input positions.
    pub centroid: Vec3,
    /// Factor applied after centering.
    pub scale: f32,
    /// Repositioned atoms, in input order.
    pub atoms: Vec<NormalizedAtom>,
}

impl Normalization {
    /// Nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

/// Center `atoms` on their centroid and scale so the farthest atom sits at
/// `target_radius`.
///
/// A single atom (or any set whose atoms all coincide) keeps scale 1. An
/// empty list yields an empty result.
#[must_use]
pub fn normalize(atoms: &[Atom3d], target_radius: f32) -> Normalization {
    if atoms.is_empty() {
        return Normalization {
            centroid: Vec3::ZERO,
            scale: 1.0,
            atoms: Vec::new(),
        };
    }

    let positions: Vec<Vec3> = atoms.iter().map(Atom3d::position).collect();
    let centroid =
        positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
    let max_distance = positions
        .iter()
        .map(|p| p.distance(centroid))
        .fold(0.0f32, f32::max);
    let scale = if max_distance > 0.0 {
        target_radius / max_distance
    } else {
        1.0
    };

    let atoms = atoms
        .iter()
        .zip(positions)
        .enumerate()
        .map(|(i, (atom, p))| NormalizedAtom {
            id: atom.key(i),
            element: atom.element.clone(),
            position: (p - centroid) * scale,
        })
        .collect();

    Normalization {
        centroid,
        scale,
        atoms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(element: &str, x: f32, y: f32, z: f32) -> Atom3d {
        Atom3d {
            element: element.to_owned(),
            x,
            y,
            z,
            id: None,
        }
    }

    #[test]
    fn output_is_centered_and_fits_radius() {
        let atoms = [
            atom("C", 1.0, 2.0, 3.0),
            atom("O", 4.0, -2.0, 0.5),
            atom("N", -3.0, 0.0, 7.0),
            atom("H", 0.0, 0.0, 0.0),
        ];
        let n = normalize(&atoms, 5.0);

        let centroid = n.atoms.iter().map(|a| a.position).sum::<Vec3>()
            / n.atoms.len() as f32;
        assert!(centroid.length() < 1e-4);

        let max = n
            .atoms
            .iter()
            .map(|a| a.position.length())
            .fold(0.0f32, f32::max);
        assert!((max - 5.0).abs() < 1e-4);
    }

    #[test]
    fn single_atom_keeps_unit_scale() {
        let n = normalize(&[atom("Na", 3.0, 3.0, 3.0)], 5.0);
        assert_eq!(n.scale, 1.0);
        assert_eq!(n.atoms[0].position, Vec3::ZERO);
        assert!(n.atoms[0].position.is_finite());
    }

    #[test]
    fn coincident_atoms_keep_unit_scale() {
        let n = normalize(&[atom("C", 1.0, 1.0, 1.0), atom("C", 1.0, 1.0, 1.0)], 5.0);
        assert_eq!(n.scale, 1.0);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let n = normalize(&[], 5.0);
        assert!(n.is_empty());
    }

    #[test]
    fn ids_follow_explicit_id_or_index() {
        let mut atoms = vec![atom("C", 0.0, 0.0, 0.0), atom("O", 1.0, 0.0, 0.0)];
        atoms[1].id = Some(10);
        let n = normalize(&atoms, 5.0);
        assert_eq!(n.atoms[0].id, 0);
        assert_eq!(n.atoms[1].id, 10);
    }
}
