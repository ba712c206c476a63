//! Bond order to stroke pattern.
//!
//! Multiple bonds use the gap technique: a wide bond-colored line with a
//! narrower background-colored line painted over it, which reads as two
//! (or, with a centre line, three) parallel strokes at any angle. Widths
//! are divided by the zoom factor and scaled by the coordinate density of
//! the layout source so the on-screen weight stays constant.

use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::layout::LayoutSource;
use crate::options::{ColorOptions, RenderOptions};
use crate::structure::{Atom2d, Bond, BondOrder};

/// One line primitive, painted in list order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Start point.
    pub from: Vec2,
    /// End point.
    pub to: Vec2,
    /// Line width in layout units.
    pub width: f32,
    /// RGB color.
    pub color: [f32; 3],
    /// 0 (invisible) to 1 (opaque).
    pub opacity: f32,
    /// Dash length in layout units, `None` for a solid line.
    pub dash: Option<f32>,
}

/// Colors and scale shared by every bond in one drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondStyle {
    /// Single-bond width after zoom and density scaling.
    pub width: f32,
    /// Bond color.
    pub color: [f32; 3],
    /// Background color for gap lines.
    pub background: [f32; 3],
    /// Opacity of the solid aromatic line.
    pub aromatic_opacity: f32,
    /// Dash length, in multiples of `width`.
    pub dash_length: f32,
}

impl BondStyle {
    /// Style for a layout from `source` drawn at zoom `k`.
    #[must_use]
    pub fn new(
        source: LayoutSource,
        k: f32,
        render: &RenderOptions,
        colors: &ColorOptions,
    ) -> Self {
        let k = if k.is_finite() && k > 0.0 { k } else { 1.0 };
        Self {
            width: render.base_stroke * density(source, render) / k,
            color: colors.bond,
            background: colors.background,
            aromatic_opacity: render.aromatic_opacity,
            dash_length: render.dash_length,
        }
    }
}

/// Relative size of one layout unit for `source`.
#[must_use]
pub fn density(source: LayoutSource, render: &RenderOptions) -> f32 {
    if source.is_tight() {
        render.external_density
    } else {
        1.0
    }
}

/// Strokes for one bond between two known endpoints.
#[must_use]
pub fn bond_strokes(
    from: Vec2,
    to: Vec2,
    order: BondOrder,
    style: &BondStyle,
) -> Vec<Stroke> {
    let w = style.width;
    let line = |width: f32, color: [f32; 3]| Stroke {
        from,
        to,
        width,
        color,
        opacity: 1.0,
        dash: None,
    };

    match order {
        BondOrder::Single => vec![line(w, style.color)],
        BondOrder::Double => vec![
            line(w * 3.0, style.color),
            line(w, style.background),
        ],
        BondOrder::Triple => vec![
            line(w * 5.0, style.color),
            line(w * 3.0, style.background),
            line(w, style.color),
        ],
        BondOrder::Aromatic => {
            let normal = (to - from).perp().normalize_or_zero() * (w * 2.0);
            vec![
                Stroke {
                    opacity: style.aromatic_opacity,
                    ..line(w, style.color)
                },
                Stroke {
                    from: from + normal,
                    to: to + normal,
                    dash: Some(w * style.dash_length),
                    ..line(w, style.color)
                },
            ]
        }
    }
}

/// Resolves bond endpoints by atom id and emits their strokes.
pub struct BondRenderer {
    positions: FxHashMap<i64, Vec2>,
    style: BondStyle,
}

impl BondRenderer {
    /// Index `atoms` by id.
    #[must_use]
    pub fn new(atoms: &[Atom2d], style: BondStyle) -> Self {
        let positions = atoms
            .iter()
            .map(|a| (a.id, Vec2::new(a.x, a.y)))
            .collect();
        Self { positions, style }
    }

    /// The style every bond is drawn with.
    #[must_use]
    pub fn style(&self) -> &BondStyle {
        &self.style
    }

    /// Strokes for `bond`, or none when an endpoint id is unknown.
    #[must_use]
    pub fn strokes(&self, bond: &Bond) -> Vec<Stroke> {
        match (self.positions.get(&bond.from), self.positions.get(&bond.to)) {
            (Some(&from), Some(&to)) => {
                bond_strokes(from, to, bond.kind(), &self.style)
            }
            _ => {
                log::debug!(
                    "skipping bond {}-{}: endpoint not in layout",
                    bond.from,
                    bond.to
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> BondStyle {
        BondStyle::new(
            LayoutSource::Model,
            1.0,
            &RenderOptions::default(),
            &ColorOptions::default(),
        )
    }

    fn atoms() -> Vec<Atom2d> {
        [(1, 0.0, 0.0), (2, 40.0, 0.0)]
            .into_iter()
            .map(|(id, x, y)| Atom2d {
                id,
                element: "C".to_owned(),
                x,
                y,
            })
            .collect()
    }

    #[test]
    fn single_bond_is_one_stroke() {
        let r = BondRenderer::new(&atoms(), style());
        assert_eq!(r.strokes(&Bond::new(1, 2, 1)).len(), 1);
    }

    #[test]
    fn double_bond_is_fill_plus_gap() {
        let s = style();
        let r = BondRenderer::new(&atoms(), s);
        let strokes = r.strokes(&Bond::new(1, 2, 2));
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].color, s.color);
        assert_eq!(strokes[1].color, s.background);
        assert!(strokes[0].width > strokes[1].width);
    }

    #[test]
    fn triple_bond_is_three_strokes() {
        let r = BondRenderer::new(&atoms(), style());
        let strokes = r.strokes(&Bond::new(1, 2, 3));
        assert_eq!(strokes.len(), 3);
        assert!(strokes[0].width > strokes[1].width);
        assert!(strokes[1].width > strokes[2].width);
    }

    #[test]
    fn aromatic_bond_is_dashed_plus_faded_solid() {
        let r = BondRenderer::new(&atoms(), style());
        let strokes = r.strokes(&Bond::new(1, 2, 4));
        assert_eq!(strokes.len(), 2);
        let dashed: Vec<_> = strokes.iter().filter(|s| s.dash.is_some()).collect();
        let solid: Vec<_> = strokes.iter().filter(|s| s.dash.is_none()).collect();
        assert_eq!(dashed.len(), 1);
        assert_eq!(solid.len(), 1);
        assert!(solid[0].opacity < 1.0);
        // The dashed line runs parallel, offset from the bond axis.
        assert_ne!(dashed[0].from, solid[0].from);
        assert_eq!(dashed[0].to - dashed[0].from, solid[0].to - solid[0].from);
    }

    #[test]
    fn dangling_bond_draws_nothing() {
        let r = BondRenderer::new(&atoms(), style());
        assert!(r.strokes(&Bond::new(1, 99, 2)).is_empty());
        assert!(r.strokes(&Bond::new(-5, 2, 1)).is_empty());
    }

    #[test]
    fn width_scales_with_zoom_and_density() {
        let render = RenderOptions::default();
        let colors = ColorOptions::default();
        let model = BondStyle::new(LayoutSource::Model, 1.0, &render, &colors);
        let zoomed = BondStyle::new(LayoutSource::Model, 2.0, &render, &colors);
        let external =
            BondStyle::new(LayoutSource::External, 1.0, &render, &colors);
        assert!((zoomed.width - model.width / 2.0).abs() < 1e-6);
        assert!((external.width - model.width * 0.1).abs() < 1e-6);
    }

    #[test]
    fn degenerate_bond_does_not_produce_nan() {
        let strokes = bond_strokes(
            Vec2::ONE,
            Vec2::ONE,
            BondOrder::Aromatic,
            &style(),
        );
        assert!(strokes.iter().all(|s| s.from.is_finite() && s.to.is_finite()));
    }
}
