//! The 2D drawing surface: a resolved layout as an SVG document.
//!
//! The document's `viewBox` is the layout's padded bounding box. The
//! interactive pan/zoom sits on top as a CSS transform on the root element,
//! with its transition switched off while a drag is in progress.

use svg::node::element::{Circle, Group, Line, Rectangle, Text};
use svg::Document;

use super::bond::{density, BondRenderer, BondStyle, Stroke};
use crate::layout::{ResolvedLayout, Resolution};
use crate::options::Options;
use crate::structure::element::{canonical_symbol, is_carbon, is_hydrogen, to_hex};
use crate::structure::Atom2d;
use crate::viewport::ViewportController;

const PLACEHOLDER_TEXT: &str = "No structure available";

/// Draw `resolution` with the viewport's current transform.
#[must_use]
pub fn render_svg(
    resolution: &Resolution,
    viewport: &ViewportController,
    options: &Options,
) -> Document {
    let style = format!(
        "transform: {}; transition: {}",
        viewport.transform().css(),
        viewport.css_transition()
    );
    match resolution {
        Resolution::Resolved(layout) => {
            draw_layout(layout, viewport, options).set("style", style)
        }
        Resolution::Unavailable => placeholder(options),
    }
}

fn placeholder(options: &Options) -> Document {
    Document::new()
        .set("viewBox", (0, 0, 200, 100))
        .add(
            Text::new(PLACEHOLDER_TEXT)
                .set("x", 100)
                .set("y", 50)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("font-size", 12)
                .set("fill", to_hex(options.colors.bond)),
        )
}

fn draw_layout(
    resolved: &ResolvedLayout,
    viewport: &ViewportController,
    options: &Options,
) -> Document {
    let vb = resolved.view_box;
    let style = BondStyle::new(
        resolved.source,
        viewport.transform().k,
        &options.render,
        &options.colors,
    );
    let renderer = BondRenderer::new(&resolved.layout.atoms, style);

    let bonds = resolved
        .layout
        .bonds
        .iter()
        .flat_map(|bond| renderer.strokes(bond))
        .fold(Group::new().set("class", "bonds"), |group, stroke| {
            group.add(stroke_line(&stroke))
        });

    let font_size =
        options.render.font_size * density(resolved.source, &options.render);
    let labels = resolved
        .layout
        .atoms
        .iter()
        .filter(|atom| needs_label(atom, resolved, options))
        .fold(Group::new().set("class", "atoms"), |group, atom| {
            group.add(atom_label(atom, font_size, options))
        });

    Document::new()
        .set("viewBox", (vb.x, vb.y, vb.width, vb.height))
        .add(
            Rectangle::new()
                .set("x", vb.x)
                .set("y", vb.y)
                .set("width", vb.width)
                .set("height", vb.height)
                .set("fill", to_hex(options.colors.background)),
        )
        .add(bonds)
        .add(labels)
}

fn stroke_line(stroke: &Stroke) -> Line {
    let mut line = Line::new()
        .set("x1", stroke.from.x)
        .set("y1", stroke.from.y)
        .set("x2", stroke.to.x)
        .set("y2", stroke.to.y)
        .set("stroke", to_hex(stroke.color))
        .set("stroke-width", stroke.width);
    if stroke.opacity < 1.0 {
        line = line.set("stroke-opacity", stroke.opacity);
    }
    if let Some(dash) = stroke.dash {
        line = line.set("stroke-dasharray", format!("{dash} {dash}"));
    }
    line
}

/// Heteroatoms are always labeled. Carbons are implicit line vertices
/// unless configured otherwise or they have no bonds to show them.
fn needs_label(atom: &Atom2d, resolved: &ResolvedLayout, options: &Options) -> bool {
    if !is_carbon(&atom.element) || options.render.label_carbons {
        return true;
    }
    !resolved
        .layout
        .bonds
        .iter()
        .any(|b| b.from == atom.id || b.to == atom.id)
}

fn atom_label(atom: &Atom2d, font_size: f32, options: &Options) -> Group {
    let colors = &options.colors;
    // White hydrogen and gray carbon read poorly as text on a light page.
    let fill = if is_hydrogen(&atom.element) || is_carbon(&atom.element) {
        colors.bond
    } else {
        colors.element_color(&atom.element)
    };
    Group::new()
        .add(
            Circle::new()
                .set("cx", atom.x)
                .set("cy", atom.y)
                .set("r", font_size * 0.75)
                .set("fill", to_hex(colors.background)),
        )
        .add(
            Text::new(canonical_symbol(&atom.element))
                .set("x", atom.x)
                .set("y", atom.y)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("font-size", font_size)
                .set("font-weight", "bold")
                .set("fill", to_hex(fill)),
        )
}
