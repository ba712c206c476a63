//! 2D rendering: bond stroke patterns and the SVG drawing surface.

pub mod bond;
pub mod surface;

pub use bond::{BondRenderer, BondStyle, Stroke};
pub use surface::render_svg;
