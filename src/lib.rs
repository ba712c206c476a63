// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Molecule structure rendering and model-driven chemistry analysis.
//!
//! Molsight takes the structured JSON a hosted language model returns for a
//! chemistry question (structure elucidation from an image, entity
//! extraction from text, two-molecule comparison, research reports) and
//! turns the molecular structure in it into an interactive 2D drawing and a
//! 3D ball-and-stick scene.
//!
//! # Key entry points
//!
//! - [`view::MoleculeView`] - one displayed molecule: structure, external
//!   layout fetch state, and pan/zoom transform
//! - [`layout::resolve`] - picks the 2D coordinate source (PubChem, model,
//!   or 3D projection)
//! - [`renderer::render_svg`] - draws a resolved layout as an SVG document
//! - [`scene::build_scene`] - spheres and cylinders for a 3D viewer
//! - [`fetch::StructureFetcher`] - background PubChem lookups
//! - [`analysis`] - prompts, response schemas and tolerant parsing for the
//!   model calls
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything runs on the owning thread except PubChem lookups, which run
//! on a [`fetch::StructureFetcher`] worker and come back through a
//! lock-free triple buffer. Results are keyed by molecule name; the view
//! drops any result whose name is no longer current.

pub mod analysis;
pub mod error;
pub mod fetch;
pub mod geometry;
pub mod input;
pub mod layout;
mod lenient;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod structure;
pub mod view;
pub mod viewport;

pub use error::MolsightError;
pub use structure::{Atom2d, Atom3d, Bond, BondOrder, Layout2d, Structure};
pub use view::MoleculeView;
