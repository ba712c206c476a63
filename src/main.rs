//! Render the molecule in a saved model response to SVG.
//!
//! ```text
//! molsight response.json --name caffeine --svg caffeine.svg
//! molsight response.json --preset print --save-options my.toml
//! ```
//!
//! The response may be a bare structure or any analysis result that embeds
//! one (`structure`, `molecule1.structure`). With a molecule name the 2D
//! layout is looked up on PubChem first, falling back to the model's own
//! layout or a projection of its 3D coordinates.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use serde::Deserialize;
use serde_json::Value;

use molsight::analysis::{parse_model_json, ParseResult};
use molsight::fetch::{FetchRequest, PubChemSource, StructureFetcher};
use molsight::options::Options;
use molsight::{MoleculeView, MolsightError, Structure};

#[derive(Parser)]
#[command(name = "molsight", version, about = "Render a molecule from a model response")]
struct Cli {
    /// Model response JSON (code fences allowed).
    response: PathBuf,
    /// Molecule name for the PubChem layout lookup. Defaults to the name in
    /// the response.
    #[arg(long)]
    name: Option<String>,
    /// Options TOML file.
    #[arg(long, conflicts_with = "preset")]
    options: Option<PathBuf>,
    /// Named options preset from `--preset-dir`.
    #[arg(long)]
    preset: Option<String>,
    /// Directory holding `<name>.toml` presets.
    #[arg(long, default_value = "presets")]
    preset_dir: PathBuf,
    /// Write the effective options to this file as a preset.
    #[arg(long)]
    save_options: Option<PathBuf>,
    /// Where to write the SVG drawing.
    #[arg(long, default_value = "molecule.svg")]
    svg: PathBuf,
    /// Skip the PubChem lookup.
    #[arg(long)]
    offline: bool,
}

/// Pull a structure and, when present, its name out of a response.
fn extract_structure(response: &Value) -> (Structure, Option<String>) {
    let name_of = |v: &Value| {
        ["moleculeName", "name"]
            .iter()
            .find_map(|key| v.get(key).and_then(Value::as_str))
            .map(str::to_owned)
    };

    let (holder, structure) = if let Some(s) = response.get("structure") {
        (response, s)
    } else if let Some(s) = response.get("molecule1").and_then(|m| m.get("structure")) {
        (&response["molecule1"], s)
    } else {
        (response, response)
    };

    let structure = match Structure::deserialize(structure) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("response has no usable structure: {e}");
            Structure::default()
        }
    };
    (structure, name_of(holder))
}

/// Run one lookup to completion (or until the timeout) and apply it.
fn fetch_layout(
    view: &mut MoleculeView,
    request: FetchRequest,
) -> Result<(), MolsightError> {
    let timeout = Duration::from_secs(view.options().fetch.timeout_secs + 1);
    let mut fetcher = StructureFetcher::spawn(PubChemSource::new(&view.options().fetch))?;
    log::info!("looking up 2D layout for {:?}", request.name);
    fetcher.submit(request);

    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Some(outcome) = fetcher.try_recv() {
            let _ = view.apply_fetch(outcome);
            return Ok(());
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    log::warn!("layout lookup timed out; using fallback");
    Ok(())
}

fn load_options(cli: &Cli) -> Result<Options, MolsightError> {
    let mut options = match (&cli.options, &cli.preset) {
        (Some(path), _) => Options::load(path)?,
        (None, Some(name)) => Options::load_preset(&cli.preset_dir, name)?,
        (None, None) => Options::default(),
    };
    if cli.offline {
        options.fetch.enabled = false;
    }
    if let Some(path) = &cli.save_options {
        options.save(path)?;
    }
    Ok(options)
}

fn run(cli: &Cli) -> Result<(), MolsightError> {
    let options = load_options(cli)?;

    let raw = std::fs::read_to_string(&cli.response)?;
    let response = match parse_model_json::<Value>(&raw) {
        ParseResult::Ok(value) => value,
        ParseResult::Empty => Value::Null,
    };
    let (structure, found_name) = extract_structure(&response);
    let name = cli.name.clone().or(found_name);

    let mut view = MoleculeView::new(structure, options);
    if let Some(request) = name.as_deref().and_then(|n| view.set_molecule_name(n)) {
        fetch_layout(&mut view, request)?;
    }

    let resolution = view.resolve_layout();
    match resolution.layout() {
        Some(layout) => log::info!(
            "2D layout: {} atoms, {} bonds from {:?}",
            layout.layout.atoms.len(),
            layout.layout.bonds.len(),
            layout.source
        ),
        None => log::warn!("no structure to draw"),
    }
    write_svg(&cli.svg, &view)?;

    let scene = view.build_scene();
    log::info!(
        "3D scene: {} spheres, {} cylinders",
        scene.spheres.len(),
        scene.cylinders.len()
    );
    Ok(())
}

fn write_svg(path: &Path, view: &MoleculeView) -> Result<(), MolsightError> {
    svg::save(path, &view.render_svg())?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
