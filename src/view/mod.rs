//! One molecule on screen: structure, external layout lookup, and viewport.
//!
//! [`MoleculeView`] ties the pipeline together. It never performs I/O
//! itself: renaming the molecule hands back a [`FetchRequest`] for the
//! caller to submit to a [`StructureFetcher`](crate::fetch::StructureFetcher),
//! and finished lookups are fed back through [`MoleculeView::apply_fetch`].
//! Outcomes for any name other than the current one are dropped, so a slow
//! lookup can never overwrite a newer molecule.

use crate::fetch::{FetchOutcome, FetchRequest};
use crate::geometry::normalize;
use crate::input::{InputEvent, InputProcessor};
use crate::layout::{resolve, Resolution};
use crate::options::Options;
use crate::renderer;
use crate::scene::{build_scene, Scene3d};
use crate::structure::{Layout2d, Structure};
use crate::viewport::{ViewportAction, ViewportController};

/// Where the external layout lookup for the current name stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// No name, or lookups disabled.
    Idle,
    /// A request was handed out and no outcome has arrived.
    Pending {
        /// Requested name.
        name: String,
    },
    /// The external layout is available.
    Ready {
        /// Name it was fetched for.
        name: String,
    },
    /// The lookup failed; the fallback layout stays for this name.
    Failed {
        /// Name the lookup failed for.
        name: String,
    },
}

/// A structure being displayed, with its interaction state.
pub struct MoleculeView {
    structure: Structure,
    name: Option<String>,
    external: Option<Layout2d>,
    status: FetchStatus,
    viewport: ViewportController,
    input: InputProcessor,
    options: Options,
}

impl MoleculeView {
    /// Display `structure` with no name (and so no external lookup).
    #[must_use]
    pub fn new(structure: Structure, options: Options) -> Self {
        Self {
            structure,
            name: None,
            external: None,
            status: FetchStatus::Idle,
            viewport: ViewportController::new(&options.viewport),
            input: InputProcessor::new(options.keybindings.clone()),
            options,
        }
    }

    /// The structure as parsed from the model.
    #[must_use]
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Current molecule name.
    #[must_use]
    pub fn molecule_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// State of the external lookup.
    #[must_use]
    pub fn fetch_status(&self) -> &FetchStatus {
        &self.status
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Rename the molecule. Any previous external layout is discarded at
    /// once. Returns the lookup to run, or `None` when the name is
    /// unchanged, empty, or lookups are disabled.
    pub fn set_molecule_name(&mut self, name: &str) -> Option<FetchRequest> {
        let name = name.trim();
        if self.name.as_deref() == Some(name) {
            return None;
        }

        self.external = None;
        if name.is_empty() {
            self.name = None;
            self.status = FetchStatus::Idle;
            return None;
        }
        self.name = Some(name.to_owned());
        if !self.options.fetch.enabled {
            self.status = FetchStatus::Idle;
            return None;
        }

        self.status = FetchStatus::Pending {
            name: name.to_owned(),
        };
        Some(FetchRequest {
            name: name.to_owned(),
        })
    }

    /// Apply a finished lookup. Returns `false` (and changes nothing) when
    /// the outcome is for a name that is no longer current.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) -> bool {
        if self.name.as_deref() != Some(outcome.name.as_str()) {
            log::debug!(
                "discarding stale layout lookup for {:?} (current: {:?})",
                outcome.name,
                self.name
            );
            return false;
        }

        match outcome.result {
            Ok(layout) => {
                self.external = Some(layout);
                self.status = FetchStatus::Ready { name: outcome.name };
            }
            Err(e) => {
                log::debug!(
                    "no external layout for {:?} ({e}); using fallback",
                    outcome.name
                );
                self.external = None;
                self.status = FetchStatus::Failed { name: outcome.name };
            }
        }
        true
    }

    /// The 2D layout to draw right now.
    #[must_use]
    pub fn resolve_layout(&self) -> Resolution {
        resolve(
            self.external.as_ref(),
            &self.structure,
            &self.options.layout,
        )
    }

    /// Draw the current layout with the current transform.
    #[must_use]
    pub fn render_svg(&self) -> svg::Document {
        renderer::render_svg(&self.resolve_layout(), &self.viewport, &self.options)
    }

    /// Ball-and-stick scene of the 3D coordinates.
    #[must_use]
    pub fn build_scene(&self) -> Scene3d {
        let normalized =
            normalize(&self.structure.atoms, self.options.layout.target_radius);
        build_scene(
            &normalized.atoms,
            &self.structure.bonds,
            &self.options.scene,
            &self.options.colors,
        )
    }

    /// The pan/zoom state.
    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    /// Apply a viewport action directly.
    pub fn apply_viewport(&mut self, action: ViewportAction) {
        self.viewport.apply(action);
    }

    /// Route a pointer, wheel, or button event to the viewport.
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(action) = self.input.handle_event(event) {
            self.viewport.apply(action);
        }
    }

    /// Route a key press to the viewport. Returns whether it was bound.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.input.handle_key_press(key).is_some_and(|action| {
            self.viewport.apply(action);
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::{Duration, Instant};

    use super::*;
    use crate::fetch::{FetchError, StructureFetcher};
    use crate::input::{MouseButton, ViewportButton};
    use crate::layout::LayoutSource;
    use crate::structure::{Atom2d, Atom3d, Bond};

    fn atom2d(id: i64, element: &str, x: f32) -> Atom2d {
        Atom2d {
            id,
            element: element.to_owned(),
            x,
            y: 0.0,
        }
    }

    fn caffeine_fragment(with_2d: bool) -> Structure {
        let atom = |element: &str, x: f32| Atom3d {
            element: element.to_owned(),
            x,
            y: 0.0,
            z: 0.0,
            id: None,
        };
        Structure {
            smiles: "CN1C=NC2=C1C(=O)N(C(=O)N2C)C".to_owned(),
            atoms: vec![atom("C", 0.0), atom("N", 1.4), atom("O", 2.8)],
            bonds: vec![Bond::new(0, 1, 1), Bond::new(1, 2, 2)],
            structure_2d: with_2d.then(|| Layout2d {
                atoms: vec![atom2d(1, "C", 0.0), atom2d(2, "N", 40.0)],
                bonds: vec![Bond::new(1, 2, 1)],
            }),
            ..Structure::default()
        }
    }

    fn external(element: &str) -> Layout2d {
        Layout2d {
            atoms: vec![atom2d(1, element, 0.0), atom2d(2, element, 1.0)],
            bonds: vec![Bond::new(1, 2, 1)],
        }
    }

    fn failed(name: &str) -> FetchOutcome {
        FetchOutcome {
            name: name.to_owned(),
            result: Err(FetchError::Network("offline".to_owned())),
        }
    }

    fn source(view: &MoleculeView) -> Option<LayoutSource> {
        view.resolve_layout().layout().map(|l| l.source)
    }

    #[test]
    fn failed_lookup_falls_back_to_model_layout() {
        let mut view = MoleculeView::new(caffeine_fragment(true), Options::default());
        let request = view.set_molecule_name("Caffeine").unwrap();
        assert!(view.apply_fetch(failed(&request.name)));

        assert_eq!(source(&view), Some(LayoutSource::Model));
        assert_eq!(
            view.fetch_status(),
            &FetchStatus::Failed {
                name: "Caffeine".to_owned()
            }
        );
        assert!(view.render_svg().to_string().contains("<line"));
    }

    #[test]
    fn failed_lookup_without_2d_projects_3d() {
        let mut view = MoleculeView::new(caffeine_fragment(false), Options::default());
        let request = view.set_molecule_name("Caffeine").unwrap();
        let _ = view.apply_fetch(failed(&request.name));
        assert_eq!(source(&view), Some(LayoutSource::Projected));
        // Fallback is permanent for this name: renaming to it again is a no-op.
        assert!(view.set_molecule_name("Caffeine").is_none());
    }

    #[test]
    fn late_result_for_previous_name_is_ignored() {
        let mut view = MoleculeView::new(caffeine_fragment(true), Options::default());
        let a = view.set_molecule_name("A").unwrap();
        let b = view.set_molecule_name("B").unwrap();

        assert!(view.apply_fetch(FetchOutcome {
            name: b.name,
            result: Ok(external("N")),
        }));
        assert!(!view.apply_fetch(FetchOutcome {
            name: a.name,
            result: Ok(external("S")),
        }));

        let resolution = view.resolve_layout();
        let layout = resolution.layout().unwrap();
        assert_eq!(layout.source, LayoutSource::External);
        assert_eq!(layout.layout.atoms[0].element, "N");
    }

    fn wait_for(fetcher: &mut StructureFetcher) -> FetchOutcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = fetcher.try_recv() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "lookup never finished");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn slow_lookup_for_previous_name_loses_to_current_one() {
        let (started_tx, started_rx) = mpsc::channel::<String>();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let mut fetcher = StructureFetcher::spawn(
            move |name: &str| -> Result<Layout2d, FetchError> {
                let _ = started_tx.send(name.to_owned());
                let _ = release_rx.recv();
                Ok(external(if name == "A" { "S" } else { "N" }))
            },
        )
        .unwrap();
        // Rebound after the fetcher so it drops first and a failed
        // assertion cannot leave the worker blocked on the gate.
        let release = release_tx;
        let timeout = Duration::from_secs(5);

        let mut view = MoleculeView::new(caffeine_fragment(true), Options::default());
        fetcher.submit(view.set_molecule_name("A").unwrap());
        assert_eq!(started_rx.recv_timeout(timeout).unwrap(), "A");

        // B is requested while A is still in flight.
        fetcher.submit(view.set_molecule_name("B").unwrap());
        release.send(()).unwrap();
        let late = wait_for(&mut fetcher);
        assert_eq!(late.name, "A");
        assert!(!view.apply_fetch(late));
        assert_eq!(source(&view), Some(LayoutSource::Model));

        assert_eq!(started_rx.recv_timeout(timeout).unwrap(), "B");
        release.send(()).unwrap();
        assert!(view.apply_fetch(wait_for(&mut fetcher)));

        let resolution = view.resolve_layout();
        let layout = resolution.layout().unwrap();
        assert_eq!(layout.source, LayoutSource::External);
        assert_eq!(layout.layout.atoms[0].element, "N");
        assert_eq!(
            view.fetch_status(),
            &FetchStatus::Ready {
                name: "B".to_owned()
            }
        );
    }

    #[test]
    fn renaming_discards_external_layout_immediately() {
        let mut view = MoleculeView::new(caffeine_fragment(true), Options::default());
        let a = view.set_molecule_name("A").unwrap();
        let _ = view.apply_fetch(FetchOutcome {
            name: a.name,
            result: Ok(external("N")),
        });
        assert_eq!(source(&view), Some(LayoutSource::External));

        let _ = view.set_molecule_name("B");
        assert_eq!(source(&view), Some(LayoutSource::Model));
        assert_eq!(
            view.fetch_status(),
            &FetchStatus::Pending {
                name: "B".to_owned()
            }
        );
    }

    #[test]
    fn blank_name_or_disabled_fetch_requests_nothing() {
        let mut view = MoleculeView::new(caffeine_fragment(true), Options::default());
        assert!(view.set_molecule_name("   ").is_none());
        assert_eq!(view.fetch_status(), &FetchStatus::Idle);

        let mut options = Options::default();
        options.fetch.enabled = false;
        let mut offline = MoleculeView::new(caffeine_fragment(true), options);
        assert!(offline.set_molecule_name("Caffeine").is_none());
        assert_eq!(offline.molecule_name(), Some("Caffeine"));
        assert_eq!(source(&offline), Some(LayoutSource::Model));
    }

    #[test]
    fn scene_uses_3d_atoms() {
        let view = MoleculeView::new(caffeine_fragment(true), Options::default());
        let scene = view.build_scene();
        assert_eq!(scene.spheres.len(), 3);
        assert_eq!(scene.cylinders.len(), 2);
    }

    #[test]
    fn input_drives_the_viewport() {
        let mut view = MoleculeView::new(caffeine_fragment(true), Options::default());
        view.handle_input(InputEvent::Button(ViewportButton::ZoomIn));
        assert!(view.viewport().transform().k > 1.0);

        view.handle_input(InputEvent::PointerDown {
            button: MouseButton::Left,
            x: 10.0,
            y: 10.0,
        });
        view.handle_input(InputEvent::PointerMoved { x: 30.0, y: 5.0 });
        assert!(view.viewport().is_dragging());
        assert_eq!(view.viewport().transform().x, 20.0);

        assert!(view.handle_key("Digit0"));
        assert_eq!(view.viewport().transform().k, 1.0);
        assert!(!view.handle_key("KeyQ"));
    }
}
