//! Background thread for non-blocking structure lookups.
//!
//! The owning thread submits requests and polls for outcomes; it never
//! waits on the network. Queued requests collapse to the newest one, and
//! outcomes are published through a triple buffer, so only the most recent
//! finished lookup is ever observed. Outcomes carry the name they were
//! requested for; deciding whether that name is still wanted is the
//! caller's job (see [`MoleculeView::apply_fetch`](crate::MoleculeView::apply_fetch)).

use std::sync::mpsc;

use super::{FetchError, StructureSource};
use crate::error::MolsightError;
use crate::structure::Layout2d;

/// Ask for the 2D layout of one molecule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Molecule name as displayed.
    pub name: String,
}

/// A finished lookup, keyed by the name it was issued for.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    /// Name the request was issued for.
    pub name: String,
    /// The layout, or why there is none.
    pub result: Result<Layout2d, FetchError>,
}

enum WorkerMessage {
    Fetch(FetchRequest),
    Shutdown,
}

/// Owns the lookup thread.
pub struct StructureFetcher {
    request_tx: mpsc::Sender<WorkerMessage>,
    results: triple_buffer::Output<Option<FetchOutcome>>,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl StructureFetcher {
    /// Spawn the lookup thread around `source`.
    ///
    /// # Errors
    ///
    /// Returns [`MolsightError::ThreadSpawn`] if the thread fails to spawn.
    pub fn spawn<S: StructureSource>(source: S) -> Result<Self, MolsightError> {
        let (request_tx, request_rx) = mpsc::channel::<WorkerMessage>();
        let (result_input, result_output) = triple_buffer::triple_buffer(&None);

        let thread = std::thread::Builder::new()
            .name("structure-fetch".into())
            .spawn(move || {
                Self::thread_loop(&source, &request_rx, result_input);
            })
            .map_err(MolsightError::ThreadSpawn)?;

        Ok(Self {
            request_tx,
            results: result_output,
            thread: Some(thread),
        })
    }

    /// Queue a lookup (non-blocking send).
    pub fn submit(&self, request: FetchRequest) {
        let _ = self.request_tx.send(WorkerMessage::Fetch(request));
    }

    /// Non-blocking check for a finished lookup.
    pub fn try_recv(&mut self) -> Option<FetchOutcome> {
        let _ = self.results.update();
        self.results.output_buffer_mut().take()
    }

    /// Shut down the lookup thread and wait for it to finish. An in-flight
    /// request runs to completion first.
    pub fn shutdown(&mut self) {
        let _ = self.request_tx.send(WorkerMessage::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }

    fn thread_loop<S: StructureSource>(
        source: &S,
        request_rx: &mpsc::Receiver<WorkerMessage>,
        mut result_input: triple_buffer::Input<Option<FetchOutcome>>,
    ) {
        while let Ok(message) = request_rx.recv() {
            let request = match drain_latest(message, request_rx) {
                WorkerMessage::Shutdown => break,
                WorkerMessage::Fetch(request) => request,
            };

            let result = source.lookup(&request.name);
            match &result {
                Ok(layout) => log::info!(
                    "fetched 2D layout for {:?} ({} atoms)",
                    request.name,
                    layout.atoms.len()
                ),
                Err(e) => log::warn!(
                    "2D layout lookup for {:?} failed: {e}",
                    request.name
                ),
            }
            result_input.write(Some(FetchOutcome {
                name: request.name,
                result,
            }));
        }
    }
}

impl Drop for StructureFetcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Drain queued messages, keeping only the latest. A queued shutdown always
/// wins.
fn drain_latest(
    first: WorkerMessage,
    request_rx: &mpsc::Receiver<WorkerMessage>,
) -> WorkerMessage {
    let mut latest = first;
    while let Ok(next) = request_rx.try_recv() {
        if matches!(latest, WorkerMessage::Shutdown) {
            continue;
        }
        latest = next;
    }
    latest
}
