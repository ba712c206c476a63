//! Converts raw surface events into viewport actions.
//!
//! The `InputProcessor` owns the key-binding map and the little bit of
//! pointer state needed to tell a drag from a hover. It is the only thing
//! that sits between raw events and
//! [`ViewportController::apply`](crate::viewport::ViewportController::apply).

use super::event::{InputEvent, MouseButton, ViewportButton};
use super::keyboard::KeyAction;
use crate::options::KeybindingOptions;
use crate::viewport::ViewportAction;

/// Converts raw surface events into [`ViewportAction`]s.
///
/// # Usage
///
/// ```
/// use molsight::input::{InputEvent, InputProcessor, MouseButton};
/// use molsight::viewport::ViewportController;
///
/// let mut input = InputProcessor::default();
/// let mut viewport = ViewportController::default();
/// let down = InputEvent::PointerDown { button: MouseButton::Left, x: 0.0, y: 0.0 };
/// if let Some(action) = input.handle_event(down) {
///     viewport.apply(action);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Whether a panning button is currently held.
    pointer_pressed: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with the given key bindings.
    #[must_use]
    pub fn new(key_bindings: KeybindingOptions) -> Self {
        Self {
            pointer_pressed: false,
            key_bindings,
        }
    }

    /// Translate one event. Returns `None` when the event does not change
    /// the viewport (hover moves, right clicks).
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewportAction> {
        match event {
            InputEvent::PointerDown {
                button: MouseButton::Left | MouseButton::Middle,
                x,
                y,
            } => {
                self.pointer_pressed = true;
                Some(ViewportAction::DragStart { x, y })
            }
            InputEvent::PointerDown {
                button: MouseButton::Right,
                ..
            } => None,
            InputEvent::PointerMoved { x, y } => self
                .pointer_pressed
                .then_some(ViewportAction::DragMove { x, y }),
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                let was_pressed = self.pointer_pressed;
                self.pointer_pressed = false;
                was_pressed.then_some(ViewportAction::DragEnd)
            }
            InputEvent::Wheel { delta_y } => {
                Some(ViewportAction::Wheel { delta_y })
            }
            InputEvent::Button(button) => Some(match button {
                ViewportButton::ZoomIn => ViewportAction::ZoomIn,
                ViewportButton::ZoomOut => ViewportAction::ZoomOut,
                ViewportButton::Reset => ViewportAction::Reset,
            }),
        }
    }

    /// Translate a key press using the configured bindings.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewportAction> {
        self.key_bindings.lookup(key).map(|action| match action {
            KeyAction::ZoomIn => ViewportAction::ZoomIn,
            KeyAction::ZoomOut => ViewportAction::ZoomOut,
            KeyAction::ResetView => ViewportAction::Reset,
        })
    }
}
