//! Input handling: event types, key actions, and the input processor
//! that converts raw surface events into viewport actions.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Converts raw events into viewport actions.
pub mod processor;

pub use event::{InputEvent, MouseButton, ViewportButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
