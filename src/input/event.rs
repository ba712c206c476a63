/// Platform-agnostic input events for the 2D drawing surface.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`ViewportAction`](crate::viewport::ViewportAction)
/// values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed over the surface.
    PointerDown {
        /// Which button was pressed.
        button: MouseButton,
        /// Horizontal position in screen pixels.
        x: f32,
        /// Vertical position in screen pixels.
        y: f32,
    },
    /// Cursor moved to absolute screen position.
    PointerMoved {
        /// Horizontal position in screen pixels.
        x: f32,
        /// Vertical position in screen pixels.
        y: f32,
    },
    /// Mouse button released.
    PointerUp,
    /// Cursor left the surface.
    PointerLeave,
    /// Scroll wheel (positive = scrolled down, zooms out).
    Wheel {
        /// Scroll amount in pixels.
        delta_y: f32,
    },
    /// One of the on-screen zoom controls was clicked.
    Button(ViewportButton),
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// On-screen viewport controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportButton {
    /// "+" button.
    ZoomIn,
    /// "-" button.
    ZoomOut,
    /// Reset button.
    Reset,
}
