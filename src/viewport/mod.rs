//! Pan/zoom transform for the 2D drawing.
//!
//! The controller is a small reducer: every change goes through
//! [`ViewportController::apply`] with a [`ViewportAction`], and the new
//! [`Transform`] is visible to the very next render. The scale is kept in
//! [`MIN_SCALE`]..=[`MAX_SCALE`] after every action.

use glam::Vec2;

use crate::options::ViewportOptions;

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f32 = 0.5;
/// Largest allowed zoom factor.
pub const MAX_SCALE: f32 = 5.0;

/// Scale and pan offset applied on top of the drawing's intrinsic viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Zoom factor.
    pub k: f32,
    /// Horizontal pan offset in screen pixels.
    pub x: f32,
    /// Vertical pan offset in screen pixels.
    pub y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No zoom, no pan.
    pub const IDENTITY: Self = Self {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Pan offset as a vector.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// CSS `transform` value for the drawing surface.
    #[must_use]
    pub fn css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.k)
    }
}

/// Every way the transform can change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportAction {
    /// Multiply the scale by the zoom step.
    ZoomIn,
    /// Divide the scale by the zoom step.
    ZoomOut,
    /// Continuous zoom from a scroll wheel. Positive `delta_y` (scrolling
    /// down) zooms out.
    Wheel {
        /// Scroll amount in pixels.
        delta_y: f32,
    },
    /// Pointer pressed at a screen position.
    DragStart {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
    },
    /// Pointer moved to a screen position.
    DragMove {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
    },
    /// Pointer released or left the surface.
    DragEnd,
    /// Back to the identity transform.
    Reset,
}

/// Owns the viewport [`Transform`] and drag state.
#[derive(Debug, Clone)]
pub struct ViewportController {
    transform: Transform,
    /// Pointer position minus offset, recorded at drag start.
    drag_origin: Option<Vec2>,
    zoom_step: f32,
    wheel_sensitivity: f32,
    transition: String,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(&ViewportOptions::default())
    }
}

impl ViewportController {
    /// Create a controller at the identity transform.
    #[must_use]
    pub fn new(options: &ViewportOptions) -> Self {
        // A step of 1 or less would make zoom-in a no-op or a zoom-out.
        let zoom_step = if options.zoom_step.is_finite() && options.zoom_step > 1.0 {
            options.zoom_step
        } else {
            ViewportOptions::default().zoom_step
        };
        Self {
            transform: Transform::IDENTITY,
            drag_origin: None,
            zoom_step,
            wheel_sensitivity: options.wheel_sensitivity,
            transition: options.transition.clone(),
        }
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// CSS `transition` value: the configured easing, or `none` mid-drag so
    /// the drawing tracks the pointer without lag.
    #[must_use]
    pub fn css_transition(&self) -> &str {
        if self.is_dragging() {
            "none"
        } else {
            &self.transition
        }
    }

    /// Apply one action.
    pub fn apply(&mut self, action: ViewportAction) {
        match action {
            ViewportAction::ZoomIn => {
                self.set_scale(self.transform.k * self.zoom_step);
            }
            ViewportAction::ZoomOut => {
                self.set_scale(self.transform.k / self.zoom_step);
            }
            ViewportAction::Wheel { delta_y } => {
                if delta_y.is_finite() {
                    self.set_scale(
                        self.transform.k - delta_y * self.wheel_sensitivity,
                    );
                }
            }
            ViewportAction::DragStart { x, y } => {
                self.drag_origin = Some(Vec2::new(x, y) - self.transform.offset());
            }
            ViewportAction::DragMove { x, y } => {
                if let Some(origin) = self.drag_origin {
                    let offset = Vec2::new(x, y) - origin;
                    self.transform.x = offset.x;
                    self.transform.y = offset.y;
                }
            }
            ViewportAction::DragEnd => self.drag_origin = None,
            ViewportAction::Reset => {
                self.transform = Transform::IDENTITY;
                self.drag_origin = None;
            }
        }
    }

    fn set_scale(&mut self, k: f32) {
        if k.is_finite() {
            self.transform.k = k.clamp(MIN_SCALE, MAX_SCALE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_bounds(c: &ViewportController) -> bool {
        (MIN_SCALE..=MAX_SCALE).contains(&c.transform().k)
    }

    #[test]
    fn zoom_in_clamps_at_max() {
        let mut c = ViewportController::default();
        for _ in 0..50 {
            c.apply(ViewportAction::ZoomIn);
            assert!(in_bounds(&c));
        }
        assert_eq!(c.transform().k, MAX_SCALE);
    }

    #[test]
    fn zoom_out_clamps_at_min() {
        let mut c = ViewportController::default();
        for _ in 0..50 {
            c.apply(ViewportAction::ZoomOut);
            assert!(in_bounds(&c));
        }
        assert_eq!(c.transform().k, MIN_SCALE);
    }

    #[test]
    fn zoom_in_then_out_returns_to_start() {
        let mut c = ViewportController::default();
        c.apply(ViewportAction::ZoomIn);
        assert!((c.transform().k - 1.2).abs() < 1e-6);
        c.apply(ViewportAction::ZoomOut);
        assert!((c.transform().k - 1.0).abs() < 1e-6);
    }

    #[test]
    fn wheel_is_proportional_and_clamped() {
        let mut c = ViewportController::default();
        c.apply(ViewportAction::Wheel { delta_y: -100.0 });
        assert!((c.transform().k - 1.1).abs() < 1e-5);
        c.apply(ViewportAction::Wheel { delta_y: 1e6 });
        assert_eq!(c.transform().k, MIN_SCALE);
        c.apply(ViewportAction::Wheel { delta_y: -1e6 });
        assert_eq!(c.transform().k, MAX_SCALE);
        c.apply(ViewportAction::Wheel { delta_y: f32::NAN });
        assert_eq!(c.transform().k, MAX_SCALE);
    }

    #[test]
    fn mixed_sequence_stays_in_bounds() {
        let mut c = ViewportController::default();
        let actions = [
            ViewportAction::ZoomIn,
            ViewportAction::Wheel { delta_y: -3000.0 },
            ViewportAction::ZoomIn,
            ViewportAction::Wheel { delta_y: 9000.0 },
            ViewportAction::ZoomOut,
            ViewportAction::Wheel { delta_y: 1.0 },
            ViewportAction::ZoomOut,
        ];
        for action in actions.iter().cycle().take(200) {
            c.apply(*action);
            assert!(in_bounds(&c));
        }
    }

    #[test]
    fn drag_pans_relative_to_start() {
        let mut c = ViewportController::default();
        c.apply(ViewportAction::DragStart { x: 10.0, y: 10.0 });
        assert!(c.is_dragging());
        assert_eq!(c.css_transition(), "none");
        c.apply(ViewportAction::DragMove { x: 30.0, y: 5.0 });
        assert_eq!(c.transform().offset(), Vec2::new(20.0, -5.0));
        c.apply(ViewportAction::DragEnd);

        // A second drag continues from the current offset.
        c.apply(ViewportAction::DragStart { x: 0.0, y: 0.0 });
        c.apply(ViewportAction::DragMove { x: 1.0, y: 1.0 });
        assert_eq!(c.transform().offset(), Vec2::new(21.0, -4.0));
        c.apply(ViewportAction::DragEnd);
        assert!(!c.is_dragging());
        assert_ne!(c.css_transition(), "none");
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut c = ViewportController::default();
        c.apply(ViewportAction::DragMove { x: 50.0, y: 50.0 });
        assert_eq!(c.transform(), Transform::IDENTITY);
    }

    #[test]
    fn reset_restores_identity() {
        let mut c = ViewportController::default();
        c.apply(ViewportAction::ZoomIn);
        c.apply(ViewportAction::DragStart { x: 0.0, y: 0.0 });
        c.apply(ViewportAction::DragMove { x: 5.0, y: 7.0 });
        c.apply(ViewportAction::Reset);
        assert_eq!(c.transform(), Transform::IDENTITY);
        assert!(!c.is_dragging());
    }

    #[test]
    fn css_transform_string() {
        let t = Transform {
            k: 2.0,
            x: 3.0,
            y: -4.0,
        };
        assert_eq!(t.css(), "translate(3px, -4px) scale(2)");
    }

    #[test]
    fn degenerate_zoom_step_falls_back_to_default() {
        let options = ViewportOptions {
            zoom_step: 0.5,
            ..ViewportOptions::default()
        };
        let mut c = ViewportController::new(&options);
        c.apply(ViewportAction::ZoomIn);
        assert!(c.transform().k > 1.0);
    }
}
