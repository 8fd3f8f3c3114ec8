//! Winit event adapter
//!
//! winit reports touches one finger at a time, each with its own id and
//! phase. The controller wants the ordered set of active fingers, so
//! [`TouchTracker`] keeps that set and [`GestureInput`] routes window events
//! to the matching controller handler.

use objctl_math::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};

use crate::{GestureController, Release, ViewerControl};

/// Pixel wheel deltas are divided by this to compare with line deltas
const PIXELS_PER_LINE: f64 = 40.0;

/// What a single finger event did to the active set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchUpdate {
    /// A finger was added
    Started,
    /// A known finger moved
    Moved,
    /// A known finger lifted or was cancelled
    Ended { remaining: usize },
    /// Event for a finger the tracker does not know
    Ignored,
}

/// Ordered set of fingers currently on the surface
#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    active: Vec<(u64, Vec2)>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finger event into the set
    pub fn apply(&mut self, id: u64, phase: TouchPhase, location: Vec2) -> TouchUpdate {
        let index = self.active.iter().position(|(active_id, _)| *active_id == id);
        match (phase, index) {
            (TouchPhase::Started, Some(i)) => {
                // Same id reported twice: treat as a restart in place
                self.active[i].1 = location;
                TouchUpdate::Started
            }
            (TouchPhase::Started, None) => {
                self.active.push((id, location));
                TouchUpdate::Started
            }
            (TouchPhase::Moved, Some(i)) => {
                self.active[i].1 = location;
                TouchUpdate::Moved
            }
            (TouchPhase::Ended | TouchPhase::Cancelled, Some(i)) => {
                self.active.remove(i);
                TouchUpdate::Ended { remaining: self.active.len() }
            }
            (_, None) => TouchUpdate::Ignored,
        }
    }

    /// Positions of the active fingers, oldest first
    pub fn points(&self) -> Vec<Vec2> {
        self.active.iter().map(|(_, location)| *location).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

/// Routes winit window events to a [`GestureController`]
#[derive(Debug, Default)]
pub struct GestureInput {
    cursor: Vec2,
    touches: TouchTracker,
    last_release: Option<Release>,
}

impl GestureInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// How the most recent interaction ended, cleared when read
    pub fn take_release(&mut self) -> Option<Release> {
        self.last_release.take()
    }

    /// Feed one window event to the controller
    ///
    /// Returns true when the event was consumed. Touch events are always
    /// consumed so the host does not run its own gesture handling on them.
    pub fn handle_window_event<K, V>(
        &mut self,
        controller: &mut GestureController<K>,
        viewer: &mut V,
        event: &WindowEvent,
    ) -> bool
    where
        K: Copy,
        V: ViewerControl<Key = K>,
    {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::from((position.x, position.y));
                controller.pointer_move(viewer, self.cursor);
                controller.is_interaction_active()
            }
            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                match state {
                    ElementState::Pressed => controller.pointer_down(self.cursor),
                    ElementState::Released => self.record(controller.pointer_up()),
                }
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.record(controller.pointer_up());
                false
            }
            WindowEvent::MouseWheel { delta, .. } => {
                controller.wheel(viewer, wheel_amount(delta));
                true
            }
            WindowEvent::Touch(touch) => {
                let location = Vec2::from((touch.location.x, touch.location.y));
                match self.touches.apply(touch.id, touch.phase, location) {
                    TouchUpdate::Started => controller.touch_start(&self.touches.points()),
                    TouchUpdate::Moved => {
                        controller.touch_move(viewer, &self.touches.points());
                    }
                    TouchUpdate::Ended { remaining } => {
                        let release = controller.touch_end(remaining);
                        self.record(release);
                    }
                    TouchUpdate::Ignored => {
                        log::trace!("Ignoring touch {} in phase {:?}", touch.id, touch.phase);
                    }
                }
                true
            }
            WindowEvent::Focused(false) => {
                self.touches.clear();
                controller.reset_session();
                false
            }
            _ => false,
        }
    }

    fn record(&mut self, release: Option<Release>) {
        if release.is_some() {
            self.last_release = release;
        }
    }
}

/// Signed wheel amount where positive means zoom in
///
/// Scrolling up (away from the user) reports a positive y on every platform
/// winit supports.
pub fn wheel_amount(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => *y,
        MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_LINE) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_tracker_keeps_start_order() {
        let mut tracker = TouchTracker::new();
        assert_eq!(tracker.apply(7, TouchPhase::Started, Vec2::new(1.0, 1.0)), TouchUpdate::Started);
        assert_eq!(tracker.apply(3, TouchPhase::Started, Vec2::new(2.0, 2.0)), TouchUpdate::Started);
        assert_eq!(tracker.points(), vec![Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)]);
    }

    #[test]
    fn test_tracker_moves_and_ends() {
        let mut tracker = TouchTracker::new();
        tracker.apply(1, TouchPhase::Started, Vec2::new(0.0, 0.0));
        tracker.apply(2, TouchPhase::Started, Vec2::new(10.0, 10.0));

        assert_eq!(tracker.apply(2, TouchPhase::Moved, Vec2::new(20.0, 5.0)), TouchUpdate::Moved);
        assert_eq!(tracker.points()[1], Vec2::new(20.0, 5.0));

        assert_eq!(
            tracker.apply(1, TouchPhase::Ended, Vec2::new(0.0, 0.0)),
            TouchUpdate::Ended { remaining: 1 }
        );
        assert_eq!(tracker.points(), vec![Vec2::new(20.0, 5.0)]);

        assert_eq!(
            tracker.apply(2, TouchPhase::Cancelled, Vec2::new(20.0, 5.0)),
            TouchUpdate::Ended { remaining: 0 }
        );
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_tracker_ignores_unknown_fingers() {
        let mut tracker = TouchTracker::new();
        assert_eq!(tracker.apply(4, TouchPhase::Moved, Vec2::ZERO), TouchUpdate::Ignored);
        assert_eq!(tracker.apply(4, TouchPhase::Ended, Vec2::ZERO), TouchUpdate::Ignored);
        assert_eq!(tracker.len(), 0);
    }

    #[test]
    fn test_duplicate_start_does_not_grow_set() {
        let mut tracker = TouchTracker::new();
        tracker.apply(1, TouchPhase::Started, Vec2::ZERO);
        tracker.apply(1, TouchPhase::Started, Vec2::new(3.0, 3.0));
        assert_eq!(tracker.points(), vec![Vec2::new(3.0, 3.0)]);
    }

    #[test]
    fn test_wheel_amount_sign() {
        assert_eq!(wheel_amount(&MouseScrollDelta::LineDelta(0.0, 1.0)), 1.0);
        assert_eq!(wheel_amount(&MouseScrollDelta::LineDelta(0.0, -2.0)), -2.0);
        let pixels = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -80.0));
        assert_eq!(wheel_amount(&pixels), -2.0);
    }
}
