//! Gesture controller for object rotation and camera dolly
//!
//! Gestures:
//! - Mouse drag / one-finger drag: rotate the target(s), one step per move
//! - Wheel: dolly the camera one step per event
//! - Two-finger pinch: dolly the camera when both finger separations agree
//!
//! Vertical drags tilt (`rotation.x`), horizontal drags spin (`rotation.y`).

use objctl_math::Vec2;

use crate::settings::{check_bounds, check_divisor, check_limit, check_speed};
use crate::{AngleLimit, Axis, ControlError, ControllerSettings, RotationAxes, Targets, TouchDragMode, ViewerControl};

/// Whether a rotation-capable drag is in progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Dragging,
}

/// Direction of a dolly step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zoom {
    /// Camera moved closer
    In,
    /// Camera moved away
    Out,
}

/// How an interaction ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Pressed and released without moving
    Tap,
    /// At least one move happened in between
    Drag,
}

/// Per-interaction state, reset when the interaction ends
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionState {
    pub mode: Mode,
    /// Last pointer position; `None` until a press records one
    pub last_pointer: Option<Vec2>,
    /// Per-axis finger separation from the previous pinch event
    pub pinch_baseline: Option<Vec2>,
    /// Fingers still down from a pinch; drags are blocked while non-zero
    pub pinch_touches: usize,
    /// A move happened since the last press
    pub moved: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Device {
    Mouse,
    Touch,
}

/// Turns pointer and touch events into rotation and dolly requests
///
/// `K` is the key the scene uses for its objects. All handlers run to
/// completion on the caller's thread and write through the [`ViewerControl`]
/// passed in.
pub struct GestureController<K> {
    settings: ControllerSettings,
    targets: Targets<K>,
    session: SessionState,
}

impl<K: Copy> Default for GestureController<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy> GestureController<K> {
    /// Controller with default settings and no targets
    pub fn new() -> Self {
        Self {
            settings: ControllerSettings::default(),
            targets: Targets::default(),
            session: SessionState::default(),
        }
    }

    /// Controller with validated `settings`
    pub fn from_settings(settings: ControllerSettings) -> Result<Self, ControlError> {
        settings.validate()?;
        Ok(Self {
            settings,
            ..Self::new()
        })
    }

    /// Builder: set the targets
    pub fn with_targets(mut self, targets: Targets<K>) -> Self {
        self.targets = targets;
        self
    }

    /// Builder: set which axes respond to drags
    pub fn with_rotation_axes(mut self, axes: RotationAxes) -> Self {
        self.settings.rotation_axes = axes;
        self
    }

    /// Current configuration
    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Replace the whole configuration
    ///
    /// Leaves the current one untouched when `settings` is invalid.
    pub fn apply_settings(&mut self, settings: ControllerSettings) -> Result<(), ControlError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    // ==================== Configuration ====================

    /// Set the camera distance change per zoom step
    pub fn set_zoom_speed(&mut self, speed: f32) -> Result<(), ControlError> {
        check_speed("zoom speed", speed)?;
        self.settings.zoom_speed = speed;
        Ok(())
    }

    /// Set the camera distance range
    pub fn set_distance_bounds(&mut self, min: f32, max: f32) -> Result<(), ControlError> {
        check_bounds(min, max)?;
        self.settings.min_distance = min;
        self.settings.max_distance = max;
        Ok(())
    }

    /// Set the mouse drag step in radians
    pub fn set_rotation_speed(&mut self, speed: f32) -> Result<(), ControlError> {
        check_speed("rotation speed", speed)?;
        self.settings.rotation_speed = speed;
        Ok(())
    }

    /// Set the touch drag step in radians
    pub fn set_touch_rotation_speed(&mut self, speed: f32) -> Result<(), ControlError> {
        check_speed("touch rotation speed", speed)?;
        self.settings.touch_rotation_speed = speed;
        Ok(())
    }

    /// Choose how touch drags are stepped
    pub fn set_touch_drag_mode(&mut self, mode: TouchDragMode) -> Result<(), ControlError> {
        if let TouchDragMode::Proportional { divisor } = mode {
            check_divisor(divisor)?;
        }
        self.settings.touch_drag = mode;
        Ok(())
    }

    pub fn enable_rotation(&mut self, axis: Axis) {
        self.settings.rotation_axes.insert(axis.flag());
    }

    pub fn disable_rotation(&mut self, axis: Axis) {
        self.settings.rotation_axes.remove(axis.flag());
    }

    pub fn is_rotation_enabled(&self, axis: Axis) -> bool {
        self.settings.rotation_axes.contains(axis.flag())
    }

    pub fn enable_zoom(&mut self) {
        self.settings.zoom_enabled = true;
    }

    pub fn disable_zoom(&mut self) {
        self.settings.zoom_enabled = false;
    }

    pub fn is_zoom_enabled(&self) -> bool {
        self.settings.zoom_enabled
    }

    /// Restrict `axis` to the open window `(-from, to)`
    pub fn set_angle_limit(&mut self, axis: Axis, from: f32, to: f32) -> Result<(), ControlError> {
        let limit = AngleLimit::new(from, to);
        check_limit(axis, &limit)?;
        *self.settings.limit_mut(axis) = limit;
        Ok(())
    }

    /// Stop checking the angle window of `axis`
    pub fn clear_angle_limit(&mut self, axis: Axis) {
        self.settings.limit_mut(axis).enabled = false;
    }

    /// Replace the rotation receivers; takes effect on the next event
    pub fn set_targets(&mut self, targets: Targets<K>) {
        log::debug!("Gesture targets replaced ({} objects)", targets.len());
        self.targets = targets;
    }

    pub fn targets(&self) -> &Targets<K> {
        &self.targets
    }

    // ==================== Session ====================

    /// Check whether a drag or pinch is currently open
    pub fn is_interaction_active(&self) -> bool {
        self.session.mode == Mode::Dragging || self.session.pinch_touches > 0
    }

    /// Snapshot of the per-interaction state
    pub fn session(&self) -> SessionState {
        self.session
    }

    /// Drop any open interaction
    pub fn reset_session(&mut self) {
        self.session = SessionState::default();
    }

    // ==================== Mouse ====================

    /// Start a drag at `position`. Nothing rotates until the first move.
    pub fn pointer_down(&mut self, position: Vec2) {
        self.session.mode = Mode::Dragging;
        self.session.last_pointer = Some(position);
        self.session.moved = false;
        log::debug!("Pointer down at ({}, {})", position.x, position.y);
    }

    /// Rotate the targets while a drag is open
    pub fn pointer_move<V>(&mut self, viewer: &mut V, position: Vec2)
    where
        V: ViewerControl<Key = K>,
    {
        if self.session.mode != Mode::Dragging {
            return;
        }
        self.drag(viewer, position, Device::Mouse);
    }

    /// End the drag. Also used when the pointer leaves the surface.
    ///
    /// Returns `None` when no drag was open, so repeated calls change nothing.
    pub fn pointer_up(&mut self) -> Option<Release> {
        if self.session.mode != Mode::Dragging {
            return None;
        }
        let release = self.release_kind();
        self.session.mode = Mode::Idle;
        self.session.last_pointer = None;
        self.session.moved = false;
        log::debug!("Pointer released ({:?})", release);
        Some(release)
    }

    /// Dolly one step for a wheel event; positive `delta` zooms in
    pub fn wheel<V>(&mut self, viewer: &mut V, delta: f32) -> Option<Zoom>
    where
        V: ViewerControl<Key = K>,
    {
        if delta > 0.0 {
            self.zoom(viewer, Zoom::In)
        } else if delta < 0.0 {
            self.zoom(viewer, Zoom::Out)
        } else {
            None
        }
    }

    /// Dolly one step in `direction`, staying inside the distance bounds
    ///
    /// Returns the applied direction, or `None` when zoom is disabled or the
    /// camera already sits at the bound.
    pub fn zoom<V>(&mut self, viewer: &mut V, direction: Zoom) -> Option<Zoom>
    where
        V: ViewerControl<Key = K>,
    {
        if !self.settings.zoom_enabled {
            return None;
        }
        let ControllerSettings { zoom_speed, min_distance, max_distance, .. } = self.settings;
        let distance = viewer.dolly_distance();

        let target = match direction {
            Zoom::In if distance > min_distance => (distance - zoom_speed).max(min_distance),
            Zoom::Out if distance < max_distance => (distance + zoom_speed).min(max_distance),
            _ => return None,
        };
        viewer.set_dolly_distance(target);
        log::debug!("Zoom {:?}: distance {} -> {}", direction, distance, target);
        Some(direction)
    }

    // ==================== Touch ====================

    /// Fingers went down; `touches` holds every active finger in order
    ///
    /// Two fingers open a pinch and capture its baseline. Any other count
    /// records the first finger as the drag baseline.
    pub fn touch_start(&mut self, touches: &[Vec2]) {
        self.session.moved = false;
        match touches {
            [first, second] => {
                self.session.pinch_baseline = Some(first.separation(*second));
                self.session.pinch_touches = 2;
                log::debug!("Pinch started with spread {:?}", self.session.pinch_baseline);
            }
            [first, ..] => {
                self.session.mode = Mode::Dragging;
                self.session.last_pointer = Some(*first);
            }
            [] => {}
        }
    }

    /// Fingers moved; pinch with two fingers, otherwise drag with the first
    ///
    /// Drags stay blocked after a pinch until every finger has lifted.
    pub fn touch_move<V>(&mut self, viewer: &mut V, touches: &[Vec2]) -> Option<Zoom>
    where
        V: ViewerControl<Key = K>,
    {
        match touches {
            [first, second] if self.settings.zoom_enabled => {
                self.session.pinch_touches = 2;
                self.session.moved = true;
                self.pinch(viewer, first.separation(*second))
            }
            [first, ..] if self.session.pinch_touches == 0 => {
                self.session.pinch_baseline = None;
                self.drag(viewer, *first, Device::Touch);
                None
            }
            _ => None,
        }
    }

    /// A finger lifted, leaving `remaining` on the surface
    ///
    /// Returns how the interaction ended once the last finger is up.
    pub fn touch_end(&mut self, remaining: usize) -> Option<Release> {
        let was_active = self.is_interaction_active();
        self.session.pinch_baseline = None;
        self.session.pinch_touches = self.session.pinch_touches.saturating_sub(1);

        if remaining > 0 {
            return None;
        }
        let release = self.release_kind();
        self.session = SessionState::default();
        if was_active {
            log::debug!("Touch released ({:?})", release);
            Some(release)
        } else {
            None
        }
    }

    // ==================== Internals ====================

    fn release_kind(&self) -> Release {
        if self.session.moved {
            Release::Drag
        } else {
            Release::Tap
        }
    }

    fn pinch<V>(&mut self, viewer: &mut V, spread: Vec2) -> Option<Zoom>
    where
        V: ViewerControl<Key = K>,
    {
        let previous = self.session.pinch_baseline.replace(spread)?;
        // Both separations of the baseline must be positive
        if previous.x <= 0.0 || previous.y <= 0.0 {
            return None;
        }

        if spread.all_gt(previous) {
            self.zoom(viewer, Zoom::In)
        } else if spread.all_lt(previous) {
            self.zoom(viewer, Zoom::Out)
        } else {
            None
        }
    }

    fn drag<V>(&mut self, viewer: &mut V, position: Vec2, device: Device)
    where
        V: ViewerControl<Key = K>,
    {
        let Some(last) = self.session.last_pointer.replace(position) else {
            return;
        };
        let delta = position - last;
        if delta == Vec2::ZERO {
            return;
        }
        self.session.moved = true;

        let step = self.step_for(delta, device);
        log::trace!("{:?} drag delta {:?} -> step {:?}", device, delta, step);

        if self.is_rotation_enabled(Axis::Horizontal) && delta.x != 0.0 {
            self.rotate_targets(viewer, Axis::Horizontal, step.x);
        }
        if self.is_rotation_enabled(Axis::Vertical) && delta.y != 0.0 {
            self.rotate_targets(viewer, Axis::Vertical, step.y);
        }
    }

    /// Rotation step for a pointer delta; `x` spins, `y` tilts
    fn step_for(&self, delta: Vec2, device: Device) -> Vec2 {
        match (device, self.settings.touch_drag) {
            (Device::Mouse, _) => delta.direction() * self.settings.rotation_speed,
            (Device::Touch, TouchDragMode::Stepped) => {
                delta.direction() * self.settings.touch_rotation_speed
            }
            (Device::Touch, TouchDragMode::Proportional { divisor }) => delta / divisor,
        }
    }

    fn rotate_targets<V>(&self, viewer: &mut V, axis: Axis, step: f32)
    where
        V: ViewerControl<Key = K>,
    {
        let limit = self.settings.limit(axis);
        for key in self.targets.iter() {
            let Some(rotation) = viewer.rotation(key) else {
                continue;
            };
            let prospective = axis.angle(rotation) + step;
            if !limit.admits(prospective) {
                log::debug!(
                    "Rejected {} step {}: {} outside ({}, {})",
                    axis, step, prospective, limit.lower(), limit.upper()
                );
                continue;
            }
            viewer.rotate(key, axis, step);
        }
    }
}
