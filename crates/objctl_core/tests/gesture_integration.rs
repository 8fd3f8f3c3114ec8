//! Integration tests for gestures driving a scene
//!
//! These tests wire a GestureController to a real Scene:
//! 1. Mouse drags rotate the targeted objects
//! 2. Wheel and pinch gestures dolly the camera within bounds
//! 3. Window events routed through GestureInput reach the scene

use std::f32::consts::PI;

use objctl_core::{Camera, Object, ObjectKey, Scene, Transform, Vec3};
use objctl_input::{
    Axis, GestureController, GestureInput, Release, RotationAxes, Targets, Zoom,
};
use objctl_math::{Euler, Vec2};
use winit::dpi::PhysicalPosition;
use winit::event::{
    DeviceId, ElementState, MouseButton, MouseScrollDelta, Touch, TouchPhase, WindowEvent,
};

const EPS: f32 = 1e-5;

fn scene_with_cube() -> (Scene, ObjectKey) {
    let mut scene = Scene::new().with_camera(Camera::at_distance(10.0));
    let cube = scene.add_object(Object::new().with_name("cube"));
    (scene, cube)
}

fn rotation(scene: &Scene, key: ObjectKey) -> Euler {
    scene.get(key).expect("object should exist").transform.rotation
}

// ==================== Rotation ====================

#[test]
fn test_drag_spins_cube_one_step() {
    let (mut scene, cube) = scene_with_cube();
    let mut controller = GestureController::new().with_targets(Targets::single(cube));
    controller.set_rotation_speed(0.05).unwrap();

    controller.pointer_down(Vec2::new(200.0, 200.0));
    controller.pointer_move(&mut scene, Vec2::new(203.0, 200.0));

    assert!((rotation(&scene, cube).y - 0.05).abs() < EPS);
    assert_eq!(controller.pointer_up(), Some(Release::Drag));
}

#[test]
fn test_tilt_limit_holds_across_many_moves() {
    let (mut scene, cube) = scene_with_cube();
    let mut controller = GestureController::new()
        .with_targets(Targets::single(cube))
        .with_rotation_axes(RotationAxes::VERTICAL);
    controller.set_angle_limit(Axis::Vertical, PI / 8.0, PI / 8.0).unwrap();

    controller.pointer_down(Vec2::ZERO);
    for i in 1..=50 {
        controller.pointer_move(&mut scene, Vec2::new(0.0, i as f32));
        let x = rotation(&scene, cube).x;
        assert!(x < PI / 8.0 && x > -PI / 8.0, "tilt escaped window: {}", x);
    }
    // 0.35 is the last multiple of 0.05 inside (-pi/8, pi/8)
    assert!((rotation(&scene, cube).x - 0.35).abs() < EPS);
}

#[test]
fn test_group_rotation_and_stale_member() {
    let mut scene = Scene::new();
    let a = scene.add_object(Object::with_transform(Transform::from_position(Vec3::new(-2.0, 0.0, 0.0))));
    let b = scene.add_object(Object::with_transform(Transform::from_position(Vec3::new(2.0, 0.0, 0.0))));
    let gone = scene.add_object(Object::new());
    scene.remove_object(gone);

    let mut controller = GestureController::new();
    controller.set_targets(Targets::group([a, gone, b]));

    controller.touch_start(&[Vec2::new(10.0, 10.0)]);
    controller.touch_move(&mut scene, &[Vec2::new(0.0, 10.0)]);

    assert!((rotation(&scene, a).y + 0.05).abs() < EPS);
    assert!((rotation(&scene, b).y + 0.05).abs() < EPS);
}

#[test]
fn test_retargeting_takes_effect_on_next_event() {
    let mut scene = Scene::new();
    let first = scene.add_object(Object::new().with_name("first"));
    let second = scene.add_object(Object::new().with_name("second"));
    let mut controller = GestureController::new().with_targets(Targets::single(first));

    controller.pointer_down(Vec2::ZERO);
    controller.pointer_move(&mut scene, Vec2::new(1.0, 0.0));
    controller.set_targets(Targets::single(second));
    controller.pointer_move(&mut scene, Vec2::new(2.0, 0.0));

    assert!((rotation(&scene, first).y - 0.05).abs() < EPS);
    assert!((rotation(&scene, second).y - 0.05).abs() < EPS);
}

// ==================== Zoom ====================

#[test]
fn test_wheel_zoom_stops_at_min_distance() {
    let (mut scene, cube) = scene_with_cube();
    let mut controller = GestureController::new().with_targets(Targets::single(cube));
    controller.set_distance_bounds(6.0, 15.0).unwrap();
    controller.set_zoom_speed(0.5).unwrap();

    controller.wheel(&mut scene, 1.0);
    assert!((scene.camera.distance() - 9.5).abs() < EPS);

    while controller.wheel(&mut scene, 1.0).is_some() {}
    assert_eq!(scene.camera.distance(), 6.0);
    assert_eq!(controller.wheel(&mut scene, 1.0), None);
}

#[test]
fn test_pinch_zoom_in_then_release() {
    let (mut scene, cube) = scene_with_cube();
    let mut controller = GestureController::new().with_targets(Targets::single(cube));

    controller.touch_start(&[Vec2::new(100.0, 100.0), Vec2::new(140.0, 140.0)]);
    let zoom = controller.touch_move(&mut scene, &[Vec2::new(100.0, 100.0), Vec2::new(160.0, 155.0)]);

    assert_eq!(zoom, Some(Zoom::In));
    assert!((scene.camera.distance() - 9.5).abs() < EPS);
    assert_eq!(controller.session().pinch_baseline, Some(Vec2::new(60.0, 55.0)));
    assert_eq!(rotation(&scene, cube), Euler::IDENTITY);

    controller.touch_end(1);
    assert!(controller.is_interaction_active());
    controller.touch_end(0);
    assert!(!controller.is_interaction_active());
}

// ==================== Window events ====================

fn device() -> DeviceId {
    unsafe { DeviceId::dummy() }
}

fn touch(id: u64, phase: TouchPhase, x: f64, y: f64) -> WindowEvent {
    WindowEvent::Touch(Touch {
        device_id: device(),
        phase,
        location: PhysicalPosition::new(x, y),
        force: None,
        id,
    })
}

#[test]
fn test_window_mouse_events_rotate_and_zoom() {
    let (mut scene, cube) = scene_with_cube();
    let mut controller = GestureController::new().with_targets(Targets::single(cube));
    let mut input = GestureInput::new();

    let events = [
        WindowEvent::CursorMoved { device_id: device(), position: PhysicalPosition::new(50.0, 50.0) },
        WindowEvent::MouseInput { device_id: device(), state: ElementState::Pressed, button: MouseButton::Left },
        WindowEvent::CursorMoved { device_id: device(), position: PhysicalPosition::new(60.0, 50.0) },
        WindowEvent::MouseInput { device_id: device(), state: ElementState::Released, button: MouseButton::Left },
        // Moves after release do nothing
        WindowEvent::CursorMoved { device_id: device(), position: PhysicalPosition::new(90.0, 50.0) },
        WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::LineDelta(0.0, -1.0),
            phase: TouchPhase::Moved,
        },
    ];
    for event in &events {
        input.handle_window_event(&mut controller, &mut scene, event);
    }

    assert!((rotation(&scene, cube).y - 0.05).abs() < EPS);
    assert!((scene.camera.distance() - 10.5).abs() < EPS);
    assert_eq!(input.take_release(), Some(Release::Drag));
    assert_eq!(input.take_release(), None);
}

#[test]
fn test_window_touch_events_pinch() {
    let (mut scene, cube) = scene_with_cube();
    let mut controller = GestureController::new().with_targets(Targets::single(cube));
    let mut input = GestureInput::new();

    let events = [
        touch(1, TouchPhase::Started, 100.0, 100.0),
        touch(2, TouchPhase::Started, 140.0, 140.0),
        touch(2, TouchPhase::Moved, 170.0, 160.0),
        touch(1, TouchPhase::Ended, 100.0, 100.0),
        touch(2, TouchPhase::Moved, 200.0, 200.0),
        touch(2, TouchPhase::Ended, 200.0, 200.0),
    ];
    for event in &events {
        assert!(input.handle_window_event(&mut controller, &mut scene, event));
    }

    assert!((scene.camera.distance() - 9.5).abs() < EPS);
    // The leftover finger did not rotate anything
    assert_eq!(rotation(&scene, cube), Euler::IDENTITY);
    assert_eq!(input.take_release(), Some(Release::Drag));
    assert!(!controller.is_interaction_active());
}

#[test]
fn test_cursor_leaving_window_ends_drag() {
    let (mut scene, cube) = scene_with_cube();
    let mut controller = GestureController::new().with_targets(Targets::single(cube));
    let mut input = GestureInput::new();

    let events = [
        WindowEvent::CursorMoved { device_id: device(), position: PhysicalPosition::new(50.0, 50.0) },
        WindowEvent::MouseInput { device_id: device(), state: ElementState::Pressed, button: MouseButton::Left },
        WindowEvent::CursorMoved { device_id: device(), position: PhysicalPosition::new(60.0, 50.0) },
        WindowEvent::CursorLeft { device_id: device() },
    ];
    for event in &events {
        input.handle_window_event(&mut controller, &mut scene, event);
    }

    assert_eq!(input.take_release(), Some(Release::Drag));
    assert!(!controller.is_interaction_active());

    // Button is no longer held as far as the controller knows
    let back_in = WindowEvent::CursorMoved { device_id: device(), position: PhysicalPosition::new(90.0, 50.0) };
    assert!(!input.handle_window_event(&mut controller, &mut scene, &back_in));
    assert!((rotation(&scene, cube).y - 0.05).abs() < EPS);
    assert_eq!(input.take_release(), None);
}

#[test]
fn test_focus_loss_drops_open_gestures() {
    let (mut scene, cube) = scene_with_cube();
    let mut controller = GestureController::new().with_targets(Targets::single(cube));
    let mut input = GestureInput::new();

    let pinch = [
        touch(1, TouchPhase::Started, 100.0, 100.0),
        touch(2, TouchPhase::Started, 140.0, 140.0),
    ];
    for event in &pinch {
        input.handle_window_event(&mut controller, &mut scene, event);
    }
    assert!(controller.is_interaction_active());

    assert!(!input.handle_window_event(&mut controller, &mut scene, &WindowEvent::Focused(false)));
    assert!(!controller.is_interaction_active());

    // The stale pinch no longer blocks a fresh one-finger drag
    let drag = [
        touch(3, TouchPhase::Started, 10.0, 10.0),
        touch(3, TouchPhase::Moved, 20.0, 10.0),
    ];
    for event in &drag {
        input.handle_window_event(&mut controller, &mut scene, event);
    }
    assert!((rotation(&scene, cube).y - 0.05).abs() < EPS);
    assert_eq!(scene.camera.distance(), 10.0);
}
