//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use objctl::config::AppConfig;
use objctl_input::{Axis, RotationAxes, Targets};
use serial_test::serial;

#[test]
#[serial]
fn test_default_file_matches_built_in_defaults() {
    std::env::remove_var("OBJCTL_CONTROLS__ZOOM_SPEED");

    let config = AppConfig::load_from("config").unwrap();
    let defaults = AppConfig::default();

    assert_eq!(config.window.title, defaults.window.title);
    assert_eq!(config.controls.rotation_axes, RotationAxes::HORIZONTAL);
    assert_eq!(config.controls.min_distance, defaults.controls.min_distance);
    assert!((config.controls.vertical_limit.to - defaults.controls.vertical_limit.to).abs() < 1e-6);
    assert_eq!(config.scene.objects.len(), 1);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("OBJCTL_CONTROLS__ZOOM_SPEED", "1.5");
    let config = AppConfig::load_from("config").unwrap();
    std::env::remove_var("OBJCTL_CONTROLS__ZOOM_SPEED");

    assert_eq!(config.controls.zoom_speed, 1.5);
    // Untouched keys keep their file values
    assert_eq!(config.controls.max_distance, 15.0);
}

#[test]
#[serial]
fn test_missing_directory_falls_back_to_defaults() {
    let config = AppConfig::load_from("does-not-exist").unwrap();
    assert_eq!(config.controls.zoom_speed, 0.5);
    assert_eq!(config.scene.camera_distance, 10.0);
}

#[test]
#[serial]
fn test_loaded_config_builds_working_controller() {
    let config = AppConfig::load_from("config").unwrap();
    let (scene, targets) = config.scene.build().unwrap();
    let (model, _) = scene.get_by_name("model").unwrap();

    let controller = config.build_controller().unwrap().with_targets(targets);

    assert_eq!(controller.targets(), &Targets::Group(vec![model]));
    assert!(controller.is_rotation_enabled(Axis::Horizontal));
    assert!(!controller.is_rotation_enabled(Axis::Vertical));
    assert!(controller.is_zoom_enabled());
}
