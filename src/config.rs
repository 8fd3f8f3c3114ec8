//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`OBJCTL_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use objctl_core::{Camera, Object, ObjectKey, Scene, Transform, Vec3};
use objctl_input::{ControlError, ControllerSettings, GestureController, Targets};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Gesture controller settings
    #[serde(default)]
    pub controls: ControllerSettings,
    /// Objects and camera
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`OBJCTL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // OBJCTL_CONTROLS__ZOOM_SPEED=1.0 -> controls.zoom_speed = 1.0
        figment = figment.merge(Env::prefixed("OBJCTL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Build a controller from the `controls` section
    pub fn build_controller(&self) -> Result<GestureController<ObjectKey>, ConfigError> {
        Ok(GestureController::from_settings(self.controls.clone())?)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "objctl - gesture inspector".to_string(),
            width: 960,
            height: 640,
        }
    }
}

/// One object placed in the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectConfig {
    /// Unique name, used to pick targets
    pub name: String,
    /// Position [x, y, z]
    #[serde(default)]
    pub position: [f32; 3],
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Starting dolly distance of the camera
    pub camera_distance: f32,
    /// Objects to create
    pub objects: Vec<ObjectConfig>,
    /// Names of the objects gestures rotate (empty = every object)
    #[serde(default)]
    pub targets: Vec<String>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera_distance: 10.0,
            objects: vec![ObjectConfig {
                name: "model".to_string(),
                position: [0.0, 0.0, 0.0],
            }],
            targets: Vec::new(),
        }
    }
}

impl SceneConfig {
    /// Create the scene and resolve the target names
    ///
    /// A single named target becomes [`Targets::Single`], anything else a group.
    pub fn build(&self) -> Result<(Scene, Targets<ObjectKey>), ConfigError> {
        let mut scene = Scene::new().with_camera(Camera::at_distance(self.camera_distance));
        for object in &self.objects {
            let transform = Transform::from_position(Vec3::from(object.position));
            scene.add_object(Object::with_transform(transform).with_name(object.name.as_str()));
        }

        let targets = if self.targets.is_empty() {
            Targets::group(scene.keys())
        } else {
            let keys = self
                .targets
                .iter()
                .map(|name| {
                    scene
                        .get_by_name(name)
                        .map(|(key, _)| key)
                        .ok_or_else(|| ConfigError::new(format!("unknown target object '{}'", name)))
                })
                .collect::<Result<Vec<_>, _>>()?;
            match keys.as_slice() {
                [single] => Targets::single(*single),
                _ => Targets::Group(keys),
            }
        };

        Ok((scene, targets))
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<ControlError> for ConfigError {
    fn from(e: ControlError) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
