//! Window management system
//!
//! Handles window creation and the title line that reports gesture state.

use winit::{event_loop::ActiveEventLoop, window::Window};

use crate::config::WindowConfig;
use objctl_math::Euler;

/// Owns the inspector window
pub struct WindowSystem {
    window: Window,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| WindowError::CreationFailed(e.to_string()))?;

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Update window title with rotation and camera distance
    pub fn update_title(&self, rotation: Euler, distance: f32, active: bool) {
        self.window.set_title(&format_title(&self.base_title, rotation, distance, active));
    }
}

/// Title line: rotation in degrees, dolly distance, and whether a gesture is open
fn format_title(base: &str, rotation: Euler, distance: f32, active: bool) -> String {
    let [x, y, _] = rotation.to_degrees();
    format!(
        "{} - tilt {:.1}\u{b0} spin {:.1}\u{b0} distance {:.2}{}",
        base,
        x,
        y,
        distance,
        if active { " [gesture]" } else { "" }
    )
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
