//! objctl gesture inspector
//!
//! Opens a window, interprets mouse and touch gestures on it, and reports the
//! resulting object rotation and camera distance in the title bar and log.
//! Nothing is rendered; a host viewer would read the same scene state.

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use objctl::config::AppConfig;
use objctl::systems::WindowSystem;
use objctl_core::{Euler, ObjectKey, Scene};
use objctl_input::{GestureController, GestureInput};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    scene: Scene,
    controller: GestureController<ObjectKey>,
    input: GestureInput,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, objctl::config::ConfigError> {
        let (scene, targets) = config.scene.build()?;
        let controller = config.build_controller()?.with_targets(targets);

        log::info!(
            "Scene ready: {} objects, {} targeted, camera at {:.2}",
            scene.object_count(),
            controller.targets().len(),
            scene.camera.distance()
        );

        Ok(Self {
            config,
            window: None,
            scene,
            controller,
            input: GestureInput::new(),
        })
    }

    /// Rotation of the first target, shown in the title
    fn lead_rotation(&self) -> Euler {
        self.controller
            .targets()
            .iter()
            .find_map(|key| self.scene.get(key))
            .map(|object| object.transform.rotation)
            .unwrap_or_default()
    }

    fn refresh_title(&self) {
        if let Some(window) = &self.window {
            window.update_title(
                self.lead_rotation(),
                self.scene.camera.distance(),
                self.controller.is_interaction_active(),
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => {
                self.window = Some(window);
                self.refresh_title();
            }
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
                return;
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if key_event.state == ElementState::Pressed
                    && key_event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    event_loop.exit();
                }
                return;
            }
            _ => {}
        }

        let before = (self.lead_rotation(), self.scene.camera.distance());
        let consumed = self
            .input
            .handle_window_event(&mut self.controller, &mut self.scene, &event);
        if !consumed {
            return;
        }

        let after = (self.lead_rotation(), self.scene.camera.distance());
        if after != before {
            log::debug!(
                "Rotation {:?} deg, distance {:.2}",
                after.0.to_degrees(),
                after.1
            );
        }
        if let Some(release) = self.input.take_release() {
            log::info!("Gesture ended: {:?}", release);
        }
        self.refresh_title();
    }
}

fn main() {
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|config| config.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging; RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting objctl gesture inspector");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut app = App::new(config).unwrap_or_else(|e| {
        log::error!("{}", e);
        std::process::exit(1);
    });

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut app).expect("Event loop error");
}
