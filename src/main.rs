use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use glam::Mat4;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use firework_diorama::camera::{PanState, TrackballCamera};
use firework_diorama::cli::Cli;
use firework_diorama::core::{Clock, FpsCounter};
use firework_diorama::renderer::Renderer;
use firework_diorama::sim::{FireworkSimulation, GRAVITY};
use firework_diorama::{create_diorama_scene, types::CameraUniform};

// === Constants ===

const CAMERA_MOVE_SPEED: f32 = 10.0;
const CAMERA_ROTATE_SPEED: f32 = 2.0;
/// Radians of orbit per pixel of drag, before rotate_speed scaling
const MOUSE_SENSITIVITY: f32 = 0.0025;
/// Zoom distance per scroll line
const ZOOM_STEP: f32 = 5.0;
const FOV_Y_RADIANS: f32 = std::f32::consts::FRAC_PI_2;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 10_000.0;

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: TrackballCamera,
    pan_keys: PanState,
    simulation: FireworkSimulation,
    clock: Clock,
    fps: FpsCounter,
    cursor: (f64, f64),
    dragging: bool,
}

impl App {
    fn new(cli: Cli) -> Self {
        let simulation = FireworkSimulation::new(cli.spawn_chance, cli.burst_size);
        Self {
            cli,
            window: None,
            renderer: None,
            camera: TrackballCamera::new(CAMERA_MOVE_SPEED, CAMERA_ROTATE_SPEED),
            pan_keys: PanState::default(),
            simulation,
            clock: Clock::new(),
            fps: FpsCounter::new(),
            cursor: (0.0, 0.0),
            dragging: false,
        }
    }

    fn on_keyboard(&mut self, event: &KeyEvent) {
        self.pan_keys.process_keyboard(event);
    }

    fn on_mouse_move(&mut self, x: f64, y: f64) {
        let (dx, dy) = (x - self.cursor.0, y - self.cursor.1);
        self.cursor = (x, y);

        if self.dragging {
            self.camera.rotate_yaw(-(dx as f32) * MOUSE_SENSITIVITY);
            self.camera.rotate_pitch(-(dy as f32) * MOUSE_SENSITIVITY);
        }
    }

    fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match button {
            MouseButton::Left => self.dragging = state.is_pressed(),
            MouseButton::Right if state.is_pressed() => {
                self.camera.reset();
                info!("camera reset");
            }
            _ => {}
        }
    }

    fn on_mouse_scroll(&mut self, delta: MouseScrollDelta) {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => y * ZOOM_STEP,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.05,
        };
        self.camera.zoom(amount);
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();
        self.fps.frame(delta);

        if self.pan_keys.any() {
            self.camera.pan(self.pan_keys.direction());
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        let view = self.camera.view_matrix();
        let proj = Mat4::perspective_rh(FOV_Y_RADIANS, renderer.aspect_ratio(), Z_NEAR, Z_FAR);
        let camera_uniform = CameraUniform::new(view, proj, self.camera.eye_position());

        // Step-then-draw: the simulation queues one point per live particle
        renderer.begin_frame();
        self.simulation.update(GRAVITY, renderer);

        match renderer.render(&camera_uniform) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    renderer.resize(size.width, size.height);
                }
            }
            Err(e) => error!("render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Firework Diorama")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.cli.width,
                        self.cli.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let scene = create_diorama_scene();
            let renderer = match pollster::block_on(Renderer::new(window.clone(), &scene)) {
                Ok(r) => r,
                Err(e) => {
                    error!("failed to initialize renderer: {e}");
                    event_loop.exit();
                    return;
                }
            };

            self.clock.reset();
            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.on_keyboard(&event),
            WindowEvent::CursorMoved { position, .. } => {
                self.on_mouse_move(position.x, position.y);
            }
            WindowEvent::MouseInput { button, state, .. } => self.on_mouse_button(button, state),
            WindowEvent::MouseWheel { delta, .. } => self.on_mouse_scroll(delta),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    info!(
        "firework diorama - drag to orbit, wheel to zoom, WASD/RF to pan, right click to reset"
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
