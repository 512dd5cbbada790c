//! Wavescape - an animated procedural water surface
//!
//! A tessellated plane displaced and colored by a wave shader, viewed
//! through a damped orbit camera, with the wave parameters live-tunable
//! in a debug panel.

use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use wavescape::camera::OrbitCamera;
use wavescape::cli::Args;
use wavescape::frame::FrameClock;
use wavescape::mesh::WaterMesh;
use wavescape::panel::DebugPanel;
use wavescape::params::{RenderConfig, WaveParams};
use wavescape::rendering::{RenderSystem, Uniforms};

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    panel: Option<DebugPanel>,

    // Scene state
    params: WaveParams,
    camera: OrbitCamera,
    clock: FrameClock,

    // Configuration
    render_config: RenderConfig,
    panel_enabled: bool,
}

impl App {
    fn new(args: &Args) -> Self {
        let render_config = RenderConfig {
            surface_width: args.width,
            surface_height: args.height,
            ..RenderConfig::default()
        };

        Self {
            window: None,
            render_system: None,
            panel: None,
            params: WaveParams::default(),
            camera: OrbitCamera::new(),
            clock: FrameClock::new(),
            render_config,
            panel_enabled: !args.no_panel,
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        // Cooperative loop: exactly one redraw pending at a time
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Wavescape")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.surface_width,
                self.render_config.surface_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        let physical = window.inner_size();
        let surface_size = self
            .render_config
            .clamped_surface_size((physical.width, physical.height), window.scale_factor());
        self.render_config.surface_width = surface_size.0;
        self.render_config.surface_height = surface_size.1;

        let mesh = WaterMesh::new();
        let render_system =
            pollster::block_on(RenderSystem::new(Arc::clone(&window), &mesh, surface_size))
                .unwrap();

        if self.panel_enabled {
            self.panel = Some(DebugPanel::new(
                &window,
                &render_system.device,
                render_system.surface_format(),
            ));
        }

        log::info!(
            "Wavescape running at {}x{} ({} vertices); Esc quits, H toggles the panel",
            surface_size.0,
            surface_size.1,
            mesh.vertices.len()
        );

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // The panel sees events first; consumed ones never reach the camera
        let panel_consumed = match (&mut self.panel, &self.window) {
            (Some(panel), Some(window)) => panel.on_window_event(window, &event),
            _ => false,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape => event_loop.exit(),
                KeyCode::KeyH if !panel_consumed => {
                    if let Some(panel) = &mut self.panel {
                        panel.toggle();
                    }
                }
                _ => {}
            },
            WindowEvent::Resized(size) => {
                self.resize((size.width, size.height));
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.resize((size.width, size.height));
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } if !panel_consumed => match state {
                ElementState::Pressed => self.camera.begin_drag(),
                ElementState::Released => self.camera.end_drag(),
            },
            WindowEvent::CursorMoved { position, .. } if !panel_consumed => {
                self.camera.on_cursor_move(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } if !panel_consumed => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
                };
                self.camera.on_scroll(lines);
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

impl App {
    /// Apply a window resize: clamp by pixel ratio, reconfigure the
    /// surface, and update the camera aspect before the next render.
    fn resize(&mut self, physical: (u32, u32)) {
        let Some(window) = &self.window else {
            return;
        };
        let Some(render_system) = &mut self.render_system else {
            return;
        };

        let (width, height) = self
            .render_config
            .clamped_surface_size(physical, window.scale_factor());
        self.render_config.surface_width = width;
        self.render_config.surface_height = height;
        render_system.resize(width, height);
    }

    /// Render a single frame: advance the clock, damp the camera, run the
    /// panel, upload uniforms, then draw.
    fn render_frame(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let Some(render_system) = &self.render_system else {
            return;
        };

        let tick = self.clock.tick();
        self.camera.update(tick.dt_s);

        // Panel edits land before the uniform snapshot below
        let panel_frame = self
            .panel
            .as_mut()
            .and_then(|panel| panel.run(&window, &mut self.params));

        let view_proj = self.camera.view_proj(&self.render_config);
        let uniforms = Uniforms::new(view_proj, &self.params, tick.elapsed_s);
        render_system.update_uniforms(&uniforms);

        let panel_pass = self.panel.as_mut().zip(panel_frame);
        match render_system.render(panel_pass) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                let size = window.inner_size();
                self.resize((size.width, size.height));
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Dropped frame: {:?}", e),
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut app = App::new(&args);
    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut app);
}
