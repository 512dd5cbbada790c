//! Debug parameter panel (egui overlay).
//!
//! Exposes the wave tunables for live editing. Writes go through the
//! clamping setters on `WaveParams` between frames, on the same thread as
//! the render loop, so the next frame's uniform snapshot always observes
//! the committed values.

use egui_wgpu::ScreenDescriptor;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::params::{WaveParams, ELEVATION_RANGE, FREQUENCY_RANGE, PANEL_STEP, SPEED_RANGE};

/// Per-frame panel output, handed to the render pass.
pub struct PanelFrame {
    pub textures_delta: egui::TexturesDelta,
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub pixels_per_point: f32,
}

/// egui context + winit/wgpu glue for the debug panel.
pub struct DebugPanel {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    visible: bool,
}

impl DebugPanel {
    pub fn new(
        window: &Window,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1, false);

        Self {
            ctx,
            state,
            renderer,
            visible: true,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Feed a window event to egui. Returns true when egui consumed it
    /// (pointer over the panel etc.), in which case it must not reach the
    /// camera controls.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run the panel UI for this frame and tessellate its output.
    ///
    /// Returns `None` when the panel is hidden (nothing to paint).
    pub fn run(&mut self, window: &Window, params: &mut WaveParams) -> Option<PanelFrame> {
        if !self.visible {
            return None;
        }

        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| {
            draw_controls(ctx, params);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        Some(PanelFrame {
            textures_delta: full_output.textures_delta,
            paint_jobs,
            pixels_per_point: full_output.pixels_per_point,
        })
    }

    /// Paint the tessellated panel over the water pass.
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        surface_size: (u32, u32),
        frame: PanelFrame,
    ) {
        for (id, image_delta) in &frame.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let screen_desc = ScreenDescriptor {
            size_in_pixels: [surface_size.0, surface_size.1],
            pixels_per_point: frame.pixels_per_point,
        };
        self.renderer
            .update_buffers(device, queue, encoder, &frame.paint_jobs, &screen_desc);

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Panel Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();

            self.renderer
                .render(&mut render_pass, &frame.paint_jobs, &screen_desc);
        }

        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

/// The panel contents: one slider per wave scalar, two color pickers.
/// Slider ranges are the same constants the setters clamp to.
fn draw_controls(ctx: &egui::Context, params: &mut WaveParams) {
    egui::Window::new("Waves")
        .default_width(300.0)
        .resizable(false)
        .show(ctx, |ui| {
            let mut elevation = params.elevation();
            if ui
                .add(
                    egui::Slider::new(&mut elevation, ELEVATION_RANGE)
                        .step_by(PANEL_STEP)
                        .text("Elevation"),
                )
                .changed()
            {
                params.set_elevation(elevation);
            }

            let [mut freq_x, mut freq_y] = params.frequency();
            if ui
                .add(
                    egui::Slider::new(&mut freq_x, FREQUENCY_RANGE)
                        .step_by(PANEL_STEP)
                        .text("Frequency X"),
                )
                .changed()
            {
                params.set_frequency_x(freq_x);
            }
            if ui
                .add(
                    egui::Slider::new(&mut freq_y, FREQUENCY_RANGE)
                        .step_by(PANEL_STEP)
                        .text("Frequency Y"),
                )
                .changed()
            {
                params.set_frequency_y(freq_y);
            }

            let mut speed = params.speed();
            if ui
                .add(
                    egui::Slider::new(&mut speed, SPEED_RANGE)
                        .step_by(PANEL_STEP)
                        .text("Speed"),
                )
                .changed()
            {
                params.set_speed(speed);
            }

            ui.separator();

            let mut depth = params.depth_color();
            ui.horizontal(|ui| {
                if ui.color_edit_button_rgb(&mut depth).changed() {
                    params.set_depth_color(depth);
                }
                ui.label("Depth color");
            });

            let mut surface = params.surface_color();
            ui.horizontal(|ui| {
                if ui.color_edit_button_rgb(&mut surface).changed() {
                    params.set_surface_color(surface);
                }
                ui.label("Surface color");
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_run_headless() {
        // The UI builds against a bare context, no window or GPU needed
        let ctx = egui::Context::default();
        let mut params = WaveParams::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            draw_controls(ctx, &mut params);
        });
        assert!(!output.shapes.is_empty());
        // An untouched UI pass leaves the parameters alone
        assert_eq!(params, WaveParams::default());
    }
}
