//! Parameter definitions with documented ranges and clamping setters.
//!
//! The wave parameters are the one piece of shared mutable state in the
//! program: the debug panel writes them between frames, the uniform upload
//! reads them once per frame. Ranges are enforced here, at the write point,
//! so the per-frame path never re-validates.

use std::ops::RangeInclusive;

/// Valid range for wave elevation (displacement amplitude, world units)
pub const ELEVATION_RANGE: RangeInclusive<f32> = 0.0..=1.0;

/// Valid range for wave frequency, per axis (radians per world unit)
pub const FREQUENCY_RANGE: RangeInclusive<f32> = 0.0..=10.0;

/// Valid range for wave speed (phase advance per second)
pub const SPEED_RANGE: RangeInclusive<f32> = 0.0..=10.0;

/// Slider step used by the debug panel for all scalar parameters
pub const PANEL_STEP: f64 = 0.001;

/// Wave shader parameters, live-tunable from the debug panel.
///
/// Numeric fields are private: all writes go through the clamping setters,
/// so a stored value is always inside its documented range. Reads between
/// frames observe the latest committed value (last-writer-wins).
#[derive(Debug, Clone, PartialEq)]
pub struct WaveParams {
    /// Displacement amplitude (world units)
    elevation: f32,

    /// Spatial frequency along the plane's x and z axes
    frequency: [f32; 2],

    /// Time-based phase advance multiplier
    speed: f32,

    /// Blend color at wave troughs (linear RGB)
    depth_color: [f32; 3],

    /// Blend color at wave crests (linear RGB)
    surface_color: [f32; 3],
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            elevation: 0.2,
            frequency: [4.0, 1.5],
            speed: 0.75,
            depth_color: [0.0, 0.0, 1.0],
            surface_color: [0.533, 0.533, 1.0],
        }
    }
}

impl WaveParams {
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn frequency(&self) -> [f32; 2] {
        self.frequency
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn depth_color(&self) -> [f32; 3] {
        self.depth_color
    }

    pub fn surface_color(&self) -> [f32; 3] {
        self.surface_color
    }

    pub fn set_elevation(&mut self, value: f32) {
        self.elevation = clamp_to(value, &ELEVATION_RANGE);
    }

    pub fn set_frequency_x(&mut self, value: f32) {
        self.frequency[0] = clamp_to(value, &FREQUENCY_RANGE);
    }

    pub fn set_frequency_y(&mut self, value: f32) {
        self.frequency[1] = clamp_to(value, &FREQUENCY_RANGE);
    }

    pub fn set_speed(&mut self, value: f32) {
        self.speed = clamp_to(value, &SPEED_RANGE);
    }

    pub fn set_depth_color(&mut self, rgb: [f32; 3]) {
        self.depth_color = clamp_rgb(rgb);
    }

    pub fn set_surface_color(&mut self, rgb: [f32; 3]) {
        self.surface_color = clamp_rgb(rgb);
    }
}

/// Clamp a value into a range, mapping NaN to the range minimum.
fn clamp_to(value: f32, range: &RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}

fn clamp_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [
        clamp_to(rgb[0], &(0.0..=1.0)),
        clamp_to(rgb[1], &(0.0..=1.0)),
        clamp_to(rgb[2], &(0.0..=1.0)),
    ]
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Render surface width (physical pixels, after pixel-ratio clamp)
    pub surface_width: u32,

    /// Render surface height (physical pixels, after pixel-ratio clamp)
    pub surface_height: u32,

    /// Field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Device pixel ratio cap; HiDPI displays above this render downscaled
    pub max_pixel_ratio: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            surface_width: 1280,
            surface_height: 720,
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 100.0,
            max_pixel_ratio: 2.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.surface_width as f32 / self.surface_height.max(1) as f32
    }

    /// Clamp a window's physical size by the pixel-ratio cap.
    ///
    /// A window on a display with scale factor above `max_pixel_ratio`
    /// renders at a proportionally smaller surface. Never returns zero.
    pub fn clamped_surface_size(&self, physical: (u32, u32), scale_factor: f64) -> (u32, u32) {
        let scale = if scale_factor > self.max_pixel_ratio && scale_factor > 0.0 {
            self.max_pixel_ratio / scale_factor
        } else {
            1.0
        };
        let width = ((physical.0 as f64 * scale).round() as u32).max(1);
        let height = ((physical.1 as f64 * scale).round() as u32).max(1);
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let params = WaveParams::default();
        assert_eq!(params.elevation(), 0.2);
        assert_eq!(params.frequency(), [4.0, 1.5]);
        assert_eq!(params.speed(), 0.75);
        assert_eq!(params.depth_color(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_setters_clamp_to_range() {
        let mut params = WaveParams::default();

        params.set_elevation(2.5);
        assert_eq!(params.elevation(), 1.0);

        params.set_elevation(-0.1);
        assert_eq!(params.elevation(), 0.0);

        params.set_frequency_x(100.0);
        params.set_frequency_y(-3.0);
        assert_eq!(params.frequency(), [10.0, 0.0]);

        params.set_speed(42.0);
        assert_eq!(params.speed(), 10.0);
    }

    #[test]
    fn test_nan_input_maps_to_range_minimum() {
        let mut params = WaveParams::default();
        params.set_elevation(f32::NAN);
        assert_eq!(params.elevation(), 0.0);
        params.set_speed(f32::NAN);
        assert_eq!(params.speed(), 0.0);
    }

    #[test]
    fn test_color_components_clamped() {
        let mut params = WaveParams::default();
        params.set_surface_color([1.5, -0.2, 0.5]);
        assert_eq!(params.surface_color(), [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_last_writer_wins() {
        let mut params = WaveParams::default();
        params.set_elevation(0.3);
        params.set_elevation(0.6);
        assert_eq!(params.elevation(), 0.6);
    }

    #[test]
    fn test_clamped_surface_size_caps_pixel_ratio() {
        let config = RenderConfig::default();

        // Scale factor at or below the cap: size unchanged
        assert_eq!(config.clamped_surface_size((1280, 720), 1.0), (1280, 720));
        assert_eq!(config.clamped_surface_size((2560, 1440), 2.0), (2560, 1440));

        // Above the cap: downscaled to the 2x equivalent
        assert_eq!(config.clamped_surface_size((3840, 2160), 3.0), (2560, 1440));
    }

    #[test]
    fn test_clamped_surface_size_never_zero() {
        let config = RenderConfig::default();
        assert_eq!(config.clamped_surface_size((0, 0), 1.0), (1, 1));
    }
}
