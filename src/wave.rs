//! Traveling-sine wave displacement and depth coloring.
//!
//! These are the CPU reference of the math in `shader.wgsl`: the vertex
//! stage displaces each grid point by `displacement`, the fragment stage
//! blends the two water colors by `color_blend_factor`. Keeping the same
//! functions host-side makes the boundary behavior testable without a GPU.

use crate::params::WaveParams;

/// Vertical displacement of the water surface at a planar position.
///
/// Two independent sine waves, one per axis, travel with `time * speed`
/// phase; their product scaled by elevation gives the height offset.
/// Output is always finite and within `[-elevation, elevation]`.
pub fn displacement(x: f32, z: f32, time_s: f32, params: &WaveParams) -> f32 {
    let [freq_x, freq_y] = params.frequency();
    let phase = time_s * params.speed();

    (x * freq_x + phase).sin() * (z * freq_y + phase).sin() * params.elevation()
}

/// Normalize a wave height into a `[0, 1]` blend factor.
///
/// Maps `-elevation` to 0 (trough) and `+elevation` to 1 (crest). A flat
/// wave (elevation 0) has no trough or crest to map between, so it blends
/// at the midpoint instead of dividing by zero.
pub fn color_blend_factor(height: f32, elevation: f32) -> f32 {
    if elevation <= 0.0 {
        return 0.5;
    }
    ((height + elevation) / (2.0 * elevation)).clamp(0.0, 1.0)
}

/// Final surface color for a wave height: depth color at troughs,
/// surface color at crests, linearly blended between.
pub fn shade(height: f32, params: &WaveParams) -> [f32; 3] {
    let t = color_blend_factor(height, params.elevation());
    let depth = params.depth_color();
    let surface = params.surface_color();
    [
        depth[0] + (surface[0] - depth[0]) * t,
        depth[1] + (surface[1] - depth[1]) * t,
        depth[2] + (surface[2] - depth[2]) * t,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displacement_zero_at_origin_at_t0() {
        // sin(0) = 0 on both axes, whatever the parameters
        let params = WaveParams::default();
        assert_eq!(displacement(0.0, 0.0, 0.0, &params), 0.0);
    }

    #[test]
    fn test_displacement_bounded_by_elevation() {
        let mut params = WaveParams::default();
        params.set_elevation(0.7);
        params.set_frequency_x(8.3);
        params.set_frequency_y(2.1);
        params.set_speed(5.0);

        for i in 0..2000 {
            let t = i as f32 * 0.037;
            let x = (i as f32 * 0.13).sin() * 1.0;
            let z = (i as f32 * 0.29).cos() * 1.0;
            let y = displacement(x, z, t, &params);
            assert!(y.is_finite(), "non-finite displacement at t={t}");
            assert!(
                y.abs() <= params.elevation() + f32::EPSILON,
                "displacement {y} exceeds elevation {} at t={t}",
                params.elevation()
            );
        }
    }

    #[test]
    fn test_displacement_degenerates_to_flat_surface() {
        let mut params = WaveParams::default();
        params.set_elevation(0.0);
        assert_eq!(displacement(0.3, -0.8, 12.5, &params), 0.0);

        // Zero frequency on both axes: sin(phase)^2 pattern, still bounded
        let mut params = WaveParams::default();
        params.set_frequency_x(0.0);
        params.set_frequency_y(0.0);
        let y = displacement(0.5, 0.5, 3.0, &params);
        assert!(y.is_finite());
        assert!(y.abs() <= params.elevation());
    }

    #[test]
    fn test_displacement_is_periodic_in_time() {
        let mut params = WaveParams::default();
        params.set_speed(1.0);
        let period = 2.0 * std::f32::consts::PI;
        let a = displacement(0.25, 0.5, 1.0, &params);
        let b = displacement(0.25, 0.5, 1.0 + period, &params);
        assert!((a - b).abs() < 1e-3);
    }

    #[test]
    fn test_blend_factor_maps_trough_and_crest() {
        assert_eq!(color_blend_factor(-0.2, 0.2), 0.0);
        assert_eq!(color_blend_factor(0.2, 0.2), 1.0);
        assert_eq!(color_blend_factor(0.0, 0.2), 0.5);
    }

    #[test]
    fn test_blend_factor_flat_wave_falls_back_to_midpoint() {
        // No divide-by-zero when elevation is 0
        let t = color_blend_factor(0.0, 0.0);
        assert_eq!(t, 0.5);
        assert!(color_blend_factor(0.1, 0.0).is_finite());
    }

    #[test]
    fn test_blend_factor_clamped_for_out_of_band_heights() {
        assert_eq!(color_blend_factor(1.0, 0.2), 1.0);
        assert_eq!(color_blend_factor(-1.0, 0.2), 0.0);
    }

    #[test]
    fn test_shade_blends_between_colors() {
        let params = WaveParams::default();
        let e = params.elevation();

        assert_eq!(shade(-e, &params), params.depth_color());
        assert_eq!(shade(e, &params), params.surface_color());

        let mid = shade(0.0, &params);
        let depth = params.depth_color();
        let surface = params.surface_color();
        for c in 0..3 {
            let expected = depth[c] + (surface[c] - depth[c]) * 0.5;
            assert!((mid[c] - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_shade_defined_at_zero_elevation() {
        let mut params = WaveParams::default();
        params.set_elevation(0.0);
        let color = shade(0.0, &params);
        assert!(color.iter().all(|c| c.is_finite()));
    }
}
