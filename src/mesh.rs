//! Water plane mesh: a flat, fixed-subdivision XZ grid.
//!
//! The geometry is built once at startup and never touched again; all
//! visible motion comes from the vertex stage displacing y in the shader.

use bytemuck::{Pod, Zeroable};

/// Side length of the water plane in world units
pub const PLANE_SIZE: f32 = 2.0;

/// Segments per side (129x129 vertices)
pub const PLANE_SEGMENTS: usize = 128;

/// Vertex data for the water mesh (position only; the shader derives
/// everything else from it)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Flat tessellated plane centered on the origin, y = 0.
pub struct WaterMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl WaterMesh {
    pub fn new() -> Self {
        Self::with_dimensions(PLANE_SIZE, PLANE_SEGMENTS)
    }

    /// Build a `size` x `size` plane with `segments` subdivisions per side.
    pub fn with_dimensions(size: f32, segments: usize) -> Self {
        let half = size / 2.0;
        let step = size / segments as f32;

        let mut vertices = Vec::with_capacity((segments + 1) * (segments + 1));
        for z in 0..=segments {
            for x in 0..=segments {
                vertices.push(Vertex {
                    position: [x as f32 * step - half, 0.0, z as f32 * step - half],
                });
            }
        }

        // Triangle indices, counter-clockwise winding
        let mut indices = Vec::with_capacity(segments * segments * 6);
        for z in 0..segments {
            for x in 0..segments {
                let top_left = (z * (segments + 1) + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * (segments + 1) + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self { vertices, indices }
    }
}

impl Default for WaterMesh {
    fn default() -> Self {
        Self::new()
    }
}
