//! Wavescape library - animated procedural water surface

pub mod camera;
pub mod cli;
pub mod frame;
pub mod mesh;
pub mod panel;
pub mod params;
pub mod rendering;
pub mod wave;
