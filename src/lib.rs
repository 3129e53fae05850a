//! Faultline - fault-plane procedural terrain meshes

pub mod core;
pub mod math;
pub mod terrain;
