//! Procedural terrain generation
//!
//! A flat triangulated grid is sculpted by random fault planes, then given
//! area-weighted vertex normals. See [`TerrainGenerator`].

pub mod vertex_store;
pub mod grid;
pub mod random;
pub mod fault;
pub mod normals;
pub mod bounds;
pub mod mesh;
pub mod export;

pub mod generator;
pub use generator::{TerrainGenerator, TerrainParams};

pub use fault::{FaultParams, FaultPlane, FaultPlaneDisplacer};
pub use grid::GridSpec;
pub use mesh::{TerrainMesh, TerrainVertex};
pub use random::RandomSource;
pub use vertex_store::VertexStore;
