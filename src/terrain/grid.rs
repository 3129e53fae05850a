//! Regular grid triangulation
//!
//! Builds the flat `(div + 1) x (div + 1)` vertex lattice, its triangle list
//! and the undeduplicated wireframe edge list. Connectivity is fixed once
//! built; only heights change afterwards.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use super::vertex_store::VertexStore;

/// Grid resolution and rectangular domain
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Subdivisions per axis (cells along x and along y)
    pub div: u32,
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            div: 64,
            min_x: -1.0,
            max_x: 1.0,
            min_y: -1.0,
            max_y: 1.0,
        }
    }
}

impl GridSpec {
    pub fn new(div: u32, min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self { div, min_x, max_x, min_y, max_y }
    }

    /// Reject grids that would produce a degenerate or unindexable mesh
    pub fn validate(&self) -> Result<()> {
        if self.div < 1 {
            return Err(Error::Generation(format!(
                "grid needs at least 1 subdivision per axis, got {}", self.div
            )));
        }
        let bounds = [self.min_x, self.max_x, self.min_y, self.max_y];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(Error::Generation(format!(
                "grid bounds must be finite, got x [{}, {}] y [{}, {}]",
                self.min_x, self.max_x, self.min_y, self.max_y
            )));
        }
        if self.min_x >= self.max_x {
            return Err(Error::Generation(format!(
                "min_x ({}) must be less than max_x ({})", self.min_x, self.max_x
            )));
        }
        if self.min_y >= self.max_y {
            return Err(Error::Generation(format!(
                "min_y ({}) must be less than max_y ({})", self.min_y, self.max_y
            )));
        }
        // Fault sampling needs a finite extent and falloff divides by the diagonal
        let extent = self.extent();
        let diagonal = self.diagonal();
        if !extent.is_finite() || !diagonal.is_finite() || diagonal <= 0.0 {
            return Err(Error::Generation(format!(
                "grid extent {} x {} (diagonal {}) is not representable",
                extent.x, extent.y, diagonal
            )));
        }
        // Index buffers are u32
        let side = self.div as u128 + 1;
        if side * side > u32::MAX as u128 {
            return Err(Error::Generation(format!(
                "{} subdivisions need {} vertices, more than a u32 index buffer can address",
                self.div, side * side
            )));
        }
        Ok(())
    }

    /// Vertices per row (and per column)
    pub fn side(&self) -> usize {
        self.div as usize + 1
    }

    pub fn num_vertices(&self) -> usize {
        self.side() * self.side()
    }

    pub fn num_faces(&self) -> usize {
        2 * self.div as usize * self.div as usize
    }

    /// Edges counted with duplicates, three per face
    pub fn num_edges(&self) -> usize {
        3 * self.num_faces()
    }

    /// Domain size along x and y
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.max_x - self.min_x, self.max_y - self.min_y)
    }

    /// Uniform grid spacing `(dx, dy)`
    pub fn spacing(&self) -> Vec2 {
        self.extent() / self.div as f32
    }

    /// Length of the domain diagonal
    pub fn diagonal(&self) -> f32 {
        self.extent().length()
    }

    /// Vertex index of lattice row `row` (y) and column `col` (x)
    #[inline]
    pub fn vertex_index(&self, row: usize, col: usize) -> usize {
        row * self.side() + col
    }

    /// Flat-lattice position of row `row`, column `col`
    #[inline]
    pub fn lattice_point(&self, row: usize, col: usize) -> Vec3 {
        let spacing = self.spacing();
        Vec3::new(
            self.min_x + spacing.x * col as f32,
            self.min_y + spacing.y * row as f32,
            0.0,
        )
    }
}

/// Flat mesh produced by [`triangulate`]
#[derive(Clone, Debug)]
pub struct Triangulation {
    pub vertices: VertexStore,
    /// Triangle list, three indices per face
    pub faces: Vec<u32>,
    /// Line list, two indices per edge
    pub edges: Vec<u32>,
}

/// Build the flat lattice and its connectivity.
///
/// `grid` is assumed valid (see [`GridSpec::validate`]).
pub fn triangulate(grid: &GridSpec) -> Triangulation {
    let vertices = build_vertices(grid);
    let faces = build_faces(grid);
    let edges = build_edges(&faces);
    Triangulation { vertices, faces, edges }
}

/// Row-major lattice with every `z = 0`
pub fn build_vertices(grid: &GridSpec) -> VertexStore {
    let mut store = VertexStore::zeroed(grid.num_vertices());
    for row in 0..grid.side() {
        for col in 0..grid.side() {
            store.set_vertex(grid.vertex_index(row, col), grid.lattice_point(row, col));
        }
    }
    store
}

/// Two triangles per cell. The winding is the same for every cell so that
/// face normals all point to +z on the flat grid.
pub fn build_faces(grid: &GridSpec) -> Vec<u32> {
    let div = grid.div;
    let mut faces = Vec::with_capacity(grid.num_faces() * 3);
    for row in 0..div {
        for col in 0..div {
            let idx = (div + 1) * row + col;
            faces.extend_from_slice(&[idx, idx + 1, idx + div + 1]);
            faces.extend_from_slice(&[idx + 1, idx + div + 2, idx + div + 1]);
        }
    }
    faces
}

/// Three edges per face in `(v0, v1), (v1, v2), (v2, v0)` order.
/// Edges shared by neighbouring faces appear once per face.
pub fn build_edges(faces: &[u32]) -> Vec<u32> {
    let mut edges = Vec::with_capacity(faces.len() * 2);
    for face in faces.chunks_exact(3) {
        let (a, b, c) = (face[0], face[1], face[2]);
        edges.extend_from_slice(&[a, b, b, c, c, a]);
    }
    edges
}
