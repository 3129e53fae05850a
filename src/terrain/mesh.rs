//! Finished terrain mesh handed to a renderer

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::math::Aabb;
use super::bounds;
use super::grid::GridSpec;
use super::vertex_store::VertexStore;

/// Interleaved vertex layout for GPU upload.
/// Must match the vertex input of the terrain shader.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Generated terrain: positions, normals, triangle and wireframe indices.
///
/// Immutable once built by [`TerrainGenerator`](super::TerrainGenerator).
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    grid: GridSpec,
    vertices: VertexStore,
    faces: Vec<u32>,
    edges: Vec<u32>,
}

impl TerrainMesh {
    pub(crate) fn from_parts(
        grid: GridSpec,
        vertices: VertexStore,
        faces: Vec<u32>,
        edges: Vec<u32>,
    ) -> Self {
        debug_assert_eq!(vertices.len(), grid.num_vertices());
        debug_assert_eq!(faces.len(), grid.num_faces() * 3);
        debug_assert_eq!(edges.len(), grid.num_edges() * 2);
        Self { grid, vertices, faces, edges }
    }

    /// Grid the mesh was built on
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len() / 3
    }

    /// Wireframe edges, counted with duplicates
    pub fn num_edges(&self) -> usize {
        self.edges.len() / 2
    }

    /// Position of vertex `index`. Requires `index < num_vertices()`.
    pub fn vertex(&self, index: usize) -> Vec3 {
        self.vertices.vertex(index)
    }

    /// Unit normal of vertex `index`. Requires `index < num_vertices()`.
    pub fn normal(&self, index: usize) -> Vec3 {
        self.vertices.normal(index)
    }

    /// Flat `[x, y, z, ...]` buffer, `3 * num_vertices()` long
    pub fn positions(&self) -> &[f32] {
        self.vertices.positions()
    }

    /// Flat `[nx, ny, nz, ...]` buffer parallel to [`positions`](Self::positions)
    pub fn normals(&self) -> &[f32] {
        self.vertices.normals()
    }

    /// Triangle-list indices, `3 * num_faces()` long
    pub fn face_indices(&self) -> &[u32] {
        &self.faces
    }

    /// Line-list indices for wireframe drawing, `6 * num_faces()` long
    pub fn edge_indices(&self) -> &[u32] {
        &self.edges
    }

    /// Iterate over faces as index triples
    pub fn faces(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.faces.chunks_exact(3).map(|f| [f[0], f[1], f[2]])
    }

    /// Height range used for shading. Both ends start at 0, see [`bounds::min_max_z`].
    pub fn min_max_z(&self) -> (f32, f32) {
        bounds::min_max_z(&self.vertices)
    }

    /// Exact height range
    pub fn height_range(&self) -> Option<(f32, f32)> {
        bounds::height_range(&self.vertices)
    }

    pub fn aabb(&self) -> Option<Aabb> {
        bounds::aabb(&self.vertices)
    }

    /// Positions and normals interleaved per vertex
    pub fn interleaved_vertices(&self) -> Vec<TerrainVertex> {
        self.positions()
            .chunks_exact(3)
            .zip(self.normals().chunks_exact(3))
            .map(|(p, n)| TerrainVertex {
                position: [p[0], p[1], p[2]],
                normal: [n[0], n[1], n[2]],
            })
            .collect()
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.positions())
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.normals())
    }

    pub fn face_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.faces)
    }

    pub fn edge_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::grid::triangulate;
    use crate::terrain::normals::estimate_normals;

    fn flat_mesh(div: u32) -> TerrainMesh {
        let grid = GridSpec::new(div, -1.0, 1.0, -1.0, 1.0);
        let mut tri = triangulate(&grid);
        estimate_normals(&mut tri.vertices, &tri.faces);
        TerrainMesh::from_parts(grid, tri.vertices, tri.faces, tri.edges)
    }

    #[test]
    fn test_mesh_counts() {
        let mesh = flat_mesh(3);
        assert_eq!(mesh.num_vertices(), 16);
        assert_eq!(mesh.num_faces(), 18);
        assert_eq!(mesh.num_edges(), 54);
        assert_eq!(mesh.positions().len(), 48);
        assert_eq!(mesh.normals().len(), 48);
        assert_eq!(mesh.face_indices().len(), 54);
        assert_eq!(mesh.edge_indices().len(), 108);
        assert_eq!(mesh.faces().count(), 18);
    }

    #[test]
    fn test_interleaved_vertices() {
        let mesh = flat_mesh(2);
        let interleaved = mesh.interleaved_vertices();
        assert_eq!(interleaved.len(), 9);
        assert_eq!(interleaved[0].position, [-1.0, -1.0, 0.0]);
        assert_eq!(interleaved[4].position, [0.0, 0.0, 0.0]);
        assert!((interleaved[4].normal[2] - 1.0).abs() < 1e-6);
        assert_eq!(std::mem::size_of::<TerrainVertex>(), 24);
    }

    #[test]
    fn test_byte_views() {
        let mesh = flat_mesh(2);
        assert_eq!(mesh.position_bytes().len(), 9 * 3 * 4);
        assert_eq!(mesh.normal_bytes().len(), 9 * 3 * 4);
        assert_eq!(mesh.face_bytes().len(), 8 * 3 * 4);
        assert_eq!(mesh.edge_bytes().len(), 24 * 2 * 4);
        let first: &[u32] = bytemuck::cast_slice(&mesh.face_bytes()[..12]);
        assert_eq!(first, &[0, 1, 3]);
    }

    #[test]
    fn test_flat_bounds() {
        let mesh = flat_mesh(2);
        assert_eq!(mesh.min_max_z(), (0.0, 0.0));
        assert_eq!(mesh.height_range(), Some((0.0, 0.0)));
        let aabb = mesh.aabb().unwrap();
        assert_eq!(aabb.min, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 1.0, 0.0));
    }
}
