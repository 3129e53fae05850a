//! Flat vertex position/normal storage
//!
//! Vertex `i` occupies `[3i, 3i + 3)` in both the position and normal buffers,
//! which is the layout a renderer uploads directly as vertex attributes.

use glam::Vec3;

/// Paired position and normal buffers addressed by vertex index.
///
/// Every accessor takes `index < len()` as a precondition. Violating it panics
/// through slice indexing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexStore {
    positions: Vec<f32>,
    normals: Vec<f32>,
}

impl VertexStore {
    /// Create a store of `count` vertices, all positions and normals zeroed
    pub fn zeroed(count: usize) -> Self {
        Self {
            positions: vec![0.0; count * 3],
            normals: vec![0.0; count * 3],
        }
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Write the position of vertex `index`
    #[inline]
    pub fn set_vertex(&mut self, index: usize, v: Vec3) {
        debug_assert!(index < self.len(), "vertex {} out of range ({})", index, self.len());
        self.positions[index * 3..index * 3 + 3].copy_from_slice(&v.to_array());
    }

    /// Read the position of vertex `index`
    #[inline]
    pub fn vertex(&self, index: usize) -> Vec3 {
        debug_assert!(index < self.len(), "vertex {} out of range ({})", index, self.len());
        Vec3::from_slice(&self.positions[index * 3..index * 3 + 3])
    }

    #[inline]
    pub fn set_normal(&mut self, index: usize, n: Vec3) {
        debug_assert!(index < self.len(), "vertex {} out of range ({})", index, self.len());
        self.normals[index * 3..index * 3 + 3].copy_from_slice(&n.to_array());
    }

    #[inline]
    pub fn normal(&self, index: usize) -> Vec3 {
        debug_assert!(index < self.len(), "vertex {} out of range ({})", index, self.len());
        Vec3::from_slice(&self.normals[index * 3..index * 3 + 3])
    }

    /// Iterate over all vertex positions in index order
    pub fn vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions.chunks_exact(3).map(Vec3::from_slice)
    }

    /// Flat position buffer, length `3 * len()`
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat normal buffer, length `3 * len()`
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Consume the store, returning `(positions, normals)`
    pub fn into_buffers(self) -> (Vec<f32>, Vec<f32>) {
        (self.positions, self.normals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_store() {
        let store = VertexStore::zeroed(4);
        assert_eq!(store.len(), 4);
        assert_eq!(store.positions().len(), 12);
        assert_eq!(store.normals().len(), 12);
        assert!(store.vertices().all(|v| v == Vec3::ZERO));
    }

    #[test]
    fn test_set_and_get_vertex() {
        let mut store = VertexStore::zeroed(3);
        store.set_vertex(1, Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(store.vertex(1), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(store.vertex(0), Vec3::ZERO);
        assert_eq!(store.vertex(2), Vec3::ZERO);
        // Flat layout: vertex i lives at [3i, 3i + 3)
        assert_eq!(&store.positions()[3..6], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_normals_are_independent_of_positions() {
        let mut store = VertexStore::zeroed(2);
        store.set_vertex(0, Vec3::new(5.0, 5.0, 5.0));
        store.set_normal(0, Vec3::Z);

        assert_eq!(store.normal(0), Vec3::Z);
        assert_eq!(store.vertex(0), Vec3::splat(5.0));
        assert_eq!(store.normal(1), Vec3::ZERO);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        let store = VertexStore::zeroed(2);
        let _ = store.vertex(2);
    }

    #[test]
    fn test_into_buffers() {
        let mut store = VertexStore::zeroed(1);
        store.set_vertex(0, Vec3::new(0.5, -0.5, 0.25));
        store.set_normal(0, Vec3::Y);
        let (positions, normals) = store.into_buffers();
        assert_eq!(positions, vec![0.5, -0.5, 0.25]);
        assert_eq!(normals, vec![0.0, 1.0, 0.0]);
    }
}
