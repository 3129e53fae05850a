//! Area-weighted vertex normals

use glam::Vec3;

use super::vertex_store::VertexStore;

/// Normal of triangle `(v0, v1, v2)` scaled to the triangle's area
#[inline]
pub fn face_area_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    0.5 * (v1 - v0).cross(v2 - v0)
}

/// Sum each face's area normal into its three vertices, then normalize.
///
/// Vertices with a zero accumulated normal (no incident faces, or only
/// degenerate ones) keep the zero vector. Returns how many there were.
pub fn estimate_normals(store: &mut VertexStore, faces: &[u32]) -> usize {
    let mut accum = vec![Vec3::ZERO; store.len()];

    for face in faces.chunks_exact(3) {
        let [i0, i1, i2] = [face[0] as usize, face[1] as usize, face[2] as usize];
        let n = face_area_normal(store.vertex(i0), store.vertex(i1), store.vertex(i2));
        accum[i0] += n;
        accum[i1] += n;
        accum[i2] += n;
    }

    let mut degenerate = 0;
    for (i, sum) in accum.into_iter().enumerate() {
        let n = sum.normalize_or_zero();
        if n == Vec3::ZERO {
            degenerate += 1;
        }
        store.set_normal(i, n);
    }
    degenerate
}
