//! Height bounds over a vertex set

use crate::math::Aabb;
use super::vertex_store::VertexStore;

/// Minimum and maximum `z` over all vertices, with both running values
/// starting at 0.
///
/// Because of the zero seed, an all-positive mesh reports `min = 0` and an
/// all-negative mesh reports `max = 0`. Renderers shading by height rely on
/// this range, so it is kept as is; use [`height_range`] for the exact span.
pub fn min_max_z(store: &VertexStore) -> (f32, f32) {
    store
        .vertices()
        .fold((0.0f32, 0.0f32), |(lo, hi), v| (lo.min(v.z), hi.max(v.z)))
}

/// Exact `(min, max)` of `z`, seeded from the first vertex. `None` when empty.
pub fn height_range(store: &VertexStore) -> Option<(f32, f32)> {
    let mut heights = store.vertices().map(|v| v.z);
    let first = heights.next()?;
    Some(heights.fold((first, first), |(lo, hi), z| (lo.min(z), hi.max(z))))
}

/// 3-D bounding box of all vertex positions
pub fn aabb(store: &VertexStore) -> Option<Aabb> {
    Aabb::from_points(store.vertices())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn store_with_heights(heights: &[f32]) -> VertexStore {
        let mut store = VertexStore::zeroed(heights.len());
        for (i, &z) in heights.iter().enumerate() {
            store.set_vertex(i, Vec3::new(i as f32, 0.0, z));
        }
        store
    }

    #[test]
    fn test_min_max_mixed_heights() {
        let store = store_with_heights(&[0.3, -0.2, 0.1, 0.05]);
        assert_eq!(min_max_z(&store), (-0.2, 0.3));
        assert_eq!(height_range(&store), Some((-0.2, 0.3)));
    }

    #[test]
    fn test_min_max_flat() {
        let store = store_with_heights(&[0.0; 9]);
        assert_eq!(min_max_z(&store), (0.0, 0.0));
    }

    #[test]
    fn test_min_max_zero_seed_all_positive() {
        let store = store_with_heights(&[0.5, 0.25, 0.75]);
        assert_eq!(min_max_z(&store), (0.0, 0.75));
        assert_eq!(height_range(&store), Some((0.25, 0.75)));
    }

    #[test]
    fn test_min_max_zero_seed_all_negative() {
        let store = store_with_heights(&[-0.5, -0.25]);
        assert_eq!(min_max_z(&store), (-0.5, 0.0));
        assert_eq!(height_range(&store), Some((-0.5, -0.25)));
    }

    #[test]
    fn test_empty_store() {
        let store = VertexStore::default();
        assert_eq!(min_max_z(&store), (0.0, 0.0));
        assert_eq!(height_range(&store), None);
        assert_eq!(aabb(&store), None);
    }

    #[test]
    fn test_aabb() {
        let store = store_with_heights(&[1.0, -1.0, 0.5]);
        let bounds = aabb(&store).unwrap();
        assert_eq!(bounds.min, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(bounds.max, Vec3::new(2.0, 0.0, 1.0));
    }
}
