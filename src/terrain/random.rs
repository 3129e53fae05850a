//! Random sample source for fault placement

use std::f32::consts::TAU;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Uniform samples needed by the fault-plane displacer.
///
/// Implemented for every [`rand::Rng`], so any seeded generator can be
/// injected for reproducible terrain.
pub trait RandomSource {
    /// Uniform float in `[min, max)`. Requires `min < max`.
    fn uniform(&mut self, min: f32, max: f32) -> f32;

    /// Uniformly distributed direction on the unit sphere
    fn unit_vector(&mut self) -> Vec3;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        self.random_range(min..max)
    }

    fn unit_vector(&mut self) -> Vec3 {
        // Uniform z on [-1, 1] plus uniform azimuth is uniform on the sphere
        let azimuth = self.random_range(0.0..TAU);
        let z: f32 = self.random_range(-1.0..=1.0);
        let ring = (1.0 - z * z).max(0.0).sqrt();
        Vec3::new(azimuth.cos() * ring, azimuth.sin() * ring, z)
    }
}

/// Generator used for seeded terrain
pub fn seeded(seed: u64) -> Pcg64Mcg {
    Pcg64Mcg::seed_from_u64(seed)
}
