//! Fault-plane height displacement
//!
//! Each iteration drops a random vertical fault through the domain: a point
//! `p` on the ground plane plus a horizontal direction `n`. Vertices on the
//! `n` side of the fault are raised, the rest lowered, by a step attenuated
//! with distance from `p`. The step shrinks geometrically between iterations.
//!
//! Distance is measured from the vertex's current 3-D position, so height
//! already accumulated by earlier faults reduces the influence of later ones.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use super::grid::GridSpec;
use super::random::RandomSource;
use super::vertex_store::VertexStore;

/// Parameters of the fault-plane pass
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaultParams {
    /// Number of faults applied. 0 leaves the grid flat.
    pub iterations: u32,
    /// Height step of the first fault
    pub initial_delta: f32,
    /// Decay exponent `H`: the step is divided by `2^H` after each fault
    pub decay: f32,
}

impl Default for FaultParams {
    fn default() -> Self {
        Self {
            iterations: 100,
            initial_delta: 0.01,
            decay: 0.01,
        }
    }
}

impl FaultParams {
    /// Default step settings with displacement turned off
    pub fn disabled() -> Self {
        Self { iterations: 0, ..Default::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.initial_delta.is_finite() {
            return Err(Error::Generation(format!(
                "fault step must be finite, got {}", self.initial_delta
            )));
        }
        if !self.decay.is_finite() || self.decay < 0.0 {
            return Err(Error::Generation(format!(
                "fault decay must be finite and non-negative, got {}", self.decay
            )));
        }
        Ok(())
    }

    /// Factor applied to the step after every fault
    pub fn decay_factor(&self) -> f32 {
        1.0 / 2f32.powf(self.decay)
    }
}

/// Falloff weight `(1 - (dist / radius)^2)^2`.
///
/// In `[0, 1]` whenever `dist <= radius`.
#[inline]
pub fn falloff(dist: f32, radius: f32) -> f32 {
    let t = dist / radius;
    let w = 1.0 - t * t;
    w * w
}

/// One vertical fault: a point on the ground plane and a horizontal direction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaultPlane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl FaultPlane {
    /// Random fault through the grid's domain
    pub fn sample<R: RandomSource + ?Sized>(grid: &GridSpec, rng: &mut R) -> Self {
        let px = rng.uniform(grid.min_x, grid.max_x);
        let py = rng.uniform(grid.min_y, grid.max_y);
        let normal = rng.unit_vector().with_z(0.0);
        Self {
            point: Vec3::new(px, py, 0.0),
            normal,
        }
    }

    /// Whether `b` lies strictly on the raised side. Points on the plane are lowered.
    #[inline]
    pub fn raises(&self, b: Vec3) -> bool {
        (b - self.point).dot(self.normal) > 0.0
    }
}

/// Sculpts vertex heights with a sequence of random faults
#[derive(Clone, Debug)]
pub struct FaultPlaneDisplacer {
    params: FaultParams,
    /// Falloff radius, the domain diagonal
    radius: f32,
}

impl FaultPlaneDisplacer {
    pub fn new(params: FaultParams, grid: &GridSpec) -> Self {
        Self {
            params,
            radius: grid.diagonal(),
        }
    }

    /// Raise or lower every vertex of `store` across a single fault
    pub fn apply(&self, store: &mut VertexStore, plane: &FaultPlane, delta: f32) {
        for i in 0..store.len() {
            let mut b = store.vertex(i);
            let gr = falloff(b.distance(plane.point), self.radius);
            if plane.raises(b) {
                b.z += delta * gr;
            } else {
                b.z -= delta * gr;
            }
            store.set_vertex(i, b);
        }
    }

    /// Run every iteration in order; each fault sees the heights left by the previous one
    pub fn displace<R: RandomSource + ?Sized>(
        &self,
        store: &mut VertexStore,
        grid: &GridSpec,
        rng: &mut R,
    ) {
        let mut delta = self.params.initial_delta;
        let decay = self.params.decay_factor();

        for iteration in 0..self.params.iterations {
            let plane = FaultPlane::sample(grid, rng);
            log::trace!(
                "fault {}: p=({:.3}, {:.3}) n=({:.3}, {:.3}) delta={:.6}",
                iteration, plane.point.x, plane.point.y, plane.normal.x, plane.normal.y, delta
            );
            self.apply(store, &plane, delta);
            delta *= decay;
        }

        log::debug!(
            "Applied {} faults over {} vertices (falloff radius {:.4}, final step {:.6})",
            self.params.iterations, store.len(), self.radius, delta
        );
    }
}
