//! Fault-plane terrain generation pipeline

use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::Result;
use super::fault::{FaultParams, FaultPlaneDisplacer};
use super::grid::{triangulate, GridSpec};
use super::mesh::TerrainMesh;
use super::normals::estimate_normals;
use super::random::{seeded, RandomSource};

/// Parameters controlling terrain generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Seed for fault placement when generating with [`TerrainGenerator::generate`]
    pub seed: u64,
    pub grid: GridSpec,
    pub fault: FaultParams,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: 12345,
            grid: GridSpec::default(),
            fault: FaultParams::default(),
        }
    }
}

impl TerrainParams {
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.fault.validate()
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Builds terrain meshes: triangulate, displace, then derive normals
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    params: TerrainParams,
}

impl TerrainGenerator {
    /// Create a generator, rejecting invalid grid or fault parameters
    pub fn new(params: TerrainParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Get terrain parameters
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Generate with a generator seeded from `params.seed`
    pub fn generate(&self) -> TerrainMesh {
        self.generate_with(&mut seeded(self.params.seed))
    }

    /// Generate drawing fault planes from `rng`
    pub fn generate_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> TerrainMesh {
        let grid = self.params.grid;
        let start = Instant::now();

        let mut tri = triangulate(&grid);
        log::info!(
            "Terrain: generated {} vertices, {} triangles, {} edges ({}x{} grid)",
            tri.vertices.len(), tri.faces.len() / 3, tri.edges.len() / 2, grid.div, grid.div
        );

        let displacer = FaultPlaneDisplacer::new(self.params.fault, &grid);
        displacer.displace(&mut tri.vertices, &grid, rng);
        log::info!("Terrain: sculpted with {} faults", self.params.fault.iterations);

        let degenerate = estimate_normals(&mut tri.vertices, &tri.faces);
        if degenerate > 0 {
            log::warn!("Terrain: {} vertices have no defined normal", degenerate);
        }
        log::info!("Terrain: generated normals in {:.1}ms total", start.elapsed().as_secs_f64() * 1000.0);

        TerrainMesh::from_parts(grid, tri.vertices, tri.faces, tri.edges)
    }
}
