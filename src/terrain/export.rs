//! Mesh export: Wavefront OBJ and a JSON manifest
//!
//! OBJ output lists `v` then `vn` lines in vertex order and `f a//a b//b c//c`
//! faces with 1-based indices, so positions and normals share an index.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::json;

use crate::core::Result;
use super::generator::TerrainParams;
use super::mesh::TerrainMesh;

/// Write `mesh` as Wavefront OBJ
pub fn write_obj<W: Write>(mesh: &TerrainMesh, out: &mut W) -> Result<()> {
    let grid = mesh.grid();
    writeln!(out, "# faultline terrain {}x{} grid", grid.div, grid.div)?;
    writeln!(out, "# {} vertices, {} faces", mesh.num_vertices(), mesh.num_faces())?;

    for v in mesh.positions().chunks_exact(3) {
        writeln!(out, "v {} {} {}", v[0], v[1], v[2])?;
    }
    for n in mesh.normals().chunks_exact(3) {
        writeln!(out, "vn {} {} {}", n[0], n[1], n[2])?;
    }
    for [a, b, c] in mesh.faces() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    Ok(())
}

/// Write `mesh` as OBJ to `path`, creating or truncating the file
pub fn save_obj(mesh: &TerrainMesh, path: impl AsRef<Path>) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj(mesh, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Summary of a generated mesh and the parameters that produced it
pub fn manifest(mesh: &TerrainMesh, params: &TerrainParams) -> serde_json::Value {
    let (min_z, max_z) = mesh.min_max_z();
    json!({
        "seed": params.seed,
        "grid": params.grid,
        "fault": params.fault,
        "vertices": mesh.num_vertices(),
        "faces": mesh.num_faces(),
        "edges": mesh.num_edges(),
        "min_z": min_z,
        "max_z": max_z,
    })
}

pub fn save_manifest(
    mesh: &TerrainMesh,
    params: &TerrainParams,
    path: impl AsRef<Path>,
) -> Result<()> {
    let json = serde_json::to_string_pretty(&manifest(mesh, params))?;
    std::fs::write(path, json)?;
    Ok(())
}
