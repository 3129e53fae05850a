//! Terrain generator binary — builds a fault-plane terrain mesh and writes it to disk.
//!
//! Usage: cargo run --release --bin generate_terrain -- [OPTIONS]
//!
//! Options:
//!   --config <FILE>     JSON terrain parameters (flags below override it)
//!   --div <N>           Grid subdivisions per axis (default: 64)
//!   --seed <SEED>       Random seed (default: 12345)
//!   --iterations <N>    Number of faults (default: 100)
//!   --out <DIR>         Output directory (default: "assets/terrain")
//!
//! Output structure:
//!   <DIR>/
//!     terrain.obj       # positions, normals, faces
//!     manifest.json     # parameters + mesh summary

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use faultline::core::Result;
use faultline::terrain::export;
use faultline::terrain::{TerrainGenerator, TerrainParams};

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut params = match parse_str_arg(&args, "--config") {
        Some(path) => TerrainParams::from_json_file(&path)?,
        None => TerrainParams::default(),
    };
    if let Some(div) = parse_arg::<u32>(&args, "--div") {
        params.grid.div = div;
    }
    if let Some(seed) = parse_arg::<u64>(&args, "--seed") {
        params.seed = seed;
    }
    if let Some(iterations) = parse_arg::<u32>(&args, "--iterations") {
        params.fault.iterations = iterations;
    }
    let output_dir = PathBuf::from(
        parse_str_arg(&args, "--out").unwrap_or_else(|| "assets/terrain".to_string()),
    );

    println!("=== Faultline Terrain Generator ===");
    println!("Grid:   {} x {} over x [{}, {}] y [{}, {}]",
        params.grid.div, params.grid.div,
        params.grid.min_x, params.grid.max_x, params.grid.min_y, params.grid.max_y);
    println!("Seed:   {}", params.seed);
    println!("Faults: {} (step {}, decay {})",
        params.fault.iterations, params.fault.initial_delta, params.fault.decay);
    println!("Output: {}", output_dir.display());
    println!();

    let generator = TerrainGenerator::new(params.clone())?;
    let start = Instant::now();
    let mesh = generator.generate();
    let elapsed = start.elapsed();

    std::fs::create_dir_all(&output_dir)?;
    let obj_path = output_dir.join("terrain.obj");
    let manifest_path = output_dir.join("manifest.json");
    export::save_obj(&mesh, &obj_path)?;
    export::save_manifest(&mesh, &params, &manifest_path)?;

    let (min_z, max_z) = mesh.min_max_z();
    println!("=== Generation Complete ===");
    println!("Mesh:    {} vertices, {} triangles, {} edges",
        mesh.num_vertices(), mesh.num_faces(), mesh.num_edges());
    println!("Heights: [{:.4}, {:.4}]", min_z, max_z);
    if let Some(bounds) = mesh.aabb() {
        let size = bounds.size();
        println!("Extent:  {} x {} x {:.4}", size.x, size.y, size.z);
    }
    println!("Time:    {:.1}ms", elapsed.as_secs_f64() * 1000.0);
    println!("Wrote:   {}", obj_path.display());
    println!("         {}", manifest_path.display());

    Ok(())
}

/// Value following `flag`, parsed. A present but unparseable value is
/// reported and ignored so the default applies.
fn parse_arg<T: FromStr>(args: &[String], flag: &str) -> Option<T> {
    let raw = parse_str_arg(args, flag)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {} {:?}: not a valid value, using the default", flag, raw);
            None
        }
    }
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_arg_valid() {
        let args = args(&["generate_terrain", "--div", "32", "--seed", "99"]);
        assert_eq!(parse_arg::<u32>(&args, "--div"), Some(32));
        assert_eq!(parse_arg::<u64>(&args, "--seed"), Some(99));
    }

    #[test]
    fn test_parse_arg_missing_flag_or_value() {
        let args = args(&["generate_terrain", "--div"]);
        assert_eq!(parse_arg::<u32>(&args, "--div"), None);
        assert_eq!(parse_arg::<u32>(&args, "--iterations"), None);
    }

    #[test]
    fn test_parse_arg_rejects_garbage() {
        let args = args(&["generate_terrain", "--div", "abc", "--iterations", "-5"]);
        assert_eq!(parse_arg::<u32>(&args, "--div"), None);
        assert_eq!(parse_arg::<u32>(&args, "--iterations"), None);
    }
}
