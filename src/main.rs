//! TerraForge - procedural island landscape simulation.
//!
//! Headless driver: generates the heightfield, runs the rain
//! simulation for a fixed number of ticks, and prints a summary. The
//! interactive renderer consumes the same library surface.

use std::path::Path;
use std::process;

use clap::Parser;
use glam::Vec3;

use terraforge::cli::Args;
use terraforge::terrain::mesh::TerrainMesh;
use terraforge::terrain::HeightGrid;
use terraforge::world::World;

/// Observer used for the headless run, matching the interactive
/// viewer's startup camera.
const OBSERVER: Vec3 = Vec3::new(0.0, 12.0, 20.0);

const TICK_SECONDS: f32 = 1.0 / 60.0;

fn main() {
    let args = Args::parse();

    let params = args.world_params();
    let mut world = match World::new(&params) {
        Ok(world) => world,
        Err(message) => {
            eprintln!("Invalid configuration: {}", message);
            process::exit(1);
        }
    };

    let (min_height, max_height) = height_extents(&world.terrain);
    println!(
        "Terrain: {res}x{res} cells, heights {min:.2}..{max:.2} m (seed {seed})",
        res = world.terrain.resolution(),
        min = min_height,
        max = max_height,
        seed = args.seed,
    );

    let mesh = TerrainMesh::build(&world.terrain);
    println!(
        "Mesh: {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.indices.len() / 3,
    );

    world.raining = true;
    for _ in 0..args.ticks {
        world.advance(TICK_SECONDS, OBSERVER);
    }
    println!(
        "Rain: {} drops after {} ticks, water level {:.2} m",
        world.rain.len(),
        args.ticks,
        world.water_level(),
    );

    if let Some(path) = &args.preview {
        match write_preview(&world.terrain, path) {
            Ok(()) => println!("Heightmap preview written to {}", path.display()),
            Err(message) => {
                eprintln!("Failed to write preview: {}", message);
                process::exit(1);
            }
        }
    }
}

fn height_extents(grid: &HeightGrid) -> (f32, f32) {
    let res = grid.resolution();
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for x in 0..res {
        for z in 0..res {
            let h = grid.height_at(x, z);
            min = min.min(h);
            max = max.max(h);
        }
    }
    (min, max)
}

/// Export the heightfield as a grayscale PNG, black at the lowest cell
/// and white at the highest.
fn write_preview(grid: &HeightGrid, path: &Path) -> Result<(), String> {
    let res = grid.resolution();
    let (min, max) = height_extents(grid);
    let range = (max - min).max(f32::EPSILON);

    let mut img = image::GrayImage::new(res as u32, res as u32);
    for x in 0..res {
        for z in 0..res {
            let t = (grid.height_at(x, z) - min) / range;
            img.put_pixel(x as u32, z as u32, image::Luma([(t * 255.0) as u8]));
        }
    }
    img.save(path).map_err(|e| e.to_string())
}
