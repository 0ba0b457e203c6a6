//! heightmap-prep: heightmap inspection, mesh export and texture generation.
//!
//! Usage:
//!   heightmap-prep inspect --heightmap heights.png --scale 0.25,1.3,0.25
//!   heightmap-prep mesh --heightmap heights.png --output terrain.f32
//!   heightmap-prep synthetic --output heights.png --size 129 --seed 7
//!   heightmap-prep gen-floor --output floor.png --size 64
//!   heightmap-prep swap-red-blue --input sky.png --output sky_bgr.png

use std::path::{Path, PathBuf};
use std::process;

use glam::Vec3;
use image::{Rgba, RgbaImage};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use ld40_core::constants::{HEIGHTMAP_ZERO_LEVEL, HEIGHT_PER_PIXEL, TERRAIN_SCALE};
use ld40_terrain::{height_field_vertices, vertex_floats, HeightField, TerrainError, Vertex};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "inspect" => cmd_inspect(&args[2..]),
        "mesh" => cmd_mesh(&args[2..]),
        "synthetic" => cmd_synthetic(&args[2..]),
        "gen-floor" => cmd_gen_floor(&args[2..]),
        "swap-red-blue" => cmd_swap_red_blue(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            tracing::error!("unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "heightmap-prep: terrain asset tool\n\
         \n\
         Commands:\n\
         \n\
         inspect        Print the size, height range and footprint of a heightmap\n\
         \n\
           --heightmap <path>  Square grayscale PNG\n\
           --scale <x,y,z>     World scale (default: 0.25,1.3,0.25)\n\
         \n\
         mesh           Write the terrain vertex stream as little-endian f32\n\
         \n\
           --heightmap <path>  Square grayscale PNG\n\
           --output <path>     Output file\n\
           --scale <x,y,z>     World scale (default: 0.25,1.3,0.25)\n\
         \n\
         synthetic      Generate a rolling-hills heightmap\n\
         \n\
           --output <path>     Output PNG\n\
           --size <N>          Pixels per side (default: 129)\n\
           --seed <S>          RNG seed (default: 40)\n\
         \n\
         gen-floor      Generate a noisy green floor texture\n\
         \n\
           --output <path>     Output PNG\n\
           --size <N>          Pixels per side (default: 64)\n\
           --seed <S>          RNG seed (default: 40)\n\
         \n\
         swap-red-blue  Swap the red and blue channels of an image\n\
         \n\
           --input <path>      Input image\n\
           --output <path>     Output PNG\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].as_str());
        }
    }
    None
}

fn required_path(args: &[String], flag: &str) -> PathBuf {
    match flag_value(args, flag) {
        Some(p) => PathBuf::from(p),
        None => {
            tracing::error!("{flag} <path> is required");
            process::exit(1);
        }
    }
}

fn parse_scale(value: &str) -> Option<Vec3> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return None;
    }
    let x: f32 = parts[0].trim().parse().ok()?;
    let y: f32 = parts[1].trim().parse().ok()?;
    let z: f32 = parts[2].trim().parse().ok()?;
    Some(Vec3::new(x, y, z))
}

fn scale_arg(args: &[String]) -> Vec3 {
    match flag_value(args, "--scale") {
        Some(s) => match parse_scale(s) {
            Some(scale) => scale,
            None => {
                tracing::error!("--scale expects x,y,z, got {s:?}");
                process::exit(1);
            }
        },
        None => Vec3::from_array(TERRAIN_SCALE),
    }
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    flag_value(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn load_field(args: &[String]) -> Result<HeightField, TerrainError> {
    let path = required_path(args, "--heightmap");
    Ok(HeightField::load(&path, HEIGHT_PER_PIXEL)?.with_scale(scale_arg(args)))
}

// --- Inspect / mesh ---

fn cmd_inspect(args: &[String]) -> Result<(), TerrainError> {
    let field = load_field(args)?;
    let (min, max) = field.footprint();
    let scale = field.scale();
    tracing::info!(
        side = field.side(),
        tiles = field.size(),
        "heightmap is {0}x{0} samples",
        field.side()
    );
    tracing::info!(
        "height range {:.3}..{:.3} (world {:.3}..{:.3})",
        field.min_height(),
        field.max_height(),
        field.min_height() * scale.y,
        field.max_height() * scale.y
    );
    tracing::info!(
        "footprint x {:.3}..{:.3}, z {:.3}..{:.3}",
        min.x,
        max.x,
        min.y,
        max.y
    );
    tracing::info!(
        vertices = ld40_terrain::mesh::vertex_count(&field),
        bytes = ld40_terrain::mesh::vertex_count(&field) * Vertex::STRIDE,
        "mesh size"
    );
    tracing::info!("height at origin {:.4}", field.height_at(0.0, 0.0));
    Ok(())
}

fn cmd_mesh(args: &[String]) -> Result<(), TerrainError> {
    let field = load_field(args)?;
    let output = required_path(args, "--output");

    let vertices = height_field_vertices(&field);
    let bytes = le_bytes(&vertex_floats(&vertices));
    std::fs::write(&output, &bytes)?;
    tracing::info!(
        vertices = vertices.len(),
        bytes = bytes.len(),
        "wrote {}",
        output.display()
    );
    Ok(())
}

fn le_bytes(floats: &[f32]) -> Vec<u8> {
    floats.iter().flat_map(|f| f.to_le_bytes()).collect()
}

// --- Image generation ---

fn cmd_synthetic(args: &[String]) -> Result<(), TerrainError> {
    let output = required_path(args, "--output");
    let size = parse_number(args, "--size", 129u32);
    let seed = parse_number(args, "--seed", 40u64);

    tracing::info!(size, seed, "generating synthetic heightmap");
    let image = synthetic_heightmap(size, seed);
    save_png(&image, &output)
}

fn cmd_gen_floor(args: &[String]) -> Result<(), TerrainError> {
    let output = required_path(args, "--output");
    let size = parse_number(args, "--size", 64u32);
    let seed = parse_number(args, "--seed", 40u64);

    tracing::info!(size, seed, "generating floor texture");
    let image = floor_texture(size, seed);
    save_png(&image, &output)
}

fn cmd_swap_red_blue(args: &[String]) -> Result<(), TerrainError> {
    let input = required_path(args, "--input");
    let output = required_path(args, "--output");

    let mut image = image::open(&input)?.to_rgba8();
    swap_red_blue(&mut image);
    save_png(&image, &output)
}

fn save_png(image: &RgbaImage, output: &Path) -> Result<(), TerrainError> {
    image.save_with_format(output, image::ImageFormat::Png)?;
    let file_size = std::fs::metadata(output).map(|m| m.len()).unwrap_or(0);
    tracing::info!(
        width = image.width(),
        height = image.height(),
        bytes = file_size,
        "wrote {}",
        output.display()
    );
    Ok(())
}

/// A few seeded sine waves summed into gentle hills around gray 127.
fn synthetic_heightmap(size: u32, seed: u64) -> RgbaImage {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let waves: Vec<(f32, f32, f32, f32)> = (0..6)
        .map(|_| {
            (
                rng.gen_range(1.0..4.0),
                rng.gen_range(1.0..4.0),
                rng.gen_range(0.0..std::f32::consts::TAU),
                rng.gen_range(10.0..30.0),
            )
        })
        .collect();

    RgbaImage::from_fn(size, size, |col, row| {
        let nx = col as f32 / size as f32;
        let ny = row as f32 / size as f32;
        let offset: f32 = waves
            .iter()
            .map(|&(fx, fy, phase, amplitude)| {
                amplitude
                    * (std::f32::consts::TAU * fx * nx + phase).sin()
                    * (std::f32::consts::TAU * fy * ny + phase).cos()
                    / waves.len() as f32
            })
            .sum();
        let gray = (HEIGHTMAP_ZERO_LEVEL as f32 + offset).round().clamp(0.0, 255.0) as u8;
        Rgba([gray, gray, gray, 255])
    })
}

/// Dark green noise, one random shade per pixel.
fn floor_texture(size: u32, seed: u64) -> RgbaImage {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    RgbaImage::from_fn(size, size, |_, _| Rgba([0, rng.gen_range(60..90), 0, 255]))
}

fn swap_red_blue(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        pixel.0.swap(0, 2);
    }
}
