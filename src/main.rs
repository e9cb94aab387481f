use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use prim_maze::grids::{DEFAULT_DIMS, DEFAULT_MAX_DIM, MIN_DIM};
use prim_maze::renderer;
use prim_maze::{generate, Cell};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// '#' walls, 'E' entrance, 'X' exit, 'S' start, '.' dead ends
    Text,
    /// class names, one row per line
    Classes,
}

/// Generates a perfect maze and prints it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = DEFAULT_DIMS.0)]
    width: usize,

    #[arg(long, default_value_t = DEFAULT_DIMS.1)]
    height: usize,

    /// Largest width or height accepted
    #[arg(long, default_value_t = DEFAULT_MAX_DIM)]
    max_size: usize,

    /// Random seed, drawn from the OS when left out
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn check_dim(name: &str, value: usize, max: usize) -> Result<()> {
    if value < MIN_DIM || value > max {
        bail!("{} must be between {} and {}, got {}", name, MIN_DIM, max, value);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    check_dim("width", args.width, args.max_size)?;
    check_dim("height", args.height, args.max_size)?;

    let rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let grid = generate(args.width, args.height, rng)
        .with_context(|| format!("generating {}x{} maze", args.width, args.height))?;

    info!(
        "{}x{} maze, {} passages, {} walls",
        grid.width(),
        grid.height(),
        grid.count(Cell::is_passage),
        grid.count(Cell::is_wall)
    );

    match args.format {
        Format::Text => println!("{}", grid),
        Format::Classes => {
            for row in renderer::class_rows(&grid) {
                println!("{}", row);
            }
        }
    }

    Ok(())
}
