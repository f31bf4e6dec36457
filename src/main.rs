use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shape_collider::collision_system::{shapes_from_file, SimpleCollisionSystem};
use shape_collider::geo::*;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Report which 2D shapes have overlapping bounding boxes")]
struct Args {
    /// JSON file with an array of shapes, e.g. [{"Square": {"origin": [0, 0], "size": 10}}]
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,
    /// Sample this many random shapes instead of the built-in scene
    #[arg(long)]
    random: Option<usize>,
    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,
    /// Print the number of tested pairs and collisions after the pairs
    #[arg(long)]
    count: bool,
}

fn sample_scene() -> Vec<Geo> {
    vec![
        Geo::GeoSquare(Square::new(0., 0., 10.)),
        Geo::GeoRect(Rect::new(5., 5., 20., 20.)),
        Geo::GeoSquare(Square::new(15., 20., 5.)),
        Geo::GeoCircle(Circle::new(1., 1., 2.)),
    ]
}

fn random_scene(n: usize, seed: Option<u64>) -> Vec<Geo> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..n).map(|_| rng.gen()).collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let shapes = match (&args.input, args.random) {
        (Some(path), _) => shapes_from_file(path)?,
        (None, Some(n)) => random_scene(n, args.seed),
        (None, None) => sample_scene(),
    };
    info!(shapes = shapes.len(), "scene loaded");

    let system = SimpleCollisionSystem::from(shapes);
    let collisions = system.find_collisions()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for collision in collisions.iter() {
        writeln!(out, "{}", collision)?;
    }
    if args.count {
        writeln!(
            out,
            "{} shapes, {} pairs tested, {} collisions",
            system.len(),
            system.candidate_count(),
            collisions.len()
        )?;
    }
    Ok(())
}
