//! Command-line demo for the routing engine.
//!
//! Loads an obstacle definition file, builds the walkable grid, and
//! routes between two obstacles:
//!
//! ```bash
//! # Route between obstacles 1 and 3
//! cargo run --release -- map.json --from 1 --to 3
//!
//! # With a custom config file and area
//! cargo run --release -- map.json --from 1 --to 3 \
//!     --config marga.toml --width 900 --height 700
//! ```

use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

use marga::{AreaBounds, EngineConfig, ObstacleSet, RouteEngine};

#[derive(Parser, Debug)]
#[command(name = "marga", about = "Tile-grid routing between rectangular obstacles")]
struct Args {
    /// Obstacle definition file (JSON array of records)
    map: PathBuf,

    /// Id of the start obstacle
    #[arg(long)]
    from: i64,

    /// Id of the end obstacle
    #[arg(long)]
    to: i64,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Area width to tile
    #[arg(long, default_value_t = 900.0)]
    width: f32,

    /// Area height to tile
    #[arg(long, default_value_t = 700.0)]
    height: f32,
}

fn run(args: &Args) -> marga::Result<()> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let obstacles = ObstacleSet::load(&args.map)?;
    info!("loaded {} obstacles from {}", obstacles.len(), args.map.display());

    let mut engine = RouteEngine::new(config, AreaBounds::new(args.width, args.height));
    engine.set_obstacles(obstacles);
    println!("walkable tiles: {}", engine.walkable_tiles().len());

    let route = engine.route_between(args.from, args.to)?;
    println!(
        "route {} -> {}: {} tiles, {} hops (step {})",
        args.from,
        args.to,
        route.len(),
        route.hops(),
        route.step
    );
    for tile in &route.tiles {
        println!("  ({:.0}, {:.0})", tile.rect.x, tile.rect.y);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
