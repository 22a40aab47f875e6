//! gridroute: an interactive cheapest-route calculator on a terrain grid.

mod app;
mod cli;

use std::io;

use anyhow::Context;
use clap::Parser;
use gridroute_core::{DEFAULT_SIZE, Grid};
use gridroute_paths::{RouteCoordinator, ShortestPathEngine};
use rand::SeedableRng;
use rand::rngs::StdRng;

use app::Shell;
use cli::Args;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // A starting map only when a size was asked for; otherwise the user picks
    // one from the menu.
    let (grid, startup_error) = if args.rows.is_some() || args.cols.is_some() {
        let (grid, fallback) = Grid::new_or_default(
            args.rows.unwrap_or(DEFAULT_SIZE),
            args.cols.unwrap_or(DEFAULT_SIZE),
        );
        (Some(grid), fallback)
    } else {
        (None, None)
    };

    let engine = match &grid {
        Some(g) => ShortestPathEngine::with_bounds(g.bounds()),
        None => ShortestPathEngine::new(),
    };
    let coordinator = RouteCoordinator::new(engine, args.glyphs.glyphs());

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        stdin.lock(),
        stdout.lock(),
        grid,
        coordinator,
        rng,
        !args.no_color,
    )
    .with_startup_error(startup_error);
    shell.run().context("terminal I/O failed")?;
    Ok(())
}
