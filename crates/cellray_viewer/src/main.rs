mod cli;
mod logger;
mod player;
mod terminal;
mod world;

use std::{
    path::Path,
    time::{Duration, Instant},
};

use anyhow::{ensure, Context, Result};
use cellray_core::ViewerConfig;
use cellray_renderer::CellUpdate;
use clap::Parser;

use crate::{
    cli::Args,
    terminal::{parse_key_event, Action, TerminalSink},
    world::World,
};

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level.map(Into::into), args.log_file.as_deref())?;

    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    args.apply_overrides(&mut config);
    config.render.validate().context("Invalid render settings")?;
    ensure!(
        config.physics.time_step.is_finite() && config.physics.time_step > 0.0,
        "time_step must be positive, got {}",
        config.physics.time_step
    );

    log::info!(
        "Starting cellray: {}x{} cells, {} samples per cell, shadows {:?}",
        config.render.width,
        config.render.height,
        config.render.samples_per_cell(),
        config.render.shadow_mode
    );

    log::debug!("Effective config:\n{}", config.to_json()?);

    let world = World::new(config).context("Failed to build scene")?;

    match args.frames {
        Some(frames) => run_headless(world, frames, args.dump.as_deref()),
        None => run_interactive(world),
    }
}

/// Step and render `frames` times into memory, then print a summary.
fn run_headless(mut world: World, frames: u32, dump: Option<&Path>) -> Result<()> {
    let mut emitted = 0;
    let mut elapsed = Duration::ZERO;

    for frame in 0..frames {
        world.step();

        let mut sink: Vec<CellUpdate> = Vec::new();
        let stats = world.render(&mut sink)?;
        log::info!(
            "frame {frame}: {}/{} cells in {:.2?}",
            stats.emitted,
            stats.cells,
            stats.elapsed
        );

        emitted += stats.emitted;
        elapsed += stats.elapsed;
    }

    println!("Rendered {frames} frames, {emitted} cell updates, {elapsed:.2?} total");

    if let Some(path) = dump {
        world.save_frame(path)?;
    }
    Ok(())
}

/// Fixed-timestep loop drawing into the terminal until the user quits.
fn run_interactive(mut world: World) -> Result<()> {
    let frame_time = Duration::from_secs_f32(world.time_step());
    let mut sink = TerminalSink::new().context("Failed to set up terminal")?;

    let (cols, rows) = sink.size()?;
    if cols < world.settings().width || rows < world.settings().height {
        log::warn!(
            "Terminal is {cols}x{rows}, smaller than the {}x{} grid",
            world.settings().width,
            world.settings().height
        );
    }

    loop {
        let frame_start = Instant::now();

        while let Some(key) = sink.poll_input(Duration::ZERO)? {
            match parse_key_event(key) {
                Action::Quit => {
                    log::info!("Quit requested");
                    return Ok(());
                }
                action => world.handle(action),
            }
        }

        world.step();
        world.render(&mut sink)?;

        let remaining = frame_time.saturating_sub(frame_start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}
