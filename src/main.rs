//! Terminal blockfall runner (default binary).
//!
//! Polls crossterm for keys until the next 16ms tick, feeds commands and elapsed
//! time to the simulation, and redraws from a snapshot.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use blockfall::core::{GameSnapshot, SimConfig, Simulation};
use blockfall::input::{map_key, should_quit};
use blockfall::term::{BoardView, Frame, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    init_logging()?;

    let mut config = SimConfig::load().context("loading configuration")?;
    if config.seed.is_none() {
        config.seed = Some(clock_seed());
    }
    info!(?config, "starting blockfall");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Simulation::new(config));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!("exiting on error: {err:#}");
    }
    result
}

/// Log to `BLOCKFALL_LOG_PATH` when set. Stdout belongs to the game screen.
fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("BLOCKFALL_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut sim: Simulation) -> Result<()> {
    let view = BoardView::new();
    let mut snapshot = GameSnapshot::default();
    let mut frame = Frame::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        sim.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut frame);
        term.draw(&frame)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key(key) {
                        sim.apply_command(command)?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            sim.advance(elapsed.as_millis().min(u32::MAX as u128) as u32)?;
        }
    }
}
