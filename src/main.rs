//! Grid Contender
//!
//! Headless demo driver for the round engine: paints a few walls with
//! the editor (or loads a map file passed as the first argument), runs
//! one scripted round, and prints a JSON summary of the outcome.

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use grid_contender::app::GameController;
use grid_contender::game::events::RoundEvent;
use grid_contender::game::state::PlayerId;
use grid_contender::{Coord, VERSION};

/// Demo RNG seed; any fixed value gives a replayable round.
const DEMO_SEED: u64 = 12345;

/// Key presses issued between ticks, both players interleaved.
const DEMO_KEYS: [char; 8] = ['d', 'j', 's', 'i', 'd', 'k', 'a', 'l'];

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Grid Contender v{}", VERSION);

    let mut controller = GameController::with_defaults(DEMO_SEED);

    if let Some(path) = std::env::args().nth(1) {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read map file {path}"))?;
        controller
            .import_map(&text)
            .with_context(|| format!("failed to load map file {path}"))?;
        info!(%path, "map loaded");
    } else {
        // No map file: paint a small wall pattern with the editor
        for coord in [
            Coord::new(3, 3),
            Coord::new(3, 4),
            Coord::new(8, 7),
            Coord::new(8, 8),
            Coord::new(5, 10),
        ] {
            controller.toggle_cell(coord)?;
        }
        info!("using default map with demo walls");
    }

    demo_round(&mut controller)?;
    Ok(())
}

/// Run one scripted round: a burst of key presses between 1 Hz ticks.
fn demo_round(controller: &mut GameController) -> anyhow::Result<()> {
    info!("=== Starting Demo Round ===");
    controller.start_round()?;

    let mut captures = 0usize;
    let mut seconds = 0u32;
    'round: loop {
        // Both players hammer their keys between timer ticks
        for (step, key) in DEMO_KEYS.iter().enumerate() {
            let shifted = DEMO_KEYS[(step + seconds as usize) % DEMO_KEYS.len()];
            let result = controller.on_key(if step % 2 == 0 { *key } else { shifted });
            captures += result
                .events
                .iter()
                .filter(|event| matches!(event, RoundEvent::CellCaptured { .. }))
                .count();
            if result.round_ended {
                break 'round;
            }
        }

        let result = controller.on_tick();
        seconds += 1;
        info!(
            seconds_left = controller.engine().state().countdown,
            p1_cells = controller.engine().map().count_owned(PlayerId::One),
            p2_cells = controller.engine().map().count_owned(PlayerId::Two),
            captures,
            "tick"
        );
        if result.round_ended {
            break;
        }
    }

    print_summary(controller)
}

/// Print the round outcome as JSON.
fn print_summary(controller: &GameController) -> anyhow::Result<()> {
    let engine = controller.engine();
    let state = engine.state();

    let winner = state.winner.map(|id| engine.player(id).display_name.clone());
    let summary = serde_json::json!({
        "cause": state.end_cause,
        "winner": winner,
        "cells": {
            "p1": engine.map().count_owned(PlayerId::One),
            "p2": engine.map().count_owned(PlayerId::Two),
        },
    });

    info!("=== Round Results ===");
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
