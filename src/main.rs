//! Slingroll entry point
//!
//! Headless demo: an auto-player launches the body repeatedly, one upgrade
//! is raised after every run, and each run is logged.
//!
//! Usage: `slingroll [config.json] [seed] [runs]`

use slingroll::sim::{AutoPlayer, SimEvent, Simulator, tick};
use slingroll::upgrades::UpgradeKind;
use slingroll::Config;

/// Host frame time the demo pretends to render at
const FRAME_DT: f32 = 1.0 / 60.0;
/// Bail out if the runs take longer than this many frames
const MAX_FRAMES: u64 = 1_000_000;

fn main() {
    env_logger::init();
    log::info!("Slingroll (native) starting...");

    let mut args = std::env::args().skip(1);
    let mut config = match args.next() {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    let runs: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(6);
    log::info!("Seed {}, {} runs", seed, runs);

    let mut sim = match Simulator::try_new(config.effective_params()) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Unusable launch parameters: {}", e);
            std::process::exit(1);
        }
    };
    let mut player = AutoPlayer::new(seed);
    let mut clock = config.clock();
    let mut best_distance = 0.0f32;
    let upgrade_order = UpgradeKind::ALL;
    let mut next_upgrade = upgrade_order.iter().cycle();
    let mut frames = 0u64;

    while sim.runs_completed() < runs && frames < MAX_FRAMES {
        frames += 1;
        for _ in 0..clock.advance(FRAME_DT) {
            let input = player.plan(&sim);
            tick(&mut sim, &input);

            // Handle completion before the next plan so upgrades land while Resting
            for event in sim.drain_events() {
                let SimEvent::RunComplete {
                    distance, earned, ..
                } = event
                else {
                    continue;
                };
                let run = sim.runs_completed();
                if distance > best_distance {
                    log::info!("Run {} is the new best ({:.1})", run, distance);
                    best_distance = distance;
                }
                println!("run {:>3}: distance {:>8.1}  earned {:>8.1}", run, distance, earned);

                if let Some(&kind) = next_upgrade.next() {
                    if config.upgrades.raise(kind) {
                        log::info!("Upgraded {} to {}", kind.as_str(), config.upgrades.level(kind));
                        if !sim.set_params(config.effective_params()) {
                            log::warn!("Upgrade {} not applied", kind.as_str());
                        }
                    }
                }
            }
        }
    }

    if sim.runs_completed() < runs {
        log::warn!("Stopped after {} frames with {} runs", frames, sim.runs_completed());
    }

    println!("\ntotal currency: {:.1}", sim.total_currency());
    println!("best distance:  {:.1}", best_distance);
}
