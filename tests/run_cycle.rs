//! End-to-end run cycles through the public API: aim, release, fly, roll,
//! rest, credit, upgrade, go again.

use glam::Vec2;
use slingroll::sim::{InputEvent, LaunchParams, Mode, SimEvent, Simulator, TickInput, tick};
use slingroll::{Config, Upgrades};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sling(sim: &mut Simulator, aim: Vec2) {
    let origin = sim.params().launch_origin;
    sim.begin_aim(origin);
    sim.update_aim(aim);
    sim.release();
}

/// Step until Resting, returning every event seen
fn run_to_rest(sim: &mut Simulator) -> Vec<SimEvent> {
    let mut events = sim.drain_events();
    for _ in 0..5000 {
        if sim.mode() == Mode::Resting {
            break;
        }
        sim.step();
        events.extend(sim.drain_events());
    }
    assert_eq!(sim.mode(), Mode::Resting, "run did not finish");
    events
}

fn completions(events: &[SimEvent]) -> Vec<(f32, f32, f32)> {
    events
        .iter()
        .filter_map(|e| match *e {
            SimEvent::RunComplete {
                distance,
                earned,
                total_currency,
            } => Some((distance, earned, total_currency)),
            _ => None,
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn full_run_credits_distance_once() {
    let mut sim = Simulator::new(LaunchParams {
        max_pull_back: 100.0,
        ..Default::default()
    });
    sling(&mut sim, Vec2::new(430.0, 480.0));
    assert_eq!(sim.mode(), Mode::Airborne);
    assert!((sim.body().vel - Vec2::new(14.0, -6.0)).length() < 1e-5);

    let events = run_to_rest(&mut sim);
    let done = completions(&events);
    assert_eq!(done.len(), 1);

    let (distance, earned, total) = done[0];
    assert!(distance > 0.0);
    assert_eq!(earned, distance);
    assert_eq!(total, distance);
    assert_eq!(sim.stats().distance, distance);
    assert_eq!(sim.total_currency(), distance);

    // The order of events tells the story of the run
    assert!(matches!(events.first(), Some(SimEvent::AimStarted { .. })));
    assert!(events.iter().any(|e| matches!(e, SimEvent::Launched { .. })));
    assert!(events.iter().any(|e| matches!(e, SimEvent::Landed { .. })));
    assert!(matches!(events.last(), Some(SimEvent::RunComplete { .. })));
}

#[test]
fn currency_accumulates_across_runs() {
    let mut sim = Simulator::default();
    let mut expected = 0.0;

    for aim in [Vec2::new(450.0, 480.0), Vec2::new(440.0, 490.0)] {
        sling(&mut sim, aim);
        let events = run_to_rest(&mut sim);
        let done = completions(&events);
        assert_eq!(done.len(), 1);
        expected += done[0].1;
        assert_eq!(done[0].2, expected);
    }
    assert_eq!(sim.runs_completed(), 2);
    assert_eq!(sim.total_currency(), expected);
}

#[test]
fn next_aim_resets_run_stats_after_credit() {
    let mut sim = Simulator::default();
    sling(&mut sim, Vec2::new(450.0, 480.0));
    run_to_rest(&mut sim);
    let total = sim.total_currency();
    assert!(sim.stats().distance > 0.0);

    sim.begin_aim(sim.params().launch_origin);
    assert_eq!(sim.stats().distance, 0.0);
    assert_eq!(sim.stats().earned, 0.0);
    assert_eq!(sim.body().pos, sim.params().launch_origin);
    assert_eq!(sim.total_currency(), total);
}

#[test]
fn invalid_state_calls_are_noops() {
    let mut sim = Simulator::default();
    let resting = sim.clone();
    sim.release();
    sim.update_aim(Vec2::new(10.0, 10.0));
    sim.apply_mid_flight_impulse();
    assert_eq!(sim, resting);

    sim.key_launch();
    let airborne = sim.clone();
    sim.begin_aim(Vec2::new(450.0, 450.0));
    sim.release();
    sim.key_launch();
    sim.apply_mid_flight_impulse();
    assert_eq!(sim, airborne);
}

#[test]
fn impulse_hop_extends_run() {
    let params = LaunchParams {
        impulse_allowance: 1,
        ..Default::default()
    };
    let mut plain = Simulator::new(params.clone());
    let mut boosted = Simulator::new(params);
    for sim in [&mut plain, &mut boosted] {
        sling(sim, Vec2::new(450.0, 480.0));
    }

    run_to_rest(&mut plain);

    while boosted.mode() != Mode::Rolling {
        boosted.step();
    }
    boosted.apply_mid_flight_impulse();
    assert_eq!(boosted.mode(), Mode::Airborne);
    assert_eq!(boosted.impulses_remaining(), 0);
    let events = run_to_rest(&mut boosted);
    assert!(events
        .iter()
        .any(|e| matches!(e, SimEvent::ImpulseUsed { remaining: 0 })));

    assert!(boosted.stats().distance > plain.stats().distance);
}

#[test]
fn upgrades_apply_between_runs_only() {
    let base = LaunchParams::default();
    let mut sim = Simulator::new(base.clone());
    let upgrades = Upgrades {
        launch_power: 3,
        ..Default::default()
    };

    sling(&mut sim, Vec2::new(450.0, 480.0));
    assert!(!sim.set_params(upgrades.apply(&base)));
    assert_eq!(sim.params(), &base);
    let first = completions(&run_to_rest(&mut sim))[0].0;

    assert!(sim.set_params(upgrades.apply(&base)));
    sling(&mut sim, Vec2::new(450.0, 480.0));
    let second = completions(&run_to_rest(&mut sim))[0].0;
    assert!(second > first, "{second} should beat {first}");
}

#[test]
fn tick_input_queue_drives_a_run() {
    let config = Config::default();
    let mut sim = Simulator::try_new(config.effective_params()).unwrap();

    let mut input = TickInput::default();
    input.push(InputEvent::BeginAim(Vec2::new(500.0, 450.0)));
    input.push(InputEvent::UpdateAim(Vec2::new(450.0, 490.0)));
    input.push(InputEvent::Release);
    tick(&mut sim, &input);
    input.clear();
    assert!(input.is_empty());

    let mut steps = 0;
    while sim.mode() != Mode::Resting {
        tick(&mut sim, &input);
        steps += 1;
        assert!(steps < 5000);
    }
    let done = completions(&sim.drain_events());
    assert_eq!(done.len(), 1);
    let (distance, earned, total) = done[0];
    assert!(distance > 0.0);
    assert_eq!(earned, distance);
    assert_eq!(total, sim.total_currency());
}

#[test]
fn endless_upgrade_is_refused_between_runs() {
    let mut sim = Simulator::default();
    sling(&mut sim, Vec2::new(450.0, 480.0));
    run_to_rest(&mut sim);

    let frictionless = LaunchParams {
        ground_friction: 1.0,
        ..Default::default()
    };
    assert_eq!(sim.mode(), Mode::Resting);
    assert!(!sim.set_params(frictionless));
    assert_eq!(sim.params(), &LaunchParams::default());
}
