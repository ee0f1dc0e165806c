use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::scene::Scene;
use crate::simulation::states::{Body, NVec2};

/// What a windowless run ended with
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub steps: usize,
    pub simulated_time: f64,
    pub bodies: usize,
    pub kinetic_energy: f64,
    pub momentum: NVec2,
    pub wall_seconds: f64,
}

/// Drive the scenario for `steps` frames of fixed `dt` without a window,
/// logging diagnostics every `log_every` frames (0 = only at the end)
pub fn run_headless(scenario: &mut Scenario, steps: usize, dt: f64, log_every: usize) -> RunSummary {
    let scene = &mut scenario.scene;
    let t0 = Instant::now();

    for step in 1..=steps {
        scene.update(dt);
        if log_every > 0 && step % log_every == 0 {
            tracing::info!(
                step,
                t = scene.time(),
                ke = scene.kinetic_energy(),
                px = scene.total_momentum().x,
                py = scene.total_momentum().y,
                "headless step"
            );
        }
    }

    let summary = RunSummary {
        steps,
        simulated_time: scene.time(),
        bodies: scene.body_count(),
        kinetic_energy: scene.kinetic_energy(),
        momentum: scene.total_momentum(),
        wall_seconds: t0.elapsed().as_secs_f64(),
    };
    tracing::info!(?summary, "headless run finished");
    summary
}

/// Scene of `n` circles laid out deterministically, no springs
fn bench_scene(n: usize, engine: Engine) -> Scene {
    let mut scene = Scene::new(engine.with_max_bodies(n), Parameters::default());
    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(500.0 + (i_f * 0.37).sin() * 400.0, 500.0 + (i_f * 0.13).cos() * 400.0);
        let v = NVec2::new((i_f * 0.07).sin() * 50.0, (i_f * 0.11).cos() * 50.0);
        if scene.add_body(Body::circle(x, 4.0).with_velocity(v)).is_err() {
            break;
        }
    }
    scene
}

/// Time one `update` for growing body counts (pairwise collisions dominate)
pub fn bench_update() {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 10;

    for n in ns {
        let mut scene = bench_scene(n, Engine::default());

        // Warm up
        scene.update(1.0 / 60.0);

        let t0 = Instant::now();
        for _ in 0..steps {
            scene.update(1.0 / 60.0);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, update = {per_step:10.6} s");
    }
}

/// Time one frame of a fixed scene for growing sub-step counts
pub fn bench_sub_steps() {
    let n = 800;
    let subs = [1, 2, 4, 8, 16];

    for s in subs {
        let mut scene = bench_scene(n, Engine::default().with_sub_steps(s));

        let t0 = Instant::now();
        scene.update(1.0 / 60.0);
        let dt_frame = t0.elapsed().as_secs_f64();

        println!("sub_steps = {s:3}, frame = {dt_frame:10.6} s");
    }
}
