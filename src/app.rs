/*
 * Application Module
 *
 * This module defines the main application model and update logic for the
 * steering sandbox. Two independent tick sources drive the simulation,
 * each expressed as a fixed-timestep accumulator fed from nannou's
 * per-frame update callback: integration runs at 60 Hz and trail sampling
 * at 2 Hz. The accumulators advance independently, so no particular
 * interleaving between the two ticks is assumed.
 */

use log::{debug, info};
use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

use crate::agent::Agent;
use crate::debug::DebugInfo;
use crate::params::SteeringParams;
use crate::steering::{self, Behavior};
use crate::trail::Trail;
use crate::{input, physics, renderer, ui, SCREEN_HEIGHT, SCREEN_WIDTH};

// Nominal tick rates for the two accumulators
pub const INTEGRATION_HZ: f32 = 60.0;
pub const TRAIL_HZ: f32 = 2.0;

// Main model for the application
pub struct Model {
    pub agent: Agent,
    pub trail: Trail,
    pub params: SteeringParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    // Seek target, tracked in simulation space
    pub mouse_position: Point2,
    // Seeded once at startup, never reseeded during the run
    pub rng: StdRng,
    // Fixed timestep accumulators
    pub integration_accumulator: Duration,
    pub integration_step: Duration,
    pub trail_accumulator: Duration,
    pub trail_step: Duration,
    pub last_update_time: Instant,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Create the main window with the fixed canvas size
    let window_id = app
        .new_window()
        .title("Steering Behavior Sandbox")
        .size(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters
    let params = SteeringParams::default();

    let mut rng = StdRng::from_entropy();
    let agent = spawn_agent(&mut rng);

    info!(
        "sandbox started: {}x{} canvas, integration {} Hz, trail {} Hz",
        SCREEN_WIDTH, SCREEN_HEIGHT, INTEGRATION_HZ, TRAIL_HZ
    );

    Model {
        agent,
        trail: Trail::new(),
        params,
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: canvas_center(),
        rng,
        integration_accumulator: Duration::ZERO,
        integration_step: Duration::from_secs_f32(1.0 / INTEGRATION_HZ),
        trail_accumulator: Duration::ZERO,
        trail_step: Duration::from_secs_f32(1.0 / TRAIL_HZ),
        last_update_time: Instant::now(),
    }
}

// Create the demo agent at its starting state
pub fn spawn_agent(rng: &mut StdRng) -> Agent {
    // Initial wander heading lands anywhere on the circle, in whole degrees
    let wander_angle = rng.gen_range(0..=360) as f32;
    debug!("spawning agent with wander angle {wander_angle}");

    Agent::new(pt2(200.0, 200.0), vec2(0.01, 0.01), 1.0, wander_angle)
}

pub fn canvas_center() -> Point2 {
    pt2(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check if the agent should be reset
    let should_reset = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if should_reset {
        model.agent = spawn_agent(&mut model.rng);
        model.trail.clear();
    }

    // Accumulate elapsed wall time for both tick sources
    let now = Instant::now();
    let elapsed = now.duration_since(model.last_update_time);
    model.last_update_time = now;

    if model.params.pause_simulation {
        // Drop the elapsed time so ticks don't pile up while paused
        return;
    }

    model.integration_accumulator += elapsed;
    model.trail_accumulator += elapsed;

    // Integration ticks: steering, integration, edge wrap
    let mut steps = 0;
    while model.integration_accumulator >= model.integration_step {
        step_simulation(model);
        model.integration_accumulator -= model.integration_step;
        steps += 1;
    }
    model.debug_info.integration_steps_last_frame = steps;

    // Trail ticks: sample the current position on the slower clock
    while model.trail_accumulator >= model.trail_step {
        model.trail.push(model.agent.position);
        model.trail_accumulator -= model.trail_step;
    }
}

// One integration tick: active behavior force, integration, edge wrap
fn step_simulation(model: &mut Model) {
    let agent = &mut model.agent;

    let force = match model.params.behavior {
        Behavior::Wander => steering::wander(
            agent.position,
            agent.velocity,
            &mut agent.wander_angle,
            &model.params,
            &mut model.rng,
        ),
        // Seek chases the mouse cursor
        Behavior::Seek => {
            steering::seek(model.mouse_position, agent.position, agent.velocity, &model.params)
        }
        // Flee runs from the canvas center
        Behavior::Flee => {
            steering::flee(canvas_center(), agent.position, agent.velocity, &model.params)
        }
    };

    physics::apply_steering(agent, force, &model.params);
    physics::wrap_edges(&mut agent.position, SCREEN_WIDTH, SCREEN_HEIGHT);
}
