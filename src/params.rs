/*
 * Simulation Parameters Module
 *
 * This module defines the SteeringParams struct that contains the steering
 * constants and the adjustable state for the sandbox. These parameters can
 * be modified through the UI while the simulation runs.
 */

use crate::steering::Behavior;

// Parameters for the simulation that can be adjusted via UI
pub struct SteeringParams {
    pub behavior: Behavior,
    pub max_vel: f32,
    pub max_force: f32,
    pub approach_radius: f32,
    pub wander_circle_distance: f32,
    pub wander_circle_radius: f32,
    // Half-range, in degrees, of the random wander-angle step per tick
    pub angle_change: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            behavior: Behavior::Wander,
            max_vel: 1.0,
            max_force: 0.005,
            approach_radius: 100.0,
            wander_circle_distance: 100.0,
            wander_circle_radius: 30.0,
            angle_change: 10.0,
            show_debug: false,
            pause_simulation: false,
        }
    }
}

impl SteeringParams {
    // Get parameter ranges for UI sliders
    pub fn get_max_vel_range() -> std::ops::RangeInclusive<f32> {
        0.1..=5.0
    }

    pub fn get_max_force_range() -> std::ops::RangeInclusive<f32> {
        0.001..=0.05
    }

    pub fn get_approach_radius_range() -> std::ops::RangeInclusive<f32> {
        10.0..=300.0
    }

    pub fn get_wander_distance_range() -> std::ops::RangeInclusive<f32> {
        10.0..=200.0
    }

    pub fn get_wander_radius_range() -> std::ops::RangeInclusive<f32> {
        5.0..=100.0
    }

    pub fn get_angle_change_range() -> std::ops::RangeInclusive<f32> {
        0.0..=45.0
    }
}
