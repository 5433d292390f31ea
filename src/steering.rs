/*
 * Steering Module
 *
 * This module computes steering forces for the agent. Each behavior follows
 * the Reynolds formulation: steering = desired velocity - current velocity.
 * The active behavior is an explicit selection rather than a hardcoded call:
 * 1. Wander: drift the heading along a projected circle by a random walk
 * 2. Seek: accelerate towards a target, slowing inside the approach radius
 * 3. Flee: accelerate directly away from a target
 *
 * The random source is passed in by the caller so the behaviors stay
 * deterministic under a seeded generator.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SteeringParams;
use crate::vecmath::Vec2Ext;

// The behavior driving the agent on a given tick
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Behavior {
    Wander,
    Seek,
    Flee,
}

impl Behavior {
    pub fn label(&self) -> &'static str {
        match self {
            Behavior::Wander => "Wander",
            Behavior::Seek => "Seek",
            Behavior::Flee => "Flee",
        }
    }
}

// Steer towards a target, decelerating linearly inside the approach radius
pub fn seek(target: Point2, position: Point2, velocity: Vec2, params: &SteeringParams) -> Vec2 {
    let mut desired_vel = (target - position).normalized_or_zero() * params.max_vel;

    // slow during approach; zero desired velocity exactly at the target
    let distance = position.distance(target);
    if distance < params.approach_radius {
        desired_vel *= distance / params.approach_radius;
    }

    desired_vel - velocity
}

// Steer directly away from a target; no deceleration zone
pub fn flee(target: Point2, position: Point2, velocity: Vec2, params: &SteeringParams) -> Vec2 {
    let desired_vel = (position - target).normalized_or_zero() * params.max_vel;

    desired_vel - velocity
}

// Center of the circle the wander displacement is projected onto, ahead of
// the agent along its current heading
pub fn wander_circle_center(position: Point2, velocity: Vec2, params: &SteeringParams) -> Point2 {
    position + velocity.normalized_or_zero() * params.wander_circle_distance
}

// Wander steering: a displacement of circle-radius magnitude whose heading
// drifts by a bounded random step on every call. Mutates wander_angle for
// the next call. A zero velocity yields a zero displacement.
pub fn wander<R: Rng>(
    position: Point2,
    velocity: Vec2,
    wander_angle: &mut f32,
    params: &SteeringParams,
    rng: &mut R,
) -> Vec2 {
    let circle_center = wander_circle_center(position, velocity, params);
    let target = circle_center + velocity.normalized_or_zero() * params.wander_circle_radius;

    let displacement = (target - circle_center).with_heading(*wander_angle);
    *wander_angle += rng.gen_range(-params.angle_change..=params.angle_change);

    displacement
}
