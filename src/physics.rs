/*
 * Physics Module
 *
 * This module handles the kinematic integration for the agent: clamping the
 * steering force, scaling it by mass, and advancing velocity and position.
 * It also wraps the agent around the canvas edges.
 */

use nannou::prelude::*;

use crate::agent::Agent;
use crate::params::SteeringParams;
use crate::vecmath::Vec2Ext;

// Apply a steering force to the agent for one integration step.
// The force is clamped to max_force before mass scaling, and the resulting
// velocity is clamped to max_vel before the position update.
pub fn apply_steering(agent: &mut Agent, force: Vec2, params: &SteeringParams) {
    let force = force.truncated(params.max_force) / agent.mass;

    agent.velocity = (agent.velocity + force).truncated(params.max_vel);
    agent.position += agent.velocity;
}

// Wrap the agent around the canvas edges. Crossing a low bound wraps to the
// far side; crossing a high bound reflects across the boundary value rather
// than wrapping. The checks run in this order with no re-check afterwards.
pub fn wrap_edges(position: &mut Point2, width: f32, height: f32) {
    if position.x < 0.0 {
        position.x += width;
    }
    if position.y < 0.0 {
        position.y += height;
    }

    if position.x > width {
        position.x = width - position.x;
    }
    if position.y > height {
        position.y = height - position.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn velocity_never_exceeds_max_vel() {
        let p = SteeringParams::default();
        let mut agent = Agent::new(pt2(200.0, 200.0), vec2(0.01, 0.01), 1.0, 0.0);
        let mut rng = StdRng::seed_from_u64(1234);

        for _ in 0..5000 {
            let force = vec2(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            apply_steering(&mut agent, force, &p);
            assert!(agent.velocity.length() <= p.max_vel + 1e-4);
        }
    }

    #[test]
    fn force_is_clamped_before_mass_scaling() {
        let p = SteeringParams::default();
        let mut agent = Agent::new(pt2(0.0, 0.0), Vec2::ZERO, 1.0, 0.0);

        // a huge force still only adds max_force worth of velocity to a
        // resting unit-mass agent
        apply_steering(&mut agent, vec2(100.0, 0.0), &p);
        assert!((agent.velocity.length() - p.max_force).abs() < 1e-6);
    }

    #[test]
    fn mass_scales_the_acceleration() {
        let p = SteeringParams::default();
        let mut light = Agent::new(pt2(0.0, 0.0), Vec2::ZERO, 1.0, 0.0);
        let mut heavy = Agent::new(pt2(0.0, 0.0), Vec2::ZERO, 2.0, 0.0);

        apply_steering(&mut light, vec2(0.004, 0.0), &p);
        apply_steering(&mut heavy, vec2(0.004, 0.0), &p);

        assert!((light.velocity.x - 2.0 * heavy.velocity.x).abs() < 1e-7);
    }

    #[test]
    fn position_advances_by_the_updated_velocity() {
        let p = SteeringParams::default();
        let mut agent = Agent::new(pt2(10.0, 10.0), vec2(0.5, -0.25), 1.0, 0.0);

        apply_steering(&mut agent, Vec2::ZERO, &p);
        assert_eq!(agent.position, pt2(10.5, 9.75));
    }

    #[test]
    fn wrap_low_bound_adds_a_full_dimension() {
        let mut pos = pt2(-5.0, 300.0);
        wrap_edges(&mut pos, 800.0, 600.0);
        assert_eq!(pos, pt2(795.0, 300.0));
    }

    #[test]
    fn wrap_high_bound_reflects_across_the_boundary() {
        let mut pos = pt2(805.0, 300.0);
        wrap_edges(&mut pos, 800.0, 600.0);
        // reflection, not modulo: 800 - 805
        assert_eq!(pos, pt2(-5.0, 300.0));
    }

    #[test]
    fn wrap_leaves_in_range_positions_untouched() {
        let mut pos = pt2(400.0, 300.0);
        wrap_edges(&mut pos, 800.0, 600.0);
        assert_eq!(pos, pt2(400.0, 300.0));
    }

    #[test]
    fn wrap_y_follows_the_same_policy_as_x() {
        let mut pos = pt2(100.0, -10.0);
        wrap_edges(&mut pos, 800.0, 600.0);
        assert_eq!(pos, pt2(100.0, 590.0));

        let mut pos = pt2(100.0, 610.0);
        wrap_edges(&mut pos, 800.0, 600.0);
        assert_eq!(pos, pt2(100.0, -10.0));
    }
}
