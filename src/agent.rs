/*
 * Agent Module
 *
 * This module defines the Agent struct, the kinematic state of the single
 * simulated entity. It is pure data: steering lives in the steering module,
 * integration in the physics module, and drawing in the renderer.
 */

use nannou::prelude::*;

#[derive(Clone)]
pub struct Agent {
    pub position: Point2,
    pub velocity: Vec2,
    pub mass: f32,
    // Heading of the wander displacement, in degrees. Mutated by every
    // wander computation.
    pub wander_angle: f32,
}

impl Agent {
    pub fn new(position: Point2, velocity: Vec2, mass: f32, wander_angle: f32) -> Self {
        // The integrator divides the steering force by mass
        assert!(mass > 0.0, "agent mass must be positive");

        Self {
            position,
            velocity,
            mass,
            wander_angle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_the_given_state() {
        let agent = Agent::new(pt2(200.0, 200.0), vec2(0.01, 0.01), 1.0, 135.0);
        assert_eq!(agent.position, pt2(200.0, 200.0));
        assert_eq!(agent.velocity, vec2(0.01, 0.01));
        assert_eq!(agent.mass, 1.0);
        assert_eq!(agent.wander_angle, 135.0);
    }

    #[test]
    #[should_panic(expected = "mass must be positive")]
    fn zero_mass_is_rejected() {
        Agent::new(pt2(0.0, 0.0), Vec2::ZERO, 0.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "mass must be positive")]
    fn negative_mass_is_rejected() {
        Agent::new(pt2(0.0, 0.0), Vec2::ZERO, -1.0, 0.0);
    }
}
