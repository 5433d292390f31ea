/*
 * Steering Behavior Sandbox
 *
 * A single agent driven by classic steering behaviors on a fixed canvas:
 * 1. Wander: drift the heading along a projected circle by a random walk
 * 2. Seek: chase the mouse cursor, decelerating on approach
 * 3. Flee: run from the canvas center
 *
 * The active behavior is selectable at runtime, parameters are adjustable
 * through the UI, and the agent leaves a slowly sampled position trail.
 */

use steering_sandbox::app;

fn main() {
    env_logger::init();

    nannou::app(app::model).update(app::update).run();
}
