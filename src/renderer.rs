/*
 * Renderer Module
 *
 * This module draws the sandbox: the trail, the canvas-center anchor, the
 * agent with its heading line, and an optional debug overlay showing the
 * wander projection circle or the seek approach radius.
 */

use nannou::prelude::*;

use crate::app::{canvas_center, Model};
use crate::steering::{self, Behavior};
use crate::ui;
use crate::vecmath::Vec2Ext;
use crate::viewport::world_to_screen;
use crate::{AGENT_SIZE, HEADING_LENGTH};

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    let trail_color: Rgb<u8> = rgb(0, 240, 0);

    // Trail points, oldest first so fresh samples draw on top
    for &point in model.trail.iter() {
        draw.rect()
            .xy(world_to_screen(point))
            .w_h(1.0, 1.0)
            .color(trail_color);
    }

    // Anchor at the canvas center; flee runs away from it
    let center_color: Rgb<u8> = rgb(0, 0, 240);
    draw.ellipse()
        .xy(world_to_screen(canvas_center()))
        .radius(10.0)
        .color(center_color);

    // The agent body
    let agent = &model.agent;
    let screen_pos = world_to_screen(agent.position);

    let agent_color: Rgb<u8> = rgb(240, 0, 0);
    draw.rect()
        .xy(screen_pos)
        .w_h(AGENT_SIZE, AGENT_SIZE)
        .color(agent_color);

    // Heading line along the normalized velocity
    let heading = agent.velocity.normalized_or_zero() * HEADING_LENGTH;
    draw.line()
        .start(screen_pos)
        .end(world_to_screen(agent.position + heading))
        .weight(1.0)
        .color(trail_color);

    // Draw debug visualization if enabled
    if model.params.show_debug {
        match model.params.behavior {
            Behavior::Wander => {
                // The projected circle the wander displacement lives on
                let circle_center =
                    steering::wander_circle_center(agent.position, agent.velocity, &model.params);
                let circle_color: Rgb<u8> = rgb(240, 240, 240);

                draw.ellipse()
                    .xy(world_to_screen(circle_center))
                    .radius(model.params.wander_circle_radius)
                    .no_fill()
                    .stroke(circle_color)
                    .stroke_weight(1.0);

                // Current displacement, without advancing the random walk
                let displacement = (agent.velocity.normalized_or_zero()
                    * model.params.wander_circle_radius)
                    .with_heading(agent.wander_angle);

                draw.line()
                    .start(world_to_screen(circle_center))
                    .end(world_to_screen(circle_center + displacement))
                    .weight(1.0)
                    .color(trail_color);
            }
            Behavior::Seek => {
                // Deceleration zone around the mouse target
                draw.ellipse()
                    .xy(world_to_screen(model.mouse_position))
                    .radius(model.params.approach_radius)
                    .no_fill()
                    .stroke(YELLOW)
                    .stroke_weight(1.0);
            }
            Behavior::Flee => {}
        }

        // Draw debug info
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            app.window_rect(),
            agent,
            model.trail.len(),
            model.params.behavior,
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
