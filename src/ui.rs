/*
 * UI Module
 *
 * This module contains functions for creating and updating the user
 * interface using nannou_egui. It provides the behavior selection,
 * sliders for the steering parameters, and the debug overlay text.
 */

use nannou_egui::{egui, Egui};

use crate::agent::Agent;
use crate::debug::DebugInfo;
use crate::params::SteeringParams;
use crate::steering::Behavior;

// Update the UI and return whether the agent should be reset
pub fn update_ui(egui: &mut Egui, params: &mut SteeringParams, debug_info: &DebugInfo) -> bool {
    let mut should_reset = false;

    let ctx = egui.begin_frame();

    egui::Window::new("Steering Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Behavior", |ui| {
                ui.horizontal(|ui| {
                    for behavior in [Behavior::Wander, Behavior::Seek, Behavior::Flee] {
                        ui.radio_value(&mut params.behavior, behavior, behavior.label());
                    }
                });
                ui.label("Seek chases the mouse; flee runs from the canvas center.");

                if ui.button("Reset Agent").clicked() {
                    should_reset = true;
                }
            });

            ui.collapsing("Steering Parameters", |ui| {
                ui.add(egui::Slider::new(&mut params.max_vel, SteeringParams::get_max_vel_range()).text("Max Velocity"));
                ui.add(egui::Slider::new(&mut params.max_force, SteeringParams::get_max_force_range()).text("Max Force"));
                ui.add(egui::Slider::new(&mut params.approach_radius, SteeringParams::get_approach_radius_range()).text("Approach Radius"));
                ui.add(egui::Slider::new(&mut params.wander_circle_distance, SteeringParams::get_wander_distance_range()).text("Wander Circle Distance"));
                ui.add(egui::Slider::new(&mut params.wander_circle_radius, SteeringParams::get_wander_radius_range()).text("Wander Circle Radius"));
                ui.add(egui::Slider::new(&mut params.angle_change, SteeringParams::get_angle_change_range()).text("Angle Change"));
            });

            ui.separator();

            // Performance metrics
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    should_reset
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    agent: &Agent,
    trail_len: usize,
    behavior: Behavior,
) {
    // Create a background panel in the top-right corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 230.0;
    let panel_height = line_height * 8.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    // For left-aligned text in nannou, we need to position each text element
    // at a fixed offset from the panel's left edge
    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Steps/frame: {}", debug_info.integration_steps_last_frame),
        format!("Behavior: {}", behavior.label()),
        format!("Position: ({:.1}, {:.1})", agent.position.x, agent.position.y),
        format!("Speed: {:.3}", agent.velocity.length()),
        format!("Wander angle: {:.1} deg", agent.wander_angle),
        format!("Trail points: {}", trail_len),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
