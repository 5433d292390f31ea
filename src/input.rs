/*
 * Input Module
 *
 * This module handles user input events for the sandbox. The mouse cursor
 * is tracked in simulation space as the seek target; raw window events are
 * forwarded to egui so the UI stays interactive.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::viewport;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    // nannou reports the cursor in centered screen coordinates
    model.mouse_position = viewport::screen_to_world(pos);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
