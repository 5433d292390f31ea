/*
 * Viewport Module
 *
 * This module provides coordinate transformations between simulation space
 * and screen space. Simulation space has its origin at the top-left of the
 * canvas with +y pointing down; nannou draws in a centered coordinate
 * system with +y pointing up. The canvas is fixed-size, so the transform
 * is a pure offset and flip.
 */

use nannou::prelude::*;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

// Convert a point from simulation space to screen space
pub fn world_to_screen(point: Point2) -> Point2 {
    pt2(point.x - SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - point.y)
}

// Convert a point from screen space to simulation space
pub fn screen_to_world(point: Point2) -> Point2 {
    pt2(point.x + SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - point.y)
}
