/*
 * Trail Module
 *
 * This module keeps a bounded history of the agent's recent positions.
 * The trail is sampled on its own clock, slower than the integration tick,
 * and is consumed by the renderer as an ordered sequence of points with the
 * most recent last. It has no effect on the simulation.
 */

use nannou::prelude::*;
use std::collections::VecDeque;

// Maximum number of positions kept; the oldest is evicted first
pub const TRAIL_CAPACITY: usize = 25;

#[derive(Clone, Default)]
pub struct Trail {
    points: VecDeque<Point2>,
}

impl Trail {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(TRAIL_CAPACITY),
        }
    }

    // Append the current position, evicting the oldest entry when full
    pub fn push(&mut self, position: Point2) {
        self.points.push_back(position);

        if self.points.len() > TRAIL_CAPACITY {
            self.points.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point2> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_never_exceeds_capacity() {
        let mut trail = Trail::new();

        for i in 0..100 {
            trail.push(pt2(i as f32, 0.0));
            assert!(trail.len() <= TRAIL_CAPACITY);
        }

        assert_eq!(trail.len(), TRAIL_CAPACITY);
    }

    #[test]
    fn oldest_entries_are_evicted_first() {
        let mut trail = Trail::new();

        for i in 0..30 {
            trail.push(pt2(i as f32, 0.0));
        }

        // entries 0..5 were evicted; 5 is now the oldest, 29 the newest
        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs.first(), Some(&5.0));
        assert_eq!(xs.last(), Some(&29.0));

        // order is preserved in between
        for pair in xs.windows(2) {
            assert_eq!(pair[1], pair[0] + 1.0);
        }
    }

    #[test]
    fn clear_empties_the_trail() {
        let mut trail = Trail::new();
        trail.push(pt2(1.0, 2.0));
        trail.clear();
        assert!(trail.is_empty());
    }
}
