//! Pointer edge detection.
//!
//! Raw pointer samples arrive as absolute position plus a button level.
//! The tracker turns those into the press/release edges and the captured
//! press position that the weapon state machines consume.

use manor_core::types::{PointerState, Position};

/// Converts raw pointer samples into a [`PointerState`] with edge flags.
///
/// `left_released` is true for exactly one sample after the button goes up,
/// and `down_position` holds the position captured on the press edge for the
/// whole duration of the hold.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    state: PointerState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one pointer sample. Call once per tick before the hardware
    /// systems run.
    pub fn apply(&mut self, position: Position, left_down: bool) {
        let state = &mut self.state;
        state.left_released = false;

        let was_down = state.left_down;
        state.position = position;
        state.left_down = left_down;

        if left_down && !was_down {
            state.down_position = position;
        } else if !left_down && was_down {
            state.left_released = true;
        }
    }

    pub fn state(&self) -> &PointerState {
        &self.state
    }

    /// Drops any held button and pending edges.
    pub fn clear(&mut self) {
        self.state = PointerState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: f64, y: f64) -> Position {
        Position { x, y, z: 0.0 }
    }

    #[test]
    fn test_press_captures_down_position() {
        let mut tracker = PointerTracker::new();
        tracker.apply(pos(1.0, 2.0), false);
        tracker.apply(pos(3.0, 4.0), true);
        assert!(tracker.state().left_down);
        assert_eq!(tracker.state().down_position, pos(3.0, 4.0));

        // Dragging keeps the press anchor.
        tracker.apply(pos(9.0, 9.0), true);
        assert_eq!(tracker.state().down_position, pos(3.0, 4.0));
        assert_eq!(tracker.state().position, pos(9.0, 9.0));
    }

    #[test]
    fn test_release_edge_lasts_one_sample() {
        let mut tracker = PointerTracker::new();
        tracker.apply(pos(0.0, 0.0), true);
        tracker.apply(pos(0.0, -3.0), false);
        assert!(tracker.state().left_released);
        assert!(!tracker.state().left_down);

        tracker.apply(pos(0.0, -3.0), false);
        assert!(!tracker.state().left_released);
    }

    #[test]
    fn test_clear_drops_held_button() {
        let mut tracker = PointerTracker::new();
        tracker.apply(pos(1.0, 1.0), true);
        tracker.clear();
        assert!(!tracker.state().left_down);
        assert!(!tracker.state().left_released);
    }
}
