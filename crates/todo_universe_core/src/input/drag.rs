//! Drag tracking: per-move deltas from a stream of pointer positions.

use kurbo::{Point, Vec2};

/// Tracks an active drag and yields the movement delta per pointer move.
///
/// A track is begun on pointer-down, advanced on every move (returning the
/// delta since the previous position), and finished on release. Advancing a
/// track that was never begun yields nothing, so stray move events between
/// gestures are harmless.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTrack {
    last_pos: Option<Point>,
}

impl DragTrack {
    /// Begins tracking from the given pointer position.
    pub fn begin(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Advances to a new position, returning the delta since the last one.
    pub fn advance(&mut self, pos: Point) -> Option<Vec2> {
        let delta = self.last_pos.map(|last| pos - last)?;
        self.last_pos = Some(pos);
        Some(delta)
    }

    /// Ends the drag and clears tracking state.
    pub fn finish(&mut self) {
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    pub fn is_active(&self) -> bool {
        self.last_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_without_begin_yields_nothing() {
        let mut track = DragTrack::default();
        assert_eq!(track.advance(Point::new(5.0, 5.0)), None);
        assert!(!track.is_active());
    }

    #[test]
    fn advance_yields_incremental_deltas() {
        let mut track = DragTrack::default();
        track.begin(Point::new(0.0, 0.0));

        assert_eq!(track.advance(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(track.advance(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(track.advance(Point::new(8.0, 7.0)), Some(Vec2::ZERO));
    }

    #[test]
    fn finish_resets_tracking() {
        let mut track = DragTrack::default();
        track.begin(Point::new(1.0, 1.0));
        track.finish();

        assert!(!track.is_active());
        assert_eq!(track.advance(Point::new(2.0, 2.0)), None);
    }

    #[test]
    fn begin_overwrites_a_previous_drag() {
        let mut track = DragTrack::default();
        track.begin(Point::new(0.0, 0.0));
        track.advance(Point::new(10.0, 10.0));

        track.begin(Point::new(100.0, 100.0));
        assert_eq!(
            track.advance(Point::new(101.0, 99.0)),
            Some(Vec2::new(1.0, -1.0))
        );
    }
}
