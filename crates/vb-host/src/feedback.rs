//! Optional visual feedback.

use vb_core::Team;

/// Flashes a team's court after it wins a point.  Both methods default to
/// doing nothing, so headless hosts implement nothing.
pub trait FeedbackSink {
    fn flash(&mut self, _team: Team, _secs: f32) {}

    fn clear_flash(&mut self, _team: Team) {}
}
