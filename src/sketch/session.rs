// SketchSession - Owns the drawing state and turns intents into commands

use crate::command::{History, Reversible, SketchCommand, SketchSnapshot, SketchState};
use crate::config::SketchConfig;
use crate::messaging::{ChangeKind, ChangeNotification, ChangeProducer};
use crate::sketch::click::{ClickClassifier, ClickKind};
use crate::sketch::geometry::{MIN_POLYGON_VERTICES, Point};
use crate::sketch::intent::Intent;

/// Drawing phase, derived from the number of in-progress vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchPhase {
    /// No vertices: the next click starts a polygon
    Empty,
    /// One or two vertices: too few to close
    Drawing,
    /// Three or more vertices: a double-click closes the polygon
    Closeable,
}

impl SketchPhase {
    pub fn for_vertex_count(count: usize) -> Self {
        match count {
            0 => Self::Empty,
            n if n < MIN_POLYGON_VERTICES => Self::Drawing,
            _ => Self::Closeable,
        }
    }
}

/// What a pointer click ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A vertex was appended
    Added,
    /// The in-progress polygon was closed
    Closed,
    /// Second half of a double-click with too few vertices; nothing happened
    Ignored,
}

impl ClickOutcome {
    pub fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// One sketching session: state, history and click timing
///
/// The state is only ever changed through [`SketchCommand`]s executed on
/// the session's [`History`]. After every effective change the revision is
/// bumped and, if a channel is attached, a [`ChangeNotification`] is pushed.
pub struct SketchSession {
    state: SketchState,
    history: History<SketchCommand>,
    clicks: ClickClassifier,
    revision: u64,
    change_tx: Option<ChangeProducer>,
}

impl SketchSession {
    /// Create a session with default settings
    pub fn new() -> Self {
        Self::with_config(&SketchConfig::default())
    }

    pub fn with_config(config: &SketchConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => History::with_limit(limit),
            None => History::new(),
        };

        Self {
            state: SketchState::new(),
            history,
            clicks: ClickClassifier::new(config.double_click_threshold_ms),
            revision: 0,
            change_tx: None,
        }
    }

    /// Attach the producer side of a change channel
    pub fn with_change_channel(mut self, change_tx: ChangeProducer) -> Self {
        self.change_tx = Some(change_tx);
        self
    }

    /// Handle any intent; returns true if the sketch changed
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::PointerClick { x, y, timestamp_ms } => {
                self.pointer_click(x, y, timestamp_ms).changed()
            }
            Intent::Undo => self.undo_requested(),
            Intent::Redo => self.redo_requested(),
        }
    }

    /// Dispatch a sequence of intents in order; returns how many changed the sketch
    pub fn replay<I>(&mut self, intents: I) -> usize
    where
        I: IntoIterator<Item = Intent>,
    {
        intents
            .into_iter()
            .filter(|&intent| self.dispatch(intent))
            .count()
    }

    /// Handle a primary click at canvas position `(x, y)`
    ///
    /// The first click of a double-click pair always adds a vertex. The
    /// second one closes the polygon if there are at least three vertices
    /// and is dropped otherwise; the vertex added by the first click stays.
    pub fn pointer_click(&mut self, x: f64, y: f64, timestamp_ms: i64) -> ClickOutcome {
        match self.clicks.classify(timestamp_ms) {
            ClickKind::Single => {
                self.execute(SketchCommand::add_point((x, y)));
                ClickOutcome::Added
            }
            ClickKind::DoubleSecond => match self.phase() {
                SketchPhase::Closeable => match SketchCommand::close_polygon(self.state.current_points()) {
                    Ok(command) => {
                        self.execute(command);
                        ClickOutcome::Closed
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "closeable phase produced an invalid polygon");
                        ClickOutcome::Ignored
                    }
                },
                phase => {
                    tracing::debug!(
                        ?phase,
                        vertices = self.state.current_points().len(),
                        "double-click dropped"
                    );
                    ClickOutcome::Ignored
                }
            },
        }
    }

    /// Undo the last command; no-op (returns false) if there is none
    pub fn undo_requested(&mut self) -> bool {
        match self.history.undo(&mut self.state) {
            Some(description) => {
                self.changed(ChangeKind::Undone, description);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone command; no-op (returns false) if there is none
    pub fn redo_requested(&mut self) -> bool {
        match self.history.redo(&mut self.state) {
            Some(description) => {
                self.changed(ChangeKind::Redone, description);
                true
            }
            None => false,
        }
    }

    /// Execute a command on the history and notify
    pub fn execute(&mut self, command: SketchCommand) {
        let description = command.description();
        self.history.execute(command, &mut self.state);
        self.changed(ChangeKind::Executed, description);
    }

    pub fn snapshot(&self) -> SketchSnapshot<'_> {
        self.state.snapshot(self.revision)
    }

    pub fn state(&self) -> &SketchState {
        &self.state
    }

    pub fn phase(&self) -> SketchPhase {
        SketchPhase::for_vertex_count(self.state.current_points().len())
    }

    /// Segment from the last vertex to `cursor` for the rubber-band preview
    pub fn preview_segment(&self, cursor: Point) -> Option<(Point, Point)> {
        self.snapshot().preview_segment(cursor)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn history(&self) -> &History<SketchCommand> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.history.undo_description::<SketchState>()
    }

    pub fn redo_description(&self) -> Option<String> {
        self.history.redo_description::<SketchState>()
    }

    fn changed(&mut self, kind: ChangeKind, description: String) {
        self.revision += 1;

        let Some(change_tx) = self.change_tx.as_mut() else {
            return;
        };

        let notification = ChangeNotification::new(kind, self.revision, description);
        if ringbuf::traits::Producer::try_push(change_tx, notification).is_err() {
            tracing::warn!(revision = self.revision, "change channel full, notification dropped");
        }
    }
}

impl Default for SketchSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::create_change_channel;

    fn click_far_apart(session: &mut SketchSession, points: &[(f64, f64)]) {
        for (i, &(x, y)) in points.iter().enumerate() {
            session.pointer_click(x, y, i as i64 * 1_000);
        }
    }

    #[test]
    fn test_phase_transitions() {
        assert_eq!(SketchPhase::for_vertex_count(0), SketchPhase::Empty);
        assert_eq!(SketchPhase::for_vertex_count(1), SketchPhase::Drawing);
        assert_eq!(SketchPhase::for_vertex_count(2), SketchPhase::Drawing);
        assert_eq!(SketchPhase::for_vertex_count(3), SketchPhase::Closeable);
        assert_eq!(SketchPhase::for_vertex_count(12), SketchPhase::Closeable);
    }

    #[test]
    fn test_double_click_closes_triangle() {
        let mut session = SketchSession::new();
        click_far_apart(&mut session, &[(0.0, 0.0), (10.0, 0.0)]);

        // Double-click: the first half adds the third vertex, the second closes
        assert_eq!(session.pointer_click(10.0, 10.0, 5_000), ClickOutcome::Added);
        assert_eq!(session.phase(), SketchPhase::Closeable);
        assert_eq!(session.pointer_click(10.0, 10.0, 5_150), ClickOutcome::Closed);

        assert_eq!(session.phase(), SketchPhase::Empty);
        assert_eq!(session.state().polygons().len(), 1);
        assert_eq!(session.state().polygons()[0].len(), 3);
    }

    #[test]
    fn test_double_click_with_two_points_keeps_first_half() {
        let mut session = SketchSession::new();
        session.pointer_click(0.0, 0.0, 0);

        assert_eq!(session.pointer_click(5.0, 5.0, 2_000), ClickOutcome::Added);
        assert_eq!(session.pointer_click(5.0, 5.0, 2_100), ClickOutcome::Ignored);

        assert_eq!(session.state().current_points().len(), 2);
        assert!(session.state().polygons().is_empty());
        assert_eq!(session.history().undo_count(), 2);
    }

    #[test]
    fn test_undo_on_fresh_session_is_noop() {
        let mut session = SketchSession::new();

        assert!(!session.undo_requested());
        assert!(!session.redo_requested());
        assert_eq!(session.revision(), 0);
        assert!(session.snapshot().is_empty());
    }

    #[test]
    fn test_revision_bumps_only_on_effective_changes() {
        let mut session = SketchSession::new();
        session.pointer_click(0.0, 0.0, 0);
        session.pointer_click(0.0, 0.0, 100); // dropped double-click
        assert_eq!(session.revision(), 1);

        session.undo_requested();
        session.undo_requested(); // nothing left
        assert_eq!(session.revision(), 2);

        session.redo_requested();
        assert_eq!(session.snapshot().revision, 3);
    }

    #[test]
    fn test_notifications_pushed_to_channel() {
        let (tx, mut rx) = create_change_channel(8);
        let mut session = SketchSession::new().with_change_channel(tx);

        session.pointer_click(1.0, 2.0, 0);
        session.undo_requested();
        session.redo_requested();
        session.redo_requested(); // no-op, no notification

        let kinds: Vec<ChangeKind> =
            std::iter::from_fn(|| ringbuf::traits::Consumer::try_pop(&mut rx))
                .map(|n| n.kind)
                .collect();
        assert_eq!(
            kinds,
            vec![ChangeKind::Executed, ChangeKind::Undone, ChangeKind::Redone]
        );
    }

    #[test]
    fn test_full_channel_does_not_block_edits() {
        let (tx, _rx) = create_change_channel(1);
        let mut session = SketchSession::new().with_change_channel(tx);

        click_far_apart(&mut session, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert_eq!(session.state().current_points().len(), 3);
        assert_eq!(session.revision(), 3);
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let mut session = SketchSession::new();

        assert!(session.dispatch(Intent::click(3.0, 4.0, 0)));
        assert_eq!(session.undo_description().as_deref(), Some("Add point (3, 4)"));
        assert!(session.dispatch(Intent::Undo));
        assert_eq!(session.redo_description().as_deref(), Some("Add point (3, 4)"));
        assert!(session.dispatch(Intent::Redo));
        assert!(!session.dispatch(Intent::Redo));
        assert!(session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn test_configured_threshold_and_limit() {
        let config = SketchConfig {
            double_click_threshold_ms: 50,
            history_limit: Some(2),
            ..SketchConfig::default()
        };
        let mut session = SketchSession::with_config(&config);

        // 100 ms apart is a double-click by default but not with a 50 ms threshold
        session.pointer_click(0.0, 0.0, 0);
        session.pointer_click(1.0, 0.0, 100);
        session.pointer_click(1.0, 1.0, 200);

        assert_eq!(session.state().current_points().len(), 3);
        assert_eq!(session.history().undo_count(), 2);
    }

    #[test]
    fn test_preview_segment_follows_last_vertex() {
        let mut session = SketchSession::new();
        let cursor = Point::new(50.0, 50.0);
        assert_eq!(session.preview_segment(cursor), None);

        click_far_apart(&mut session, &[(0.0, 0.0), (10.0, 0.0)]);
        assert_eq!(
            session.preview_segment(cursor),
            Some((Point::new(10.0, 0.0), cursor))
        );
    }
}
