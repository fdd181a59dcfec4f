// Sketch state machine: geometry, click timing, intents and the session
//
// The session wraps every intent as a SketchCommand and runs it through the
// history engine in `crate::command`.

pub mod click;
pub mod geometry;
pub mod intent;
pub mod session;
pub mod shortcuts;

pub use click::{ClickClassifier, ClickKind, DOUBLE_CLICK_THRESHOLD_MS};
pub use geometry::{MIN_POLYGON_VERTICES, Point, Polygon, SketchError};
pub use intent::Intent;
pub use session::{ClickOutcome, SketchPhase, SketchSession};
pub use shortcuts::{ChordModifiers, EditShortcut, shortcut_for};
