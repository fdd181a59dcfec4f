// PolySketch - Library exports for the binaries and tests

pub mod command;
pub mod config;
pub mod messaging;
pub mod sketch;
pub mod ui;

// Re-export commonly used types for convenience
pub use command::{History, Reversible, SketchCommand, SketchSnapshot, SketchState};
pub use config::SketchConfig;
pub use messaging::{ChangeKind, ChangeNotification, create_change_channel};
pub use sketch::{ClickOutcome, Intent, Point, Polygon, SketchPhase, SketchSession};
