// Command Pattern for Undo/Redo functionality
//
// Every change to the sketch goes through a reversible command so the
// history engine can undo and redo it.
//
// Architecture:
// - Reversible trait: Defines apply(), revert(), description()
// - History: Manages undo/redo stacks, generic over the command type
// - SketchCommand: AddPoint / ClosePolygon acting on SketchState

pub mod commands;
pub mod manager;
pub mod state;
pub mod trait_def;

pub use commands::SketchCommand;
pub use manager::History;
pub use state::{SketchSnapshot, SketchState};
pub use trait_def::Reversible;
