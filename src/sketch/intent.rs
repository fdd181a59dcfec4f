// Input intents delivered by input adapters

use serde::{Deserialize, Serialize};

/// A user intent, already stripped of device details
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Primary-button click on the canvas
    PointerClick { x: f64, y: f64, timestamp_ms: i64 },
    Undo,
    Redo,
}

impl Intent {
    pub fn click(x: f64, y: f64, timestamp_ms: i64) -> Self {
        Self::PointerClick { x, y, timestamp_ms }
    }
}
