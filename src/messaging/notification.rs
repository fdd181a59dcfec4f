// Change notifications sent to the renderer after every effective edit

use std::time::{SystemTime, UNIX_EPOCH};

/// What kind of history step produced the change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Executed,
    Undone,
    Redone,
}

/// Notification with timestamp and the command that caused it
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeNotification {
    pub kind: ChangeKind,
    /// Session revision after the change
    pub revision: u64,
    /// Description of the command that was executed, undone or redone
    pub description: String,
    pub timestamp: u64, // Unix timestamp in milliseconds
}

impl ChangeNotification {
    /// Create a notification stamped with the current time
    pub fn new(kind: ChangeKind, revision: u64, description: String) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        Self {
            kind,
            revision,
            description,
            timestamp,
        }
    }

    /// Status-bar text, e.g. "Undo: Add point (10, 20)"
    pub fn status_text(&self) -> String {
        match self.kind {
            ChangeKind::Executed => self.description.clone(),
            ChangeKind::Undone => format!("Undo: {}", self.description),
            ChangeKind::Redone => format!("Redo: {}", self.description),
        }
    }

    /// Check whether the notification is younger than `max_age_ms`
    pub fn is_recent(&self, max_age_ms: u64) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        now.saturating_sub(self.timestamp) < max_age_ms
    }
}
