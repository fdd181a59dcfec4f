// Reversible trait definition

/// Trait for commands that can be applied to and reverted from a state
///
/// Implementations must be deterministic: `revert` undoes exactly what the
/// matching `apply` did, and calling `apply` again after `revert` reproduces
/// the same state. The history engine relies on this to replay commands
/// during redo without storing extra snapshots.
///
/// `revert` is only ever called on a command that was just applied (or
/// re-applied) through [`History`](crate::command::History), so an
/// implementation may treat a mismatched state as a bug rather than an
/// error.
///
/// # Example
/// ```
/// use polysketch::command::{History, Reversible};
///
/// struct Increment(i32);
///
/// impl Reversible<i32> for Increment {
///     fn apply(&self, state: &mut i32) {
///         *state += self.0;
///     }
///
///     fn revert(&self, state: &mut i32) {
///         *state -= self.0;
///     }
///
///     fn description(&self) -> String {
///         format!("Add {}", self.0)
///     }
/// }
///
/// let mut counter = 0;
/// let mut history = History::new();
/// history.execute(Increment(5), &mut counter);
/// assert_eq!(counter, 5);
/// assert_eq!(history.undo(&mut counter).as_deref(), Some("Add 5"));
/// assert_eq!(counter, 0);
/// ```
pub trait Reversible<S> {
    /// Apply the command to the state
    fn apply(&self, state: &mut S);

    /// Revert a previous `apply`
    fn revert(&self, state: &mut S);

    /// Get a human-readable description of the command
    ///
    /// Used for UI display (e.g., "Undo: Close polygon (3 vertices)")
    fn description(&self) -> String;
}
