// History - Manages undo/redo stacks

use crate::command::trait_def::Reversible;
use std::collections::VecDeque;

/// Manages command execution and undo/redo functionality
///
/// The History maintains two stacks:
/// - Undo stack: Commands that have been applied and can be reverted
/// - Redo stack: Commands that have been reverted and can be re-applied
///
/// When a new command is executed:
/// 1. Apply the command
/// 2. Push it onto the undo stack
/// 3. Clear the redo stack (since we're on a new timeline)
///
/// # Memory Management
/// By default the history is unbounded, so replaying the undo stack from an
/// empty state always reproduces the current state. With a limit set, the
/// oldest command is dropped once the undo stack grows past it.
pub struct History<C> {
    /// Stack of commands that can be undone (most recent at the back)
    undo_stack: VecDeque<C>,

    /// Stack of commands that can be redone (most recent at the back)
    redo_stack: VecDeque<C>,

    /// Maximum number of commands to keep in the undo stack
    max_history: Option<usize>,
}

impl<C> History<C> {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_history: None,
        }
    }

    /// Create a history that keeps at most `max_history` undoable commands
    pub fn with_limit(max_history: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(max_history),
            redo_stack: VecDeque::with_capacity(max_history),
            max_history: Some(max_history),
        }
    }

    /// Execute a command and add it to the undo stack
    ///
    /// This will:
    /// 1. Apply the command
    /// 2. Add it to the undo stack
    /// 3. Clear the redo stack (new timeline)
    /// 4. Trim history if needed
    pub fn execute<S>(&mut self, command: C, state: &mut S)
    where
        C: Reversible<S>,
    {
        command.apply(state);
        tracing::debug!(command = %command.description(), "executed");

        self.undo_stack.push_back(command);
        self.redo_stack.clear();

        if let Some(limit) = self.max_history {
            while self.undo_stack.len() > limit {
                self.undo_stack.pop_front();
            }
        }
    }

    /// Undo the last command
    ///
    /// Pops the last command from the undo stack, reverts it, and pushes it
    /// to the redo stack. Returns the command's description, or `None` if
    /// there was nothing to undo (in which case nothing happens).
    pub fn undo<S>(&mut self, state: &mut S) -> Option<String>
    where
        C: Reversible<S>,
    {
        let command = self.undo_stack.pop_back()?;
        let description = command.description();

        command.revert(state);
        tracing::debug!(command = %description, "undone");

        self.redo_stack.push_back(command);
        Some(description)
    }

    /// Redo the last undone command
    ///
    /// Pops the last command from the redo stack, applies it again, and
    /// pushes it to the undo stack. Returns `None` if there was nothing to
    /// redo.
    pub fn redo<S>(&mut self, state: &mut S) -> Option<String>
    where
        C: Reversible<S>,
    {
        let command = self.redo_stack.pop_back()?;
        let description = command.description();

        command.apply(state);
        tracing::debug!(command = %description, "redone");

        self.undo_stack.push_back(command);
        Some(description)
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get a description of the command that would be undone
    pub fn undo_description<S>(&self) -> Option<String>
    where
        C: Reversible<S>,
    {
        self.undo_stack.back().map(|cmd| cmd.description())
    }

    /// Get a description of the command that would be redone
    pub fn redo_description<S>(&self) -> Option<String>
    where
        C: Reversible<S>,
    {
        self.redo_stack.back().map(|cmd| cmd.description())
    }

    /// Commands on the undo stack, oldest first
    pub fn undo_commands(&self) -> impl Iterator<Item = &C> {
        self.undo_stack.iter()
    }

    /// Clear all command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get the number of commands in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of commands in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_history(&self) -> Option<usize> {
        self.max_history
    }
}

impl<C> Default for History<C> {
    fn default() -> Self {
        Self::new()
    }
}
