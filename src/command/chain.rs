//! Iteration over the active path.

use crate::command::node::Command;

/// Iterator from a command down its chain of active sub-commands.
///
/// Yields the starting command first and the deepest resolved command last.
#[derive(Debug, Clone)]
pub struct ActiveChain<'a> {
    next: Option<&'a Command>,
}

impl<'a> ActiveChain<'a> {
    pub(crate) fn new(start: &'a Command) -> Self {
        Self { next: Some(start) }
    }
}

impl<'a> Iterator for ActiveChain<'a> {
    type Item = &'a Command;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.active();
        Some(current)
    }
}
