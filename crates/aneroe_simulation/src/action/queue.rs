//! Priority-ordered multiset of pending state actions.

use std::collections::VecDeque;

use super::StateAction;

/// Stable priority queue (ascending priority, FIFO among equals).
///
/// Typical size ≤ 4, so a sorted `VecDeque` beats a heap here and keeps
/// insertion order for equal priorities for free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionQueue {
    entries: VecDeque<StateAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert after every entry with priority ≤ `action.priority`.
    pub fn enqueue(&mut self, action: StateAction) {
        let position = self
            .entries
            .partition_point(|entry| entry.priority <= action.priority);
        self.entries.insert(position, action);
    }

    /// Lowest-priority entry, `None` when drained.
    pub fn dequeue(&mut self) -> Option<StateAction> {
        self.entries.pop_front()
    }

    /// true if any entry has the template's state.
    ///
    /// The queue itself does not refuse duplicates; callers guard with this.
    pub fn contains_by_compare(&self, template: &StateAction) -> bool {
        self.entries.iter().any(|entry| entry.same_state(template))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateAction> {
        self.entries.iter()
    }
}
