//! Snapshot history.

use super::Board;
use serde::Serialize;
use std::ops::Index;

/// Ordered board snapshots, oldest first.
///
/// Never empty: entry 0 is the empty starting board. Entries are only added
/// through [`History::branch`], which drops everything after the branch point
/// before appending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(crate) snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots (at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> &Board {
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Iterates snapshots, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.snapshots.iter()
    }

    /// Keeps snapshots `0..=from`, then appends `next`.
    ///
    /// When `from` is the last index nothing is dropped.
    pub(crate) fn branch(&mut self, from: usize, next: Board) {
        self.snapshots.truncate(from + 1);
        self.snapshots.push(next);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for History {
    type Output = Board;

    fn index(&self, index: usize) -> &Board {
        &self.snapshots[index]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_starts_with_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), &Board::new());
    }

    #[test]
    fn test_branch_at_end_appends() {
        let mut history = History::new();
        history.branch(0, board("X........"));
        history.branch(1, board("X...O...."));
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest(), &board("X...O...."));
    }

    #[test]
    fn test_branch_in_middle_truncates() {
        let mut history = History::new();
        history.branch(0, board("X........"));
        history.branch(1, board("X...O...."));
        history.branch(2, board("X...O...X"));

        history.branch(0, board("....X...."));
        assert_eq!(history.len(), 2);
        assert_eq!(history[1], board("....X...."));
    }
}
