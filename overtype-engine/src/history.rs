//! Bounded snapshot history with one cursor.
//!
//! Each entry is a full, immutable clone of the layer collection at one
//! edit step. The sequence is capped at [`HISTORY_CAP`] entries; pushing
//! past the cap evicts the oldest entry and shifts the cursor down so
//! the newest entry stays reachable.
//!
//! A mutation that originates from replaying an undone/redone state must
//! not itself be recorded: `undo`/`redo` arm a one-shot flag that the
//! next `record` call consumes as a no-op.

use overtype_core::TextLayer;

/// Maximum number of retained snapshots.
pub const HISTORY_CAP: usize = 20;

type Snapshot = Vec<TextLayer>;

#[derive(Debug)]
pub struct HistoryManager {
    entries: Vec<Snapshot>,
    cursor: usize,
    replaying: bool,
}

impl HistoryManager {
    /// Seed the history with the session's starting collection, so the
    /// state before the first operation is always reachable by undo.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            replaying: false,
        }
    }

    /// Rebuild from a restored autosave. An empty sequence falls back
    /// to seeding with the restored collection; the cursor is clamped.
    pub fn from_saved(entries: Vec<Snapshot>, cursor: usize, fallback: Snapshot) -> Self {
        if entries.is_empty() {
            return Self::new(fallback);
        }
        let cursor = cursor.min(entries.len() - 1);
        Self {
            entries,
            cursor,
            replaying: false,
        }
    }

    /// Record a new snapshot after a mutation.
    ///
    /// When the mutation came from undo/redo replay, the call consumes
    /// the one-shot flag and records nothing. Otherwise the redo tail is
    /// truncated, the snapshot appended, and the cap enforced.
    pub fn record(&mut self, snapshot: Snapshot) {
        if self.replaying {
            self.replaying = false;
            return;
        }

        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor += 1;

        if self.entries.len() > HISTORY_CAP {
            self.entries.remove(0);
            self.cursor -= 1;
        }
    }

    /// Step back one entry. `None` at the oldest entry (no state
    /// change, cursor unchanged). The returned snapshot is for the
    /// caller to install as the live collection.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.replaying = true;
        self.cursor -= 1;
        Some(self.entries[self.cursor].clone())
    }

    /// Step forward one entry. Mirror of [`undo`](Self::undo).
    pub fn redo(&mut self) -> Option<Snapshot> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.replaying = true;
        self.cursor += 1;
        Some(self.entries[self.cursor].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The stored sequence, for persistence.
    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }
}
