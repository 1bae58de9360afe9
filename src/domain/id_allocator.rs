//! Note id allocation

use crate::domain::note::NoteId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out strictly increasing note ids.
///
/// Clones share the same counter, so several notebooks built from clones of
/// one allocator never reuse an id, even across threads.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: Arc<AtomicU64>,
}

impl IdAllocator {
    /// Create an allocator whose first id is 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id
    pub fn next_id(&self) -> NoteId {
        NoteId::new(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// The most recently allocated id, if any
    pub fn last_id(&self) -> Option<NoteId> {
        match self.last.load(Ordering::Relaxed) {
            0 => None,
            n => Some(NoteId::new(n)),
        }
    }
}
