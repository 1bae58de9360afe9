//! Note record and its identifier

use crate::error::{MemomailError, Result};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Identifier of a note, unique within the allocator that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(u64);

impl NoteId {
    pub fn new(value: u64) -> Self {
        NoteId(value)
    }

}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NoteId {
    fn from(value: u64) -> Self {
        NoteId(value)
    }
}

impl FromStr for NoteId {
    type Err = MemomailError;

    /// Parse user input such as `"3"` or `" 3 "` into a note id.
    ///
    /// Only the canonical decimal form is accepted: no sign, no leading zeros.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim();
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'));
        if !canonical {
            return Err(MemomailError::InvalidNoteId(s.to_string()));
        }
        digits
            .parse::<u64>()
            .map(NoteId)
            .map_err(|_| MemomailError::InvalidNoteId(s.to_string()))
    }
}

/// A short text note with free-form tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    pub memo: String,
    /// Space-separated tags, matched by substring only
    pub tags: String,
    creation_date: NaiveDate,
}

impl Note {
    pub(crate) fn new(id: NoteId, memo: String, tags: String, creation_date: NaiveDate) -> Self {
        Note {
            id,
            memo,
            tags,
            creation_date,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    /// Case-sensitive substring match against memo or tags
    ///
    /// # Examples
    ///
    /// ```
    /// use memomail::domain::Notebook;
    ///
    /// let mut notebook = Notebook::new();
    /// let id = notebook.new_note("water plants", "tag1 home");
    /// let note = notebook.get(id).unwrap();
    /// assert!(note.matches("ag"));
    /// assert!(note.matches("plants"));
    /// assert!(!note.matches("Plants"));
    /// ```
    pub fn matches(&self, filter: &str) -> bool {
        self.memo.contains(filter) || self.tags.contains(filter)
    }
}
