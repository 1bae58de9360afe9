//! Notebook aggregate: an append-only, searchable list of notes

use crate::domain::id_allocator::IdAllocator;
use crate::domain::note::{Note, NoteId};
use chrono::{Local, NaiveDate};
use log::debug;
use std::collections::HashMap;

/// Collection of notes that can be tagged, modified and searched
#[derive(Debug, Clone, Default)]
pub struct Notebook {
    notes: Vec<Note>,
    index: HashMap<NoteId, usize>,
    ids: IdAllocator,
}

impl Notebook {
    /// Create an empty notebook with its own id space
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty notebook drawing ids from a shared allocator
    pub fn with_allocator(ids: IdAllocator) -> Self {
        Notebook {
            notes: Vec::new(),
            index: HashMap::new(),
            ids,
        }
    }

    /// Create a note dated today and append it
    pub fn new_note(&mut self, memo: impl Into<String>, tags: impl Into<String>) -> NoteId {
        self.new_note_dated(memo, tags, Local::now().date_naive())
    }

    /// Create a note with an explicit creation date and append it
    pub fn new_note_dated(
        &mut self,
        memo: impl Into<String>,
        tags: impl Into<String>,
        creation_date: NaiveDate,
    ) -> NoteId {
        let id = self.ids.next_id();
        self.index.insert(id, self.notes.len());
        self.notes
            .push(Note::new(id, memo.into(), tags.into(), creation_date));
        debug!("note created: id={}", id);
        id
    }

    /// Replace the memo of a note. Returns false when the id is unknown.
    pub fn modify_memo(&mut self, note_id: NoteId, memo: impl Into<String>) -> bool {
        match self.find_note_mut(note_id) {
            Some(note) => {
                note.memo = memo.into();
                debug!("note memo modified: id={}", note_id);
                true
            }
            None => false,
        }
    }

    /// Replace the tags of a note. Returns false when the id is unknown.
    pub fn modify_tags(&mut self, note_id: NoteId, tags: impl Into<String>) -> bool {
        match self.find_note_mut(note_id) {
            Some(note) => {
                note.tags = tags.into();
                debug!("note tags modified: id={}", note_id);
                true
            }
            None => false,
        }
    }

    /// All notes matching `filter`, in creation order
    pub fn search(&self, filter: &str) -> Vec<&Note> {
        self.notes.iter().filter(|note| note.matches(filter)).collect()
    }

    pub fn get(&self, note_id: NoteId) -> Option<&Note> {
        self.find_note(note_id)
    }

    /// All notes in creation order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn find_note(&self, note_id: NoteId) -> Option<&Note> {
        self.index.get(&note_id).map(|&pos| &self.notes[pos])
    }

    fn find_note_mut(&mut self, note_id: NoteId) -> Option<&mut Note> {
        let pos = *self.index.get(&note_id)?;
        self.notes.get_mut(pos)
    }
}
