//! Mark management for bookmarking offsets in a document.
//!
//! [`MarkTracking`] is the interface the lifecycle hooks feed document changes
//! into. [`MarkRegistry`] is a small implementation keeping one [`MarkSet`] per
//! editor and shifting marks as text moves under them.

use crate::host::{DocumentChange, EditorId};
use std::collections::HashMap;

/// Receives content changes for editors whose marks must follow the text.
pub trait MarkTracking {
    fn on_document_changed(&mut self, editor: EditorId, change: &DocumentChange);

    /// The editor closed; its editor-local marks can go.
    fn editor_closed(&mut self, _editor: EditorId) {}
}

/// Local marks (a-z) of one editor, stored as character offsets.
///
/// Marks persist for the editor's session and are dropped when the editor
/// closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkSet {
    /// Map from mark name to document offset
    marks: HashMap<char, usize>,
}

impl MarkSet {
    /// Creates a new empty mark set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a mark at the given offset.
    ///
    /// # Arguments
    ///
    /// * `name` - Mark name (should be a-z, but not validated here)
    /// * `offset` - Character offset of the marked position
    pub fn set_mark(&mut self, name: char, offset: usize) {
        self.marks.insert(name, offset);
    }

    /// Gets the offset for a mark.
    ///
    /// Returns None if the mark is not set.
    pub fn get_mark(&self, name: char) -> Option<usize> {
        self.marks.get(&name).copied()
    }

    /// Clears all marks.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Lists all set marks as (name, offset) pairs, sorted by name.
    pub fn list(&self) -> Vec<(char, usize)> {
        let mut result: Vec<_> = self.marks.iter().map(|(&c, &o)| (c, o)).collect();
        result.sort_by_key(|(c, _)| *c);
        result
    }

    /// Moves marks to follow a content change.
    ///
    /// Marks before the change stay put, marks after it shift by the length
    /// difference, and marks inside replaced text are removed.
    pub fn apply_change(&mut self, change: &DocumentChange) {
        let old_end = change.old_end();
        self.marks.retain(|_, offset| {
            if *offset < change.offset {
                return true;
            }
            if *offset < old_end {
                return false;
            }
            *offset = *offset - change.old_len + change.new_len;
            true
        });
    }
}

/// Mark sets for every editor that has marks.
#[derive(Debug, Clone, Default)]
pub struct MarkRegistry {
    editors: HashMap<EditorId, MarkSet>,
}

impl MarkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marks(&self, editor: EditorId) -> Option<&MarkSet> {
        self.editors.get(&editor)
    }

    /// Returns the editor's mark set, creating an empty one if needed.
    pub fn marks_mut(&mut self, editor: EditorId) -> &mut MarkSet {
        self.editors.entry(editor).or_default()
    }

    /// Drops all marks of an editor.
    pub fn forget(&mut self, editor: EditorId) {
        self.editors.remove(&editor);
    }
}

impl MarkTracking for MarkRegistry {
    fn on_document_changed(&mut self, editor: EditorId, change: &DocumentChange) {
        if let Some(marks) = self.editors.get_mut(&editor) {
            marks.apply_change(change);
        }
    }

    fn editor_closed(&mut self, editor: EditorId) {
        self.forget(editor);
    }
}
