//! Undo history sessions keyed by document.
//!
//! [`UndoHistory`] is the interface the lifecycle hooks notify when editors
//! open and close. Several editors may show one document, so history lives
//! per document and an editor only joins or leaves its document's session.
//!
//! [`UndoSessions`] does that bookkeeping. When the last editor on a document
//! closes, its session is demoted to a retained list instead of being dropped,
//! so reopening the file picks up the old history. The retained list is
//! bounded; the oldest session is released first.
//!
//! # Example
//!
//! ```
//! use vimquill::editor::undo::{UndoHistory, UndoSessions};
//! use vimquill::host::{DocumentId, EditorId};
//!
//! let mut sessions = UndoSessions::new(10);
//! sessions.editor_opened(EditorId(1), DocumentId(7));
//! assert!(sessions.is_active(DocumentId(7)));
//!
//! sessions.editor_closed(EditorId(1));
//! assert!(!sessions.is_active(DocumentId(7)));
//! assert!(sessions.is_retained(DocumentId(7)));
//! ```

use crate::config::Config;
use crate::host::{DocumentId, EditorId};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Receives editor session boundaries.
pub trait UndoHistory {
    /// An editor on `document` started a session.
    fn editor_opened(&mut self, editor: EditorId, document: DocumentId);

    /// An editor's session ended.
    fn editor_closed(&mut self, editor: EditorId);
}

/// History session of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSession {
    /// Editors currently attached, in the order they opened.
    pub editors: Vec<EditorId>,
    /// Sequence number of the open that created the session.
    pub seq: u64,
}

/// Per-document undo sessions with a bounded list of retained ones.
#[derive(Debug, Clone)]
pub struct UndoSessions {
    active: HashMap<DocumentId, DocumentSession>,
    /// Sessions whose editors all closed, oldest first.
    retained: IndexMap<DocumentId, DocumentSession>,
    owners: HashMap<EditorId, DocumentId>,
    next_seq: u64,
    limit: usize,
}

impl UndoSessions {
    /// Creates an empty session table keeping at most `limit` retained sessions.
    pub fn new(limit: usize) -> Self {
        Self {
            active: HashMap::new(),
            retained: IndexMap::new(),
            owners: HashMap::new(),
            next_seq: 0,
            limit,
        }
    }

    /// Creates an empty session table bounded by `undo_session_limit`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.undo_session_limit)
    }

    /// Returns the retained-session limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn session(&self, document: DocumentId) -> Option<&DocumentSession> {
        self.active.get(&document)
    }

    pub fn is_active(&self, document: DocumentId) -> bool {
        self.active.contains_key(&document)
    }

    pub fn is_retained(&self, document: DocumentId) -> bool {
        self.retained.contains_key(&document)
    }

    /// Number of retained sessions.
    pub fn retained_len(&self) -> usize {
        self.retained.len()
    }

    /// Document the editor's session belongs to.
    pub fn document_of(&self, editor: EditorId) -> Option<DocumentId> {
        self.owners.get(&editor).copied()
    }

    fn enforce_limit(&mut self) {
        while self.retained.len() > self.limit {
            if let Some((document, _)) = self.retained.shift_remove_index(0) {
                log::debug!("releasing undo history of {}", document);
            }
        }
    }
}

impl Default for UndoSessions {
    fn default() -> Self {
        Self::new(50)
    }
}

impl UndoHistory for UndoSessions {
    fn editor_opened(&mut self, editor: EditorId, document: DocumentId) {
        if let Some(previous) = self.owners.get(&editor).copied() {
            if previous != document {
                log::warn!("{} reopened on {} while still on {}", editor, document, previous);
                self.editor_closed(editor);
            }
        }
        self.owners.insert(editor, document);

        if !self.active.contains_key(&document) {
            let session = match self.retained.shift_remove(&document) {
                Some(session) => {
                    log::debug!("restoring undo history of {}", document);
                    session
                }
                None => {
                    let seq = self.next_seq;
                    self.next_seq += 1;
                    DocumentSession {
                        editors: Vec::new(),
                        seq,
                    }
                }
            };
            self.active.insert(document, session);
        }

        if let Some(session) = self.active.get_mut(&document) {
            if !session.editors.contains(&editor) {
                session.editors.push(editor);
            }
        }
    }

    fn editor_closed(&mut self, editor: EditorId) {
        let Some(document) = self.owners.remove(&editor) else {
            log::debug!("{} closed without an undo session", editor);
            return;
        };

        let now_empty = match self.active.get_mut(&document) {
            Some(session) => {
                session.editors.retain(|e| *e != editor);
                session.editors.is_empty()
            }
            None => false,
        };

        if now_empty {
            if let Some(session) = self.active.remove(&document) {
                self.retained.insert(document, session);
                self.enforce_limit();
            }
        }
    }
}
