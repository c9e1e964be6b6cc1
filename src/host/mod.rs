//! Capabilities the host editing application provides.
//!
//! Editors, documents, projects and files are owned by the host. This crate
//! only ever holds their handles and talks to the host through the narrow
//! traits defined here:
//!
//! - [`EditorHost`]: per-editor queries and document listener registration
//! - [`ProjectHost`]: enumeration of open projects, their open files, and the
//!   file editors showing each file
//!
//! [`memory::MemoryHost`] implements both over plain in-memory tables.
//!
//! # Example
//!
//! ```
//! use vimquill::host::memory::MemoryHost;
//! use vimquill::host::{EditorHost, ProjectHost};
//!
//! let host = MemoryHost::new();
//! let project = host.open_project();
//! let file = host.open_file(project);
//! let editor = host.open_editor(project, file);
//!
//! assert_eq!(host.open_projects(), vec![project]);
//! assert_eq!(host.visual_column(editor), Ok(0));
//! ```

pub mod error;
pub mod memory;

pub use error::HostError;

use std::fmt;
use std::rc::Rc;

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

handle!(
    /// Handle to one open editor view.
    EditorId,
    "editor"
);
handle!(
    /// Handle to a document. Several editors may share one document.
    DocumentId,
    "document"
);
handle!(
    /// Handle to an open project.
    ProjectId,
    "project"
);
handle!(
    /// Handle to a virtual file, independent of any editor showing it.
    FileId,
    "file"
);
handle!(
    /// Registration token returned by [`EditorHost::add_document_listener`].
    ListenerId,
    "listener"
);

/// One editor the host shows for an open file.
///
/// Only text editors carry an editor handle. Other kinds (image viewers,
/// diff panes, designers) never match during project/file resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEditor {
    Text(EditorId),
    Other,
}

impl FileEditor {
    /// Returns the underlying text editor, if this file editor supports text editing.
    pub fn text_editor(&self) -> Option<EditorId> {
        match self {
            FileEditor::Text(editor) => Some(*editor),
            FileEditor::Other => None,
        }
    }
}

/// A content change applied to a document.
///
/// `old_len` characters starting at `offset` were replaced by `new_len`
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentChange {
    pub offset: usize,
    pub old_len: usize,
    pub new_len: usize,
}

impl DocumentChange {
    pub fn insert(offset: usize, len: usize) -> Self {
        Self {
            offset,
            old_len: 0,
            new_len: len,
        }
    }

    pub fn delete(offset: usize, len: usize) -> Self {
        Self {
            offset,
            old_len: len,
            new_len: 0,
        }
    }

    pub fn replace(offset: usize, old_len: usize, new_len: usize) -> Self {
        Self {
            offset,
            old_len,
            new_len,
        }
    }

    /// End offset of the replaced region, in pre-change coordinates.
    pub fn old_end(&self) -> usize {
        self.offset + self.old_len
    }
}

/// Receives content changes for the document an editor is showing.
pub trait DocumentListener {
    fn document_changed(&self, change: &DocumentChange);
}

/// Per-editor queries the host answers.
pub trait EditorHost {
    /// Current visual column of the editor's primary caret.
    fn visual_column(&self, editor: EditorId) -> Result<usize, HostError>;

    /// Whether the editor is a read-only viewer.
    fn is_viewer(&self, editor: EditorId) -> Result<bool, HostError>;

    /// The document backing the editor.
    fn document(&self, editor: EditorId) -> Result<DocumentId, HostError>;

    /// Registers a listener on the editor's document.
    fn add_document_listener(
        &self,
        editor: EditorId,
        listener: Rc<dyn DocumentListener>,
    ) -> Result<ListenerId, HostError>;

    /// Removes a listener registered with [`EditorHost::add_document_listener`].
    fn remove_document_listener(&self, listener: ListenerId) -> Result<(), HostError>;
}

/// Enumeration of what the host currently has open.
///
/// Ordering of every list is host-defined and need not be stable between
/// calls.
pub trait ProjectHost {
    fn open_projects(&self) -> Vec<ProjectId>;

    fn open_files(&self, project: ProjectId) -> Vec<FileId>;

    fn file_editors(&self, project: ProjectId, file: FileId) -> Vec<FileEditor>;
}
