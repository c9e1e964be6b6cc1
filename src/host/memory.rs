//! In-memory host for tests and embedding.
//!
//! `MemoryHost` keeps projects, files, editors and document listeners in
//! plain tables. Projects and files enumerate in insertion order, which makes
//! resolver tie-breaking deterministic in tests.
//!
//! Every call to [`ProjectHost::open_projects`] counts as one scan, so tests
//! can observe how often the resolver walked the host.

use super::{
    DocumentChange, DocumentId, DocumentListener, EditorHost, EditorId, FileEditor, FileId,
    HostError, ListenerId, ProjectHost, ProjectId,
};
use indexmap::IndexMap;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone)]
struct EditorEntry {
    document: DocumentId,
    viewer: bool,
    visual_column: usize,
}

struct Registration {
    document: DocumentId,
    editor: EditorId,
    listener: Rc<dyn DocumentListener>,
}

#[derive(Default)]
struct Tables {
    projects: IndexMap<ProjectId, IndexMap<FileId, Vec<FileEditor>>>,
    documents: HashMap<FileId, DocumentId>,
    editors: HashMap<EditorId, EditorEntry>,
    listeners: IndexMap<ListenerId, Registration>,
    next_id: u64,
}

impl Tables {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn document_for(&mut self, file: FileId) -> DocumentId {
        if let Some(document) = self.documents.get(&file) {
            return *document;
        }
        let document = DocumentId(self.next_id());
        self.documents.insert(file, document);
        document
    }

    fn file_editors_mut(&mut self, project: ProjectId, file: FileId) -> &mut Vec<FileEditor> {
        self.projects
            .entry(project)
            .or_default()
            .entry(file)
            .or_default()
    }
}

/// A host application held entirely in memory.
#[derive(Default)]
pub struct MemoryHost {
    tables: RefCell<Tables>,
    scans: Cell<usize>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new, empty project.
    pub fn open_project(&self) -> ProjectId {
        let mut tables = self.tables.borrow_mut();
        let project = ProjectId(tables.next_id());
        tables.projects.insert(project, IndexMap::new());
        project
    }

    /// Closes a project and forgets its open files. Editors stay alive.
    pub fn close_project(&self, project: ProjectId) {
        self.tables.borrow_mut().projects.shift_remove(&project);
    }

    /// Opens a new file in `project` with no editors yet.
    pub fn open_file(&self, project: ProjectId) -> FileId {
        let mut tables = self.tables.borrow_mut();
        let file = FileId(tables.next_id());
        tables.file_editors_mut(project, file);
        file
    }

    /// Lists an already known file as open in another project as well.
    pub fn add_open_file(&self, project: ProjectId, file: FileId) {
        self.tables.borrow_mut().file_editors_mut(project, file);
    }

    /// Closes `file` in `project`.
    pub fn close_file(&self, project: ProjectId, file: FileId) {
        if let Some(files) = self.tables.borrow_mut().projects.get_mut(&project) {
            files.shift_remove(&file);
        }
    }

    /// Opens a writable text editor on `file`.
    pub fn open_editor(&self, project: ProjectId, file: FileId) -> EditorId {
        self.create_editor(project, file, false)
    }

    /// Opens a read-only viewer on `file`.
    pub fn open_viewer(&self, project: ProjectId, file: FileId) -> EditorId {
        self.create_editor(project, file, true)
    }

    fn create_editor(&self, project: ProjectId, file: FileId, viewer: bool) -> EditorId {
        let mut tables = self.tables.borrow_mut();
        let editor = EditorId(tables.next_id());
        let document = tables.document_for(file);
        tables.editors.insert(
            editor,
            EditorEntry {
                document,
                viewer,
                visual_column: 0,
            },
        );
        tables
            .file_editors_mut(project, file)
            .push(FileEditor::Text(editor));
        editor
    }

    /// Lists an existing editor as a file editor of another file.
    ///
    /// Hosts should never do this; it exists to exercise resolver tie-breaking.
    pub fn attach_editor(&self, project: ProjectId, file: FileId, editor: EditorId) {
        self.tables
            .borrow_mut()
            .file_editors_mut(project, file)
            .push(FileEditor::Text(editor));
    }

    /// Adds a non-text file editor (image viewer, designer) for `file`.
    pub fn open_other_editor(&self, project: ProjectId, file: FileId) {
        self.tables
            .borrow_mut()
            .file_editors_mut(project, file)
            .push(FileEditor::Other);
    }

    /// Closes an editor, dropping it from every file and releasing its listeners.
    pub fn close_editor(&self, editor: EditorId) {
        let mut tables = self.tables.borrow_mut();
        tables.editors.remove(&editor);
        for files in tables.projects.values_mut() {
            for editors in files.values_mut() {
                editors.retain(|candidate| candidate.text_editor() != Some(editor));
            }
        }
        tables
            .listeners
            .retain(|_, registration| registration.editor != editor);
    }

    /// Moves the editor's caret to a visual column.
    pub fn set_visual_column(&self, editor: EditorId, column: usize) -> Result<(), HostError> {
        let mut tables = self.tables.borrow_mut();
        let entry = tables
            .editors
            .get_mut(&editor)
            .ok_or(HostError::UnknownEditor(editor))?;
        entry.visual_column = column;
        Ok(())
    }

    /// Applies a change to the editor's document and notifies every listener
    /// registered on that document, in registration order.
    pub fn edit(&self, editor: EditorId, change: DocumentChange) -> Result<(), HostError> {
        let listeners: Vec<Rc<dyn DocumentListener>> = {
            let tables = self.tables.borrow();
            let document = tables
                .editors
                .get(&editor)
                .ok_or(HostError::UnknownEditor(editor))?
                .document;
            tables
                .listeners
                .values()
                .filter(|registration| registration.document == document)
                .map(|registration| Rc::clone(&registration.listener))
                .collect()
        };

        // Listeners run without the tables borrowed so they may call back in.
        for listener in listeners {
            listener.document_changed(&change);
        }
        Ok(())
    }

    /// Number of times the open projects were enumerated.
    pub fn scan_count(&self) -> usize {
        self.scans.get()
    }

    /// Number of document listeners registered through `editor`.
    pub fn listener_count(&self, editor: EditorId) -> usize {
        self.tables
            .borrow()
            .listeners
            .values()
            .filter(|registration| registration.editor == editor)
            .count()
    }
}

impl EditorHost for MemoryHost {
    fn visual_column(&self, editor: EditorId) -> Result<usize, HostError> {
        self.tables
            .borrow()
            .editors
            .get(&editor)
            .map(|entry| entry.visual_column)
            .ok_or(HostError::UnknownEditor(editor))
    }

    fn is_viewer(&self, editor: EditorId) -> Result<bool, HostError> {
        self.tables
            .borrow()
            .editors
            .get(&editor)
            .map(|entry| entry.viewer)
            .ok_or(HostError::UnknownEditor(editor))
    }

    fn document(&self, editor: EditorId) -> Result<DocumentId, HostError> {
        self.tables
            .borrow()
            .editors
            .get(&editor)
            .map(|entry| entry.document)
            .ok_or(HostError::UnknownEditor(editor))
    }

    fn add_document_listener(
        &self,
        editor: EditorId,
        listener: Rc<dyn DocumentListener>,
    ) -> Result<ListenerId, HostError> {
        let mut tables = self.tables.borrow_mut();
        let document = tables
            .editors
            .get(&editor)
            .ok_or(HostError::UnknownEditor(editor))?
            .document;
        let id = ListenerId(tables.next_id());
        tables.listeners.insert(
            id,
            Registration {
                document,
                editor,
                listener,
            },
        );
        Ok(id)
    }

    fn remove_document_listener(&self, listener: ListenerId) -> Result<(), HostError> {
        self.tables
            .borrow_mut()
            .listeners
            .shift_remove(&listener)
            .map(|_| ())
            .ok_or(HostError::UnknownListener(listener))
    }
}

impl ProjectHost for MemoryHost {
    fn open_projects(&self) -> Vec<ProjectId> {
        self.scans.set(self.scans.get() + 1);
        self.tables.borrow().projects.keys().copied().collect()
    }

    fn open_files(&self, project: ProjectId) -> Vec<FileId> {
        self.tables
            .borrow()
            .projects
            .get(&project)
            .map(|files| files.keys().copied().collect())
            .unwrap_or_default()
    }

    fn file_editors(&self, project: ProjectId, file: FileId) -> Vec<FileEditor> {
        self.tables
            .borrow()
            .projects
            .get(&project)
            .and_then(|files| files.get(&file))
            .cloned()
            .unwrap_or_default()
    }
}
