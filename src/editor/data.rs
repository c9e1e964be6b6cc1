//! Editor data facade.
//!
//! `EditorData` is what the rest of the vim layer talks to: it owns the
//! attribute store and the lifecycle hooks and exposes typed accessors for
//! each remembered value.
//!
//! The host is passed to each call that needs it rather than stored, since the
//! host owns the editors and outlives any one call.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use vimquill::config::Config;
//! use vimquill::editor::data::EditorData;
//! use vimquill::editor::marks::MarkRegistry;
//! use vimquill::editor::undo::UndoSessions;
//! use vimquill::host::memory::MemoryHost;
//!
//! let host = MemoryHost::new();
//! let project = host.open_project();
//! let file = host.open_file(project);
//! let editor = host.open_editor(project, file);
//!
//! let marks = Rc::new(RefCell::new(MarkRegistry::new()));
//! let undo = Rc::new(RefCell::new(UndoSessions::new(50)));
//! let mut data = EditorData::with_collaborators(&Config::default(), marks, undo);
//!
//! data.initialize_editor(&host, editor)?;
//! data.set_last_column(editor, 8);
//! assert_eq!(data.last_column(&host, editor)?, 8);
//! assert_eq!(data.project(&host, editor), Some(project));
//! assert_eq!(data.virtual_file(&host, editor), Some(file));
//! data.uninitialize_editor(&host, editor)?;
//! # Ok::<(), vimquill::host::HostError>(())
//! ```

use super::attributes::{AttributeStore, LastColumn, LastVisual, LastVisualOp};
use super::lifecycle::{EditorEvent, EditorListener, LifecycleHooks, MarkTrackingHook, UndoHook};
use super::marks::MarkTracking;
use super::resolver::{self, ResolvePolicy};
use super::undo::UndoHistory;
use super::visual::{VisualChange, VisualRange};
use crate::config::Config;
use crate::host::{EditorHost, EditorId, FileId, HostError, ProjectHost, ProjectId};
use std::cell::RefCell;
use std::rc::Rc;

/// Per-editor state of the vim layer plus its lifecycle wiring.
pub struct EditorData {
    attributes: AttributeStore,
    hooks: LifecycleHooks,
    policy: ResolvePolicy,
}

impl EditorData {
    /// Creates editor data with no lifecycle listeners.
    pub fn new(config: &Config) -> Self {
        Self {
            attributes: AttributeStore::new(),
            hooks: LifecycleHooks::new(),
            policy: config.resolve_policy,
        }
    }

    /// Creates editor data wired to mark tracking and undo history, in that
    /// order.
    pub fn with_collaborators<M, U>(
        config: &Config,
        marks: Rc<RefCell<M>>,
        undo: Rc<RefCell<U>>,
    ) -> Self
    where
        M: MarkTracking + 'static,
        U: UndoHistory + 'static,
    {
        let mut data = Self::new(config);
        data.add_listener(Box::new(
            MarkTrackingHook::new(marks).with_viewers(config.track_marks_in_viewers),
        ));
        data.add_listener(Box::new(UndoHook::new(undo)));
        data
    }

    /// Appends a lifecycle listener after the existing ones.
    pub fn add_listener(&mut self, listener: Box<dyn EditorListener>) {
        self.hooks.register(listener);
    }

    pub fn resolve_policy(&self) -> ResolvePolicy {
        self.policy
    }

    /// Read-only view of the attribute store.
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Runs the open hooks for a newly shown editor.
    pub fn initialize_editor<H: EditorHost>(
        &mut self,
        host: &H,
        editor: EditorId,
    ) -> Result<(), HostError> {
        self.hooks.dispatch(host, EditorEvent::Opened(editor))
    }

    /// Runs the close hooks and drops the editor's attributes.
    pub fn uninitialize_editor<H: EditorHost>(
        &mut self,
        host: &H,
        editor: EditorId,
    ) -> Result<(), HostError> {
        let result = self.hooks.dispatch(host, EditorEvent::Closed(editor));
        self.attributes.remove(editor);
        result
    }

    /// Last column set with [`EditorData::set_last_column`], or the caret's
    /// current visual column if none was set.
    pub fn last_column<H: EditorHost>(
        &self,
        host: &H,
        editor: EditorId,
    ) -> Result<usize, HostError> {
        match self.attributes.get::<LastColumn>(editor) {
            Some(column) => Ok(*column),
            None => host.visual_column(editor),
        }
    }

    pub fn set_last_column(&mut self, editor: EditorId, column: usize) {
        self.attributes.set::<LastColumn>(editor, column);
    }

    /// Previous visual selection, `None` if the editor never left visual mode.
    pub fn last_visual_range(&self, editor: EditorId) -> Option<&VisualRange> {
        self.attributes.get::<LastVisual>(editor)
    }

    pub fn set_last_visual_range(&mut self, editor: EditorId, range: VisualRange) {
        self.attributes.set::<LastVisual>(editor, range);
    }

    /// Previous visual-operator change, `None` if no operator ran over a
    /// visual selection yet.
    pub fn last_visual_operator_range(&self, editor: EditorId) -> Option<&VisualChange> {
        self.attributes.get::<LastVisualOp>(editor)
    }

    pub fn set_last_visual_operator_range(&mut self, editor: EditorId, change: VisualChange) {
        self.attributes.set::<LastVisualOp>(editor, change);
    }

    /// Project owning the editor, scanning the host on first use.
    pub fn project<H: ProjectHost>(&mut self, host: &H, editor: EditorId) -> Option<ProjectId> {
        resolver::resolve_project(&mut self.attributes, host, editor, self.policy)
    }

    /// File the editor shows, scanning the host on first use.
    pub fn virtual_file<H: ProjectHost>(&mut self, host: &H, editor: EditorId) -> Option<FileId> {
        resolver::resolve_virtual_file(&mut self.attributes, host, editor, self.policy)
    }
}
