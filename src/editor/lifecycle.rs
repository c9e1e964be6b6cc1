//! Editor lifecycle hooks.
//!
//! The host reports editor open and close once each. Those reports become an
//! [`EditorEvent`] dispatched to every registered [`EditorListener`] in
//! registration order. Two listeners ship with the crate:
//!
//! - [`MarkTrackingHook`]: registers a document listener for non-viewer
//!   editors that forwards content changes to a [`MarkTracking`] collaborator
//! - [`UndoHook`]: tells an [`UndoHistory`] collaborator when an editor
//!   session starts and ends
//!
//! Collaborators are shared through `Rc<RefCell<_>>`. A collaborator that is
//! already borrowed when a notification arrives (a re-entrant call from inside
//! one of its own callbacks) is skipped with a warning; notifications never
//! panic.

use super::marks::MarkTracking;
use super::undo::UndoHistory;
use crate::host::{DocumentChange, DocumentListener, EditorHost, EditorId, HostError, ListenerId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Lifecycle transition of one editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Opened(EditorId),
    Closed(EditorId),
}

impl EditorEvent {
    pub fn editor(&self) -> EditorId {
        match self {
            EditorEvent::Opened(editor) | EditorEvent::Closed(editor) => *editor,
        }
    }
}

impl fmt::Display for EditorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorEvent::Opened(editor) => write!(f, "{} opened", editor),
            EditorEvent::Closed(editor) => write!(f, "{} closed", editor),
        }
    }
}

/// Something that reacts to editor lifecycle events.
pub trait EditorListener {
    fn handle(&mut self, host: &dyn EditorHost, event: EditorEvent) -> Result<(), HostError>;
}

/// Ordered list of lifecycle listeners.
#[derive(Default)]
pub struct LifecycleHooks {
    listeners: Vec<Box<dyn EditorListener>>,
}

impl LifecycleHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener. Listeners run in the order they were registered.
    pub fn register(&mut self, listener: Box<dyn EditorListener>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Runs every listener for `event`.
    ///
    /// A failing listener does not stop the ones after it; the first error is
    /// returned once all have run.
    pub fn dispatch(
        &mut self,
        host: &dyn EditorHost,
        event: EditorEvent,
    ) -> Result<(), HostError> {
        log::debug!("dispatching {} to {} listeners", event, self.listeners.len());
        let mut first_error = None;
        for listener in &mut self.listeners {
            if let Err(err) = listener.handle(host, event) {
                log::warn!("listener failed for {}: {}", event, err);
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Runs `f` against a shared collaborator unless it is already borrowed.
fn notify<T>(collaborator: &RefCell<T>, name: &str, editor: EditorId, f: impl FnOnce(&mut T)) {
    match collaborator.try_borrow_mut() {
        Ok(mut collaborator) => f(&mut collaborator),
        Err(_) => log::warn!("{}: {} busy, notification skipped", editor, name),
    }
}

/// Document listener forwarding changes for one editor to mark tracking.
pub struct MarkUpdater<M> {
    editor: EditorId,
    tracker: Rc<RefCell<M>>,
}

impl<M: MarkTracking> DocumentListener for MarkUpdater<M> {
    fn document_changed(&self, change: &DocumentChange) {
        notify(&self.tracker, "mark tracker", self.editor, |tracker| {
            tracker.on_document_changed(self.editor, change)
        });
    }
}

/// Installs a [`MarkUpdater`] on each opened editor's document.
pub struct MarkTrackingHook<M> {
    tracker: Rc<RefCell<M>>,
    registrations: HashMap<EditorId, ListenerId>,
    include_viewers: bool,
}

impl<M> MarkTrackingHook<M> {
    pub fn new(tracker: Rc<RefCell<M>>) -> Self {
        Self {
            tracker,
            registrations: HashMap::new(),
            include_viewers: false,
        }
    }

    /// Also track marks in read-only viewers.
    pub fn with_viewers(mut self, include_viewers: bool) -> Self {
        self.include_viewers = include_viewers;
        self
    }

    /// Whether a document listener is installed for `editor`.
    pub fn is_tracking(&self, editor: EditorId) -> bool {
        self.registrations.contains_key(&editor)
    }
}

impl<M: MarkTracking + 'static> EditorListener for MarkTrackingHook<M> {
    fn handle(&mut self, host: &dyn EditorHost, event: EditorEvent) -> Result<(), HostError> {
        match event {
            EditorEvent::Opened(editor) => {
                if self.registrations.contains_key(&editor) {
                    log::debug!("{}: marks already tracked", editor);
                    return Ok(());
                }
                if !self.include_viewers && host.is_viewer(editor)? {
                    return Ok(());
                }
                let updater = MarkUpdater {
                    editor,
                    tracker: Rc::clone(&self.tracker),
                };
                let id = host.add_document_listener(editor, Rc::new(updater))?;
                self.registrations.insert(editor, id);
                Ok(())
            }
            EditorEvent::Closed(editor) => {
                notify(&self.tracker, "mark tracker", editor, |tracker| {
                    tracker.editor_closed(editor)
                });
                match self.registrations.remove(&editor) {
                    // The host may already have dropped listeners of a disposed editor.
                    Some(id) => match host.remove_document_listener(id) {
                        Ok(()) | Err(HostError::UnknownListener(_)) => Ok(()),
                        Err(err) => Err(err),
                    },
                    None => Ok(()),
                }
            }
        }
    }
}

/// Reports editor sessions to undo history.
pub struct UndoHook<U> {
    history: Rc<RefCell<U>>,
}

impl<U> UndoHook<U> {
    pub fn new(history: Rc<RefCell<U>>) -> Self {
        Self { history }
    }
}

impl<U: UndoHistory> EditorListener for UndoHook<U> {
    fn handle(&mut self, host: &dyn EditorHost, event: EditorEvent) -> Result<(), HostError> {
        match event {
            EditorEvent::Opened(editor) => {
                let document = host.document(editor)?;
                notify(&self.history, "undo history", editor, |history| {
                    history.editor_opened(editor, document)
                });
            }
            EditorEvent::Closed(editor) => {
                notify(&self.history, "undo history", editor, |history| {
                    history.editor_closed(editor)
                });
            }
        }
        Ok(())
    }
}
