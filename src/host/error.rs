//! Errors reported by host capability calls.

use super::{EditorId, ListenerId};
use thiserror::Error;

/// Contract violations surfaced by the host application.
///
/// These never originate in the attribute store itself. They mean the caller
/// passed a handle the host no longer (or never) knew about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HostError {
    /// The editor handle is not open in the host.
    #[error("editor {0} is not open")]
    UnknownEditor(EditorId),
    /// The document listener was never registered or was already removed.
    #[error("document listener {0} is not registered")]
    UnknownListener(ListenerId),
}
