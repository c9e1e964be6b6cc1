//! VimQuill - per-editor state for a vim emulation layer.
//!
//! The crate keeps a typed side-table of editor attributes (last column, last
//! visual selection, owning project and file) next to editors owned by a host
//! application, and forwards editor lifecycle events to mark tracking and undo
//! history.
//!
//! # Modules
//!
//! - `config`: TOML-backed settings
//! - `host`: capability traits the host application implements, plus an
//!   in-memory host
//! - `editor`: attribute store, resolver, lifecycle hooks and the
//!   [`EditorData`](editor::data::EditorData) facade

pub mod config;
pub mod editor;
pub mod host;
