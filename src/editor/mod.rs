//! Per-editor state of the vim layer.
//!
//! # Modules
//!
//! - `attributes`: typed side-table of per-editor values
//! - `resolver`: reverse lookup of an editor's project and file
//! - `lifecycle`: open/close events and the listeners they fan out to
//! - `marks`: mark tracking collaborator
//! - `undo`: undo history collaborator
//! - `visual`: visual selection value types
//! - `data`: the [`EditorData`](data::EditorData) facade over all of the above

pub mod attributes;
pub mod data;
pub mod lifecycle;
pub mod marks;
pub mod resolver;
pub mod undo;
pub mod visual;
