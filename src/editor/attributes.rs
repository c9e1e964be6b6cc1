//! Editor-scoped attribute store.
//!
//! Every live editor gets at most one [`EditorAttributes`] record, created the
//! first time any slot is written. Slots are addressed through marker types
//! implementing [`Slot`], so each slot has exactly one value type:
//!
//! | Slot | Value |
//! |---|---|
//! | [`LastColumn`] | `usize` |
//! | [`Project`] | [`ProjectId`] |
//! | [`VirtualFile`] | [`FileId`] |
//! | [`LastVisual`] | [`VisualRange`] |
//! | [`LastVisualOp`] | [`VisualChange`] |
//!
//! # Example
//!
//! ```
//! use vimquill::editor::attributes::{AttributeStore, LastColumn};
//! use vimquill::host::EditorId;
//!
//! let mut store = AttributeStore::new();
//! let editor = EditorId(1);
//!
//! assert_eq!(store.get::<LastColumn>(editor), None);
//! store.set::<LastColumn>(editor, 12);
//! assert_eq!(store.get::<LastColumn>(editor), Some(&12));
//! ```

use super::visual::{VisualChange, VisualRange};
use crate::host::{EditorId, FileId, ProjectId};
use std::collections::HashMap;

/// Auxiliary state attached to one editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorAttributes {
    /// Last visual column the caret occupied, as set by motion commands.
    pub last_column: Option<usize>,
    pub last_visual: Option<VisualRange>,
    pub last_visual_op: Option<VisualChange>,
    /// Owning project, filled by the resolver.
    pub project: Option<ProjectId>,
    /// Owning file, filled by the resolver.
    pub virtual_file: Option<FileId>,
}

/// A named, typed slot of [`EditorAttributes`].
pub trait Slot {
    type Value;

    /// Name used in log output.
    const NAME: &'static str;

    fn field(attributes: &EditorAttributes) -> &Option<Self::Value>;

    fn field_mut(attributes: &mut EditorAttributes) -> &mut Option<Self::Value>;
}

macro_rules! slot {
    ($(#[$meta:meta])* $marker:ident, $field:ident: $value:ty, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $marker;

        impl Slot for $marker {
            type Value = $value;
            const NAME: &'static str = $name;

            fn field(attributes: &EditorAttributes) -> &Option<$value> {
                &attributes.$field
            }

            fn field_mut(attributes: &mut EditorAttributes) -> &mut Option<$value> {
                &mut attributes.$field
            }
        }
    };
}

slot!(
    /// Last caret column.
    LastColumn,
    last_column: usize,
    "lastColumn"
);
slot!(
    /// Cached owning project.
    Project,
    project: ProjectId,
    "project"
);
slot!(
    /// Cached owning file.
    VirtualFile,
    virtual_file: FileId,
    "virtualFile"
);
slot!(
    /// Last completed visual selection.
    LastVisual,
    last_visual: VisualRange,
    "lastVisual"
);
slot!(
    /// Last visual-operator change.
    LastVisualOp,
    last_visual_op: VisualChange,
    "lastVisualOp"
);

/// Side-table mapping editors to their attribute records.
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
    records: HashMap<EditorId, EditorAttributes>,
}

impl AttributeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored in slot `S`, or `None` if it was never set.
    ///
    /// Reading never allocates a record.
    pub fn get<S: Slot>(&self, editor: EditorId) -> Option<&S::Value> {
        self.records
            .get(&editor)
            .and_then(|attributes| S::field(attributes).as_ref())
    }

    /// Overwrites slot `S`, creating the editor's record if needed.
    pub fn set<S: Slot>(&mut self, editor: EditorId, value: S::Value) {
        log::trace!("{}: set {}", editor, S::NAME);
        *S::field_mut(self.records.entry(editor).or_default()) = Some(value);
    }

    /// Returns the whole record for an editor, if one was created.
    pub fn attributes(&self, editor: EditorId) -> Option<&EditorAttributes> {
        self.records.get(&editor)
    }

    /// Drops the editor's record and returns it.
    pub fn remove(&mut self, editor: EditorId) -> Option<EditorAttributes> {
        self.records.remove(&editor)
    }

    pub fn contains(&self, editor: EditorId) -> bool {
        self.records.contains_key(&editor)
    }

    /// Number of editors with a record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
