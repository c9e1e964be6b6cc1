//! Visual-mode value types remembered per editor.
//!
//! The visual-mode command machinery produces these values and reads them
//! back (`gv` reselects the last [`VisualRange`], `.` after a visual operator
//! replays a [`VisualChange`] of the same shape). The attribute store keeps
//! them verbatim and never interprets them.
//!
//! # Example
//!
//! ```
//! use vimquill::editor::visual::{SelectionType, VisualRange};
//!
//! let range = VisualRange::new(10, 42, SelectionType::Line);
//! assert_eq!(format!("{}", range.selection), "VISUAL LINE");
//! assert_eq!(range.len(), 32);
//! ```

use std::fmt;

/// Shape of a visual selection.
///
/// - `Character`: `v`, a run of characters between two offsets
/// - `Line`: `V`, whole lines
/// - `Block`: `Ctrl-v`, a rectangular column block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionType {
    #[default]
    Character,
    Line,
    Block,
}

impl fmt::Display for SelectionType {
    /// Formats the selection type the way the status line shows it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionType::Character => write!(f, "VISUAL"),
            SelectionType::Line => write!(f, "VISUAL LINE"),
            SelectionType::Block => write!(f, "VISUAL BLOCK"),
        }
    }
}

/// Extent and shape of a completed visual selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualRange {
    /// Offset where the selection started (the anchor).
    pub start: usize,
    /// Offset where the caret ended.
    pub end: usize,
    pub selection: SelectionType,
    /// Caret offset inside the selection when it was left.
    pub offset: usize,
}

impl VisualRange {
    pub fn new(start: usize, end: usize, selection: SelectionType) -> Self {
        Self {
            start,
            end,
            selection,
            offset: end,
        }
    }

    /// Sets the caret offset kept with the range.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Number of characters between the two ends, regardless of direction.
    pub fn len(&self) -> usize {
        self.start.abs_diff(self.end)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Size and shape of a change an operator applied over a visual selection.
///
/// For `Character` selections `columns` counts characters on the last line;
/// for `Block` it is the block width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualChange {
    pub lines: usize,
    pub columns: usize,
    pub selection: SelectionType,
}

impl VisualChange {
    pub fn new(lines: usize, columns: usize, selection: SelectionType) -> Self {
        Self {
            lines,
            columns,
            selection,
        }
    }
}
