//! Shared style state snapshot.
//!
//! The host grid owns the application state store; it hands the
//! renderer a read-only snapshot of the slice the cell painters
//! consume. The selector methods mirror the host store's lookups.

use serde::{Deserialize, Serialize};

use crate::types::{ColumnDecoration, Decoration};

/// Font size applied when the model does not configure one, in px.
pub const DEFAULT_DATA_FONT_SIZE: f64 = 13.0;

/// Read-only snapshot of grid-wide display state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelState {
    /// Font size for column/corner header cells, in px.
    pub header_font_size: Option<f64>,
    /// Font size for body and row-header cells, in px.
    pub data_font_size: Option<f64>,
    /// Per-cell font color overrides, indexed by row then column.
    /// Empty entries mean "no override".
    pub font_color: Vec<Vec<String>>,
    /// Rotate header text 90° to conserve horizontal space.
    pub headers_vertical: bool,
    /// Active decorations, at most one per column.
    pub decorations: Vec<ColumnDecoration>,
}

impl ModelState {
    /// Font color override for one cell, if set.
    pub fn font_color_at(&self, row: u32, column: u32) -> Option<&str> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        let color = self.font_color.get(row)?.get(column)?;
        if color.is_empty() {
            None
        } else {
            Some(color)
        }
    }

    /// Decoration configured for a column, if any.
    pub fn decoration_for(&self, column: u32) -> Option<Decoration> {
        self.decorations
            .iter()
            .find(|d| d.column == column)
            .map(|d| d.decoration)
    }
}
