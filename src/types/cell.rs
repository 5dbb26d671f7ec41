//! Per-cell render context supplied by the host grid.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classification of a grid cell's role within the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellRegion {
    /// The cell at the intersection of the header row and header column.
    CornerHeader,
    /// A cell in the header row above the data.
    ColumnHeader,
    /// A cell in the index column to the left of the data.
    RowHeader,
    /// A data cell.
    Body,
}

impl CellRegion {
    /// Every non-body region is a header for background/format/padding
    /// purposes.
    pub fn is_header(self) -> bool {
        !matches!(self, Self::Body)
    }
}

/// Read-only render context for one cell, constructed by the host grid
/// per paint pass and discarded afterwards.
///
/// `x`/`y`/`width`/`height` are the cell's pixel bounding box on the
/// drawing surface. `value` is the raw model value; the host grid is
/// JS, so it arrives as arbitrary JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellConfig {
    pub region: CellRegion,
    pub row: u32,
    pub column: u32,
    pub value: Value,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Row/column coordinates of a cell, as reported by the hover manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: u32,
    pub column: u32,
}
