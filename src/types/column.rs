//! Column model capability traits.
//!
//! The column model lives in the host grid; the renderer only needs the
//! narrow slice of it consumed during a paint: alignment, the format
//! function, the raw-value-to-number resolver and the column maximum
//! used to normalize data bars.

use std::rc::Rc;

use serde_json::Value;

use crate::types::cell::CellConfig;

/// Alignment applied when no column is resolvable for a context.
pub const DEFAULT_ALIGNMENT: &str = "left";

/// One column of the grid, as seen by the cell renderer.
pub trait DataColumn {
    /// Configured horizontal alignment (`left` / `center` / `right`).
    fn alignment(&self) -> &str;

    /// Format the cell's raw value into its display string.
    fn format(&self, config: &CellConfig) -> String;

    /// Resolve a raw model value to a number for data-bar scaling.
    /// Non-numeric values resolve to NaN.
    fn resolve_value(&self, value: &Value) -> f64;

    /// Maximum numeric value in the column; data-bar widths are
    /// normalized against it.
    fn max_value(&self) -> f64;
}

/// Resolves the owning column for a cell context. May yield nothing,
/// e.g. for corner regions that no column owns.
pub trait ColumnProvider {
    fn column(&self, config: &CellConfig) -> Option<Rc<dyn DataColumn>>;
}
