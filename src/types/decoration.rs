//! In-cell visual decorations (data bars).

use serde::{Deserialize, Serialize};

/// Decoration styles a column can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecorationType {
    /// Horizontal bar chart painted behind the cell value.
    DataBars,
}

/// Per-column decoration configuration, part of the shared model state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decoration {
    #[serde(rename = "type")]
    pub kind: DecorationType,
    /// Whether the cell text is painted on top of the bars.
    #[serde(default)]
    pub include_text: bool,
}

/// Decoration assignment for one column, as stored in the model state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDecoration {
    pub column: u32,
    pub decoration: Decoration,
}

/// Which side of the cell midline a data bar extends toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BarDirection {
    Left,
    Right,
}

/// Decoration descriptor resolved for one cell. Derived on every draw
/// from the column's configured [`Decoration`] plus the cell value;
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDecoration {
    pub kind: DecorationType,
    pub include_text: bool,
    /// Magnitude of the resolved value normalized by the column
    /// maximum, in `[0, 1]`.
    pub percent: f64,
    /// `Right` for positive values, `Left` otherwise.
    pub direction: BarDirection,
}
