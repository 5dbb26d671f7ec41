//! cellview - data-grid cell renderer
//!
//! Paints individual cells of a tabular grid widget onto a Canvas 2D
//! surface. For each visible cell the renderer resolves a set of visual
//! attributes (background, font, text color, alignment, formatted text,
//! data-bar decorations) from shared model state, the column model and
//! the grid's interaction managers, then draws background and text:
//! - precedence-based background composition over the selection,
//!   highlighter and focus signals
//! - in-cell data bars growing from the cell midline, scaled by the
//!   column maximum
//! - alignment-aware text placement with clipping for oversized glyphs
//! - URL underlines on the hovered cell
//! - 90°-rotated header text in vertical-header mode
//!
//! The grid widget itself (viewport, scrolling, virtualization, event
//! handling) is the host's concern; it hands this crate one
//! [`CellConfig`] per visible cell per paint pass and resets the
//! surface state between cells.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridCellRenderer } from 'cellview';
//! await init();
//! const renderer = new GridCellRenderer(canvas.getContext('2d'));
//! renderer.set_state(modelState);
//! renderer.set_columns(columns);
//! renderer.draw_cell(cellConfig, paintSignals);
//! ```

pub mod error;
pub mod helpers;
pub mod render;
pub mod state;
pub mod types;
pub mod web;

pub use error::{RenderError, Result};
pub use render::{CellRenderer, GraphicsContext, GridManagers, RendererOptions};
pub use state::{ModelState, DEFAULT_DATA_FONT_SIZE};
pub use types::{
    BarDirection, CellConfig, CellPosition, CellRegion, ColumnDecoration, ColumnProvider,
    DataColumn, Decoration, DecorationType, ResolvedDecoration,
};

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
