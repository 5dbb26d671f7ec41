//! Capability interfaces onto the host grid's interaction managers.
//!
//! The renderer never sees the grid widget itself, only these narrow
//! per-concern contracts. All of them return snapshots that stay
//! consistent for the duration of one paint pass.

use std::rc::Rc;

use crate::render::colors::CssColor;
use crate::types::{CellConfig, CellPosition};

/// Selection tracking.
pub trait SelectionManager {
    /// Background for a cell inside the current selection.
    fn background_color(&self, config: &CellConfig) -> Option<CssColor>;
}

/// Model-driven cell highlighters (e.g. heatmap rows).
pub trait HighlighterManager {
    /// Highlight background for a cell, if any highlighter matches.
    fn cell_background(&self, config: &CellConfig) -> Option<CssColor>;
}

/// Keyboard focus tracking.
pub trait FocusManager {
    /// Background for the focussed cell.
    fn focused_cell_background(&self, config: &CellConfig) -> Option<CssColor>;
}

/// Pointer hover tracking.
pub trait HoverManager {
    /// Coordinates of the currently hovered cell.
    fn hovered_cell(&self) -> Option<CellPosition>;
}

/// The interaction managers a renderer is constructed with.
#[derive(Clone)]
pub struct GridManagers {
    pub selection: Rc<dyn SelectionManager>,
    pub highlighter: Rc<dyn HighlighterManager>,
    pub focus: Rc<dyn FocusManager>,
    pub hover: Rc<dyn HoverManager>,
}

/// Whether `config` addresses the currently hovered cell.
pub fn is_cell_hovered(hovered: Option<&CellPosition>, config: &CellConfig) -> bool {
    hovered.is_some_and(|h| h.row == config.row && h.column == config.column)
}
