//! Cell painting core and its surface/manager seams.
//!
//! This module provides:
//! - The [`GraphicsContext`] drawing-surface trait
//! - Capability traits for the host grid's interaction managers
//! - Color parsing and the shared palette
//! - [`CellRenderer`], the resolver + painter core

pub mod cell;
pub mod colors;
pub mod context;
pub mod managers;

pub use cell::{CellRenderer, RendererOptions, FONT_FAMILY, FONT_WEIGHT};
pub use colors::{darken, format_color, palette, CssColor, Rgb};
pub use context::GraphicsContext;
pub use managers::{
    is_cell_hovered, FocusManager, GridManagers, HighlighterManager, HoverManager,
    SelectionManager,
};
