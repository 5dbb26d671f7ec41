//! Core data types shared across the renderer.

pub mod cell;
pub mod column;
pub mod decoration;

pub use cell::{CellConfig, CellPosition, CellRegion};
pub use column::{ColumnProvider, DataColumn, DEFAULT_ALIGNMENT};
pub use decoration::{
    BarDirection, ColumnDecoration, Decoration, DecorationType, ResolvedDecoration,
};
