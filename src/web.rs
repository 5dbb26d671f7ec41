//! Browser bindings: Canvas 2D surface adapter and the wasm-bindgen
//! entry point the JS grid host drives.
//!
//! The host keeps ownership of the grid widget, the state store and the
//! interaction managers; per paint call it passes a cell config plus a
//! snapshot of the interaction signals for that cell. Column metadata
//! and the model state are installed up front and replaced wholesale
//! when they change.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::helpers;
use crate::render::cell::{FONT_FAMILY, FONT_WEIGHT};
use crate::render::context::GraphicsContext;
#[cfg(target_arch = "wasm32")]
use crate::render::colors::CssColor;
#[cfg(target_arch = "wasm32")]
use crate::render::managers::{
    FocusManager, GridManagers, HighlighterManager, HoverManager, SelectionManager,
};
#[cfg(target_arch = "wasm32")]
use crate::render::{CellRenderer, RendererOptions};
#[cfg(target_arch = "wasm32")]
use crate::state::ModelState;
#[cfg(target_arch = "wasm32")]
use crate::types::ColumnProvider;
use crate::types::{CellConfig, CellPosition, DataColumn, DEFAULT_ALIGNMENT};

/// [`GraphicsContext`] over a browser Canvas 2D context.
pub struct CanvasContext {
    ctx: CanvasRenderingContext2d,
}

impl CanvasContext {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl GraphicsContext for CanvasContext {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn rotate(&mut self, radians: f64) {
        self.ctx.rotate(radians).ok();
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.rect(x, y, width, height);
    }

    fn clip(&mut self) {
        self.ctx.clip();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = self.ctx.fill_text(text, x, y);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_text_align(&mut self, align: &str) {
        self.ctx.set_text_align(align);
    }

    fn set_text_baseline(&mut self, baseline: &str) {
        self.ctx.set_text_baseline(baseline);
    }

    fn measure_font_height(&mut self, font: &str) -> f64 {
        let previous = self.ctx.font();
        self.ctx.set_font(font);
        let height = self
            .ctx
            .measure_text("Mg")
            .map(|m| m.font_bounding_box_ascent() + m.font_bounding_box_descent())
            .unwrap_or(0.0);
        self.ctx.set_font(&previous);
        height
    }

    fn measure_string_width(&mut self, text: &str, font_size: f64) -> f64 {
        let previous = self.ctx.font();
        self.ctx
            .set_font(&format!("{FONT_WEIGHT} {font_size}px {FONT_FAMILY}"));
        let width = self
            .ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or(0.0);
        self.ctx.set_font(&previous);
        width
    }
}

/// Column metadata handed over by the host grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnData {
    #[serde(default = "default_column_alignment")]
    pub alignment: String,
    #[serde(default)]
    pub max_value: f64,
    /// Fixed number of decimals for numeric display.
    #[serde(default)]
    pub precision: Option<usize>,
}

fn default_column_alignment() -> String {
    DEFAULT_ALIGNMENT.to_string()
}

impl DataColumn for ColumnData {
    fn alignment(&self) -> &str {
        &self.alignment
    }

    fn format(&self, config: &CellConfig) -> String {
        match (self.precision, config.value.as_f64()) {
            (Some(precision), Some(number)) => format!("{number:.precision$}"),
            _ => helpers::display_value(&config.value),
        }
    }

    fn resolve_value(&self, value: &Value) -> f64 {
        match value {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
            _ => f64::NAN,
        }
    }

    fn max_value(&self) -> f64 {
        self.max_value
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct ColumnSet {
    columns: RefCell<Vec<Rc<ColumnData>>>,
}

#[cfg(target_arch = "wasm32")]
impl ColumnProvider for ColumnSet {
    fn column(&self, config: &CellConfig) -> Option<Rc<dyn DataColumn>> {
        let index = usize::try_from(config.column).ok()?;
        let column: Rc<dyn DataColumn> = Rc::clone(self.columns.borrow().get(index)?);
        Some(column)
    }
}

/// Interaction signals for one cell, captured by the host right before
/// the paint call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CellSignals {
    pub selection_color: Option<String>,
    pub highlight_color: Option<String>,
    pub focus_color: Option<String>,
    pub hovered_cell: Option<CellPosition>,
}

/// Adapts the per-cell [`CellSignals`] snapshot to the manager traits
/// the renderer core consumes.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct SignalState {
    signals: RefCell<CellSignals>,
}

#[cfg(target_arch = "wasm32")]
impl SelectionManager for SignalState {
    fn background_color(&self, _config: &CellConfig) -> Option<CssColor> {
        self.signals.borrow().selection_color.clone()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighlighterManager for SignalState {
    fn cell_background(&self, _config: &CellConfig) -> Option<CssColor> {
        self.signals.borrow().highlight_color.clone()
    }
}

#[cfg(target_arch = "wasm32")]
impl FocusManager for SignalState {
    fn focused_cell_background(&self, _config: &CellConfig) -> Option<CssColor> {
        self.signals.borrow().focus_color.clone()
    }
}

#[cfg(target_arch = "wasm32")]
impl HoverManager for SignalState {
    fn hovered_cell(&self) -> Option<CellPosition> {
        self.signals.borrow().hovered_cell
    }
}

/// Cell renderer exported to the JS grid host.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct GridCellRenderer {
    renderer: CellRenderer,
    surface: CanvasContext,
    columns: Rc<ColumnSet>,
    signals: Rc<SignalState>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridCellRenderer {
    /// Create a renderer painting onto `ctx`.
    #[wasm_bindgen(constructor)]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        console_error_panic_hook::set_once();

        let columns = Rc::new(ColumnSet::default());
        let signals = Rc::new(SignalState::default());
        let managers = GridManagers {
            selection: Rc::clone(&signals),
            highlighter: Rc::clone(&signals),
            focus: Rc::clone(&signals),
            hover: Rc::clone(&signals),
        };
        let provider: Rc<dyn ColumnProvider> = Rc::clone(&columns);
        let renderer = CellRenderer::new(RendererOptions::default(), provider, managers);

        Self {
            renderer,
            surface: CanvasContext::new(ctx),
            columns,
            signals,
        }
    }

    /// Replace the shared model state snapshot.
    pub fn set_state(&mut self, state: JsValue) -> Result<(), JsValue> {
        let state: ModelState = serde_wasm_bindgen::from_value(state)
            .map_err(|e| JsValue::from_str(&format!("invalid model state: {e}")))?;
        self.renderer.set_state(state);
        Ok(())
    }

    /// Replace the column metadata, in column order.
    pub fn set_columns(&mut self, columns: JsValue) -> Result<(), JsValue> {
        let columns: Vec<ColumnData> = serde_wasm_bindgen::from_value(columns)
            .map_err(|e| JsValue::from_str(&format!("invalid columns: {e}")))?;
        *self.columns.columns.borrow_mut() = columns.into_iter().map(Rc::new).collect();
        Ok(())
    }

    /// Paint one cell's background (with optional data bars).
    pub fn draw_background(&mut self, cell: JsValue, signals: JsValue) -> Result<(), JsValue> {
        let config = self.install_cell(cell, signals)?;
        self.renderer.draw_background(&mut self.surface, &config);
        Ok(())
    }

    /// Paint one cell's text.
    pub fn draw_text(&mut self, cell: JsValue, signals: JsValue) -> Result<(), JsValue> {
        let config = self.install_cell(cell, signals)?;
        self.renderer
            .draw_text(&mut self.surface, &config)
            .map_err(JsValue::from)
    }

    /// Paint one cell: background, data bars, then text.
    pub fn draw_cell(&mut self, cell: JsValue, signals: JsValue) -> Result<(), JsValue> {
        let config = self.install_cell(cell, signals)?;
        self.renderer
            .paint(&mut self.surface, &config)
            .map_err(JsValue::from)
    }
}

#[cfg(target_arch = "wasm32")]
impl GridCellRenderer {
    /// Deserialize the per-cell inputs and stage the signal snapshot.
    fn install_cell(&self, cell: JsValue, signals: JsValue) -> Result<CellConfig, JsValue> {
        let config: CellConfig = serde_wasm_bindgen::from_value(cell)
            .map_err(|e| JsValue::from_str(&format!("invalid cell config: {e}")))?;
        let signals: CellSignals = serde_wasm_bindgen::from_value(signals)
            .map_err(|e| JsValue::from_str(&format!("invalid cell signals: {e}")))?;
        *self.signals.signals.borrow_mut() = signals;
        Ok(config)
    }
}
