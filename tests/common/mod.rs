//! Common test utilities: a recording drawing surface plus fake
//! columns and interaction managers for driving the renderer without a
//! browser.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use cellview::render::GraphicsContext;
use cellview::{
    CellConfig, CellPosition, CellRegion, CellRenderer, ColumnProvider, DataColumn, GridManagers,
    ModelState, RendererOptions,
};

// ============================================================================
// Recording drawing surface
// ============================================================================

/// One drawing call captured by [`RecordingContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    Rotate(f64),
    BeginPath,
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Clip,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
    },
    SetFont(String),
    SetFillStyle(String),
    SetStrokeStyle(String),
    SetLineWidth(f64),
    SetTextAlign(String),
    SetTextBaseline(String),
}

/// Fake surface that records every drawing call. Metrics are
/// deterministic: a fixed line height and a fixed per-character width.
pub struct RecordingContext {
    pub ops: Vec<DrawOp>,
    pub font_height: f64,
    pub char_width: f64,
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            font_height: 10.0,
            char_width: 5.0,
        }
    }
}

impl RecordingContext {
    pub fn with_font_height(font_height: f64) -> Self {
        Self {
            font_height,
            ..Self::default()
        }
    }

    /// Net save/restore depth; zero means the transform stack is back
    /// to its pre-draw state.
    pub fn save_depth(&self) -> i64 {
        self.ops.iter().fold(0, |depth, op| match op {
            DrawOp::Save => depth + 1,
            DrawOp::Restore => depth - 1,
            _ => depth,
        })
    }

    pub fn fill_texts(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillText { .. }))
            .collect()
    }

    pub fn fill_rects(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { .. }))
            .collect()
    }

    pub fn contains(&self, op: &DrawOp) -> bool {
        self.ops.contains(op)
    }
}

impl GraphicsContext for RecordingContext {
    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn rotate(&mut self, radians: f64) {
        self.ops.push(DrawOp::Rotate(radians));
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn clip(&mut self) {
        self.ops.push(DrawOp::Clip);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(DrawOp::SetFont(font.to_string()));
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ops.push(DrawOp::SetFillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ops.push(DrawOp::SetStrokeStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::SetLineWidth(width));
    }

    fn set_text_align(&mut self, align: &str) {
        self.ops.push(DrawOp::SetTextAlign(align.to_string()));
    }

    fn set_text_baseline(&mut self, baseline: &str) {
        self.ops.push(DrawOp::SetTextBaseline(baseline.to_string()));
    }

    fn measure_font_height(&mut self, _font: &str) -> f64 {
        self.font_height
    }

    fn measure_string_width(&mut self, text: &str, _font_size: f64) -> f64 {
        text.chars().count() as f64 * self.char_width
    }
}

// ============================================================================
// Fake columns
// ============================================================================

/// Configurable fake column. `formatted` of `None` means the raw value
/// displays as-is.
pub struct FakeColumn {
    pub alignment: String,
    pub max_value: f64,
    pub formatted: Option<String>,
}

impl Default for FakeColumn {
    fn default() -> Self {
        Self {
            alignment: "left".to_string(),
            max_value: 10.0,
            formatted: None,
        }
    }
}

impl FakeColumn {
    pub fn aligned(alignment: &str) -> Self {
        Self {
            alignment: alignment.to_string(),
            ..Self::default()
        }
    }
}

impl DataColumn for FakeColumn {
    fn alignment(&self) -> &str {
        &self.alignment
    }

    fn format(&self, config: &CellConfig) -> String {
        match &self.formatted {
            Some(formatted) => formatted.clone(),
            None => match &config.value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            },
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

pub struct FakeColumns {
    pub columns: Vec<Rc<FakeColumn>>,
}

impl FakeColumns {
    pub fn single(column: FakeColumn) -> Self {
        Self {
            columns: vec![Rc::new(column)],
        }
    }

    pub fn none() -> Self {
        Self {
            columns: Vec::new(),
        }
    }
}

impl ColumnProvider for FakeColumns {
    fn column(&self, config: &CellConfig) -> Option<Rc<dyn DataColumn>> {
        let index = usize::try_from(config.column).ok()?;
        let concrete = Rc::clone(self.columns.get(index)?);
        let column: Rc<dyn DataColumn> = concrete;
        Some(column)
    }
}

// ============================================================================
// Fake interaction managers
// ============================================================================

/// One struct standing in for all four interaction managers.
#[derive(Debug, Clone, Default)]
pub struct StubSignals {
    pub selection: Option<String>,
    pub highlight: Option<String>,
    pub focus: Option<String>,
    pub hovered: Option<CellPosition>,
}

pub struct StubManagers {
    signals: RefCell<StubSignals>,
}

impl StubManagers {
    fn new(signals: StubSignals) -> Self {
        Self {
            signals: RefCell::new(signals),
        }
    }
}

impl cellview::render::SelectionManager for StubManagers {
    fn background_color(&self, _config: &CellConfig) -> Option<String> {
        self.signals.borrow().selection.clone()
    }
}

impl cellview::render::HighlighterManager for StubManagers {
    fn cell_background(&self, _config: &CellConfig) -> Option<String> {
        self.signals.borrow().highlight.clone()
    }
}

impl cellview::render::FocusManager for StubManagers {
    fn focused_cell_background(&self, _config: &CellConfig) -> Option<String> {
        self.signals.borrow().focus.clone()
    }
}

impl cellview::render::HoverManager for StubManagers {
    fn hovered_cell(&self) -> Option<CellPosition> {
        self.signals.borrow().hovered
    }
}

pub fn managers_from(signals: StubSignals) -> GridManagers {
    let stub = Rc::new(StubManagers::new(signals));
    let selection_c = Rc::clone(&stub);
    let highlighter_c = Rc::clone(&stub);
    let focus_c = Rc::clone(&stub);
    let selection: Rc<dyn cellview::render::SelectionManager> = selection_c;
    let highlighter: Rc<dyn cellview::render::HighlighterManager> = highlighter_c;
    let focus: Rc<dyn cellview::render::FocusManager> = focus_c;
    let hover: Rc<dyn cellview::render::HoverManager> = stub;
    GridManagers {
        selection,
        highlighter,
        focus,
        hover,
    }
}

// ============================================================================
// Renderer and cell builders
// ============================================================================

/// Renderer over one fake column and the given state/signals.
pub fn renderer_with(
    state: ModelState,
    columns: FakeColumns,
    signals: StubSignals,
) -> CellRenderer {
    renderer_with_options(RendererOptions::default(), state, columns, signals)
}

pub fn renderer_with_options(
    options: RendererOptions,
    state: ModelState,
    columns: FakeColumns,
    signals: StubSignals,
) -> CellRenderer {
    let mut renderer = CellRenderer::new(options, Rc::new(columns), managers_from(signals));
    renderer.set_state(state);
    renderer
}

/// Renderer with default state, one left-aligned column, no signals.
pub fn basic_renderer() -> CellRenderer {
    renderer_with(
        ModelState::default(),
        FakeColumns::single(FakeColumn::default()),
        StubSignals::default(),
    )
}

/// Standard test cell box: x=50, y=100, width=40, height=20.
pub fn cell(region: CellRegion, value: Value) -> CellConfig {
    CellConfig {
        region,
        row: 0,
        column: 0,
        value,
        x: 50.0,
        y: 100.0,
        width: 40.0,
        height: 20.0,
    }
}

pub fn body_cell(value: Value) -> CellConfig {
    cell(CellRegion::Body, value)
}
