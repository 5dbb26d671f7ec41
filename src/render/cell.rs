//! The cell renderer: attribute resolution and painting.
//!
//! For each visible cell the host grid calls [`CellRenderer::draw_background`]
//! then [`CellRenderer::draw_text`] with the same [`CellConfig`]. Both
//! painters resolve their visual attributes through the pure resolver
//! methods on this type; no resolver depends on another resolver's
//! output except the decoration descriptor, which carries the data-bar
//! percent and direction consumed by both painters.

use std::f64::consts::FRAC_PI_2;
use std::rc::Rc;

use crate::error::{RenderError, Result};
use crate::helpers;
use crate::render::colors::{self, palette, CssColor};
use crate::render::context::GraphicsContext;
use crate::render::managers::{is_cell_hovered, GridManagers};
use crate::state::{ModelState, DEFAULT_DATA_FONT_SIZE};
use crate::types::{
    BarDirection, CellConfig, CellRegion, ColumnProvider, DecorationType, ResolvedDecoration,
    DEFAULT_ALIGNMENT,
};

/// Weight/style prefix of every cell font.
pub const FONT_WEIGHT: &str = "normal";
/// Ordered fallback family list of every cell font.
pub const FONT_FAMILY: &str = "Lato, Helvetica, sans-serif";

/// Extra left padding for header text, in px.
const HEADER_TEXT_PADDING: f64 = 10.0;
/// Left padding for body text, in px.
const BODY_TEXT_PADDING: f64 = 2.0;

/// Construction options for [`CellRenderer`].
#[derive(Debug, Clone)]
pub struct RendererOptions {
    /// Vertical alignment applied to every cell
    /// (`top` / `center` / `bottom`).
    pub vertical_alignment: String,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            vertical_alignment: "center".to_string(),
        }
    }
}

/// Paints individual cells of a data grid: resolves visual attributes
/// from the shared model state, the column model and the interaction
/// managers, then draws background, data bars and text.
pub struct CellRenderer {
    state: ModelState,
    options: RendererOptions,
    columns: Rc<dyn ColumnProvider>,
    managers: GridManagers,
}

impl CellRenderer {
    pub fn new(
        options: RendererOptions,
        columns: Rc<dyn ColumnProvider>,
        managers: GridManagers,
    ) -> Self {
        Self {
            state: ModelState::default(),
            options,
            columns,
            managers,
        }
    }

    /// Replace the shared model state snapshot used by subsequent
    /// paints.
    pub fn set_state(&mut self, state: ModelState) {
        self.state = state;
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    // --- attribute resolvers -------------------------------------------

    /// Background color for a cell.
    ///
    /// Headers always get the default background. For body cells the
    /// selection, highlighter and focus signals are composed with an
    /// ordered rule list; the first matching rule wins:
    ///
    /// 1. focus present and selection+highlight present: the darkened
    ///    highlight, darkened once more
    /// 2. focus background
    /// 3. the darkened highlight (selection and highlight both present)
    /// 4. highlight background
    /// 5. selection background
    /// 6. default background
    pub fn background_color(&self, config: &CellConfig) -> CssColor {
        if config.region.is_header() {
            return palette::DEFAULT_CELL_BACKGROUND.to_string();
        }

        let selection = self.managers.selection.background_color(config);
        let highlight = self.managers.highlighter.cell_background(config);
        let focused = self.managers.focus.focused_cell_background(config);
        let initial = match (&selection, &highlight) {
            (Some(_), Some(highlight)) => Some(colors::darken(highlight)),
            _ => None,
        };

        if let (Some(_), Some(initial)) = (&focused, &initial) {
            return colors::darken(initial);
        }
        if let Some(focused) = focused {
            return focused;
        }
        if let Some(initial) = initial {
            return initial;
        }
        if let Some(highlight) = highlight {
            return highlight;
        }
        if let Some(selection) = selection {
            return selection;
        }
        palette::DEFAULT_CELL_BACKGROUND.to_string()
    }

    /// The owning column's alignment, or the default when no column is
    /// resolvable for this context.
    pub fn horizontal_alignment(&self, config: &CellConfig) -> String {
        self.columns.column(config).map_or_else(
            || DEFAULT_ALIGNMENT.to_string(),
            |column| column.alignment().to_string(),
        )
    }

    /// Display text for a cell. Headers show their raw value; body
    /// cells go through the column's format function.
    pub fn format(&self, config: &CellConfig) -> String {
        if config.region.is_header() {
            return helpers::display_value(&config.value);
        }
        match self.columns.column(config) {
            Some(column) => column.format(config),
            None => helpers::display_value(&config.value),
        }
    }

    /// CSS font string for a cell. Column and corner headers use the
    /// header font size, everything else the data font size.
    pub fn font(&self, config: &CellConfig) -> String {
        let size = match config.region {
            CellRegion::ColumnHeader | CellRegion::CornerHeader => self.state.header_font_size,
            CellRegion::RowHeader | CellRegion::Body => self.state.data_font_size,
        };
        let size = size.unwrap_or(DEFAULT_DATA_FONT_SIZE);
        format!("{FONT_WEIGHT} {size}px {FONT_FAMILY}")
    }

    /// Text color for a cell: fixed colors for header regions, per-cell
    /// overrides from the model state for body cells.
    pub fn text_color(&self, config: &CellConfig) -> CssColor {
        match config.region {
            CellRegion::RowHeader => palette::DEFAULT_DATA_FONT_COLOR.to_string(),
            CellRegion::ColumnHeader | CellRegion::CornerHeader => {
                palette::DEFAULT_HEADER_FONT_COLOR.to_string()
            }
            CellRegion::Body => self
                .state
                .font_color_at(config.row, config.column)
                .and_then(colors::format_color)
                .unwrap_or_else(|| palette::DEFAULT_DATA_FONT_COLOR.to_string()),
        }
    }

    /// Resolve the decoration descriptor for a cell's column, if one is
    /// configured. Recomputed on every draw, never persisted.
    pub fn decoration(&self, config: &CellConfig) -> Option<ResolvedDecoration> {
        let column = self.columns.column(config)?;
        let decoration = self.state.decoration_for(config.column)?;

        let value = column.resolve_value(&config.value);
        let direction = if value > 0.0 {
            BarDirection::Right
        } else {
            BarDirection::Left
        };

        Some(ResolvedDecoration {
            kind: decoration.kind,
            include_text: decoration.include_text,
            percent: normalized_percent(value, column.max_value()),
            direction,
        })
    }

    // --- painters ------------------------------------------------------

    /// Paint one cell: background (with optional data bars), then text.
    pub fn paint(&self, gc: &mut dyn GraphicsContext, config: &CellConfig) -> Result<()> {
        self.draw_background(gc, config);
        self.draw_text(gc, config)
    }

    /// Fill the cell background, then overlay data bars for decorated
    /// non-header cells.
    pub fn draw_background(&self, gc: &mut dyn GraphicsContext, config: &CellConfig) {
        let background = self.background_color(config);
        if background.is_empty() {
            return;
        }
        gc.set_fill_style(&background);
        gc.fill_rect(config.x, config.y, config.width, config.height);

        if config.region.is_header() {
            return;
        }
        let Some(decoration) = self.decoration(config) else {
            return;
        };
        if decoration.kind != DecorationType::DataBars {
            return;
        }

        // Bars grow from the cell midline toward the value's sign.
        let bar_width = config.width / 2.0 * decoration.percent;
        let bar_x = match decoration.direction {
            BarDirection::Right => config.x + config.width / 2.0,
            BarDirection::Left => config.x + config.width / 2.0 - bar_width,
        };
        gc.set_fill_style(palette::DEFAULT_HIGHLIGHT_COLOR);
        gc.fill_rect(bar_x, config.y, bar_width, config.height - 1.0);
    }

    /// Paint the formatted cell text.
    ///
    /// Missing font, missing text color, a bars-only decoration on a
    /// body cell, and a degenerate text box are all "nothing to draw"
    /// conditions, not errors. Unknown alignment values fail fast.
    pub fn draw_text(&self, gc: &mut dyn GraphicsContext, config: &CellConfig) -> Result<()> {
        let font = self.font(config);
        if font.is_empty() {
            return Ok(());
        }

        let is_header = config.region.is_header();

        // Bars-only cells suppress their text entirely.
        if let Some(decoration) = self.decoration(config) {
            if decoration.kind == DecorationType::DataBars
                && !decoration.include_text
                && !is_header
            {
                return Ok(());
            }
        }

        let color = self.text_color(config);
        if color.is_empty() {
            return Ok(());
        }

        let text = self.format(config);

        let v_align = self.options.vertical_alignment.as_str();
        let h_align = self.horizontal_alignment(config);

        // Padded text box; centered text keeps one extra pixel.
        let box_height = config.height - if v_align == "center" { 1.0 } else { 2.0 };
        if box_height <= 0.0 {
            return Ok(());
        }

        let text_height = gc.measure_font_height(&font);

        let mut text_y = match v_align {
            "top" => config.y + 2.0 + text_height,
            "center" => config.y + config.height / 2.0 + text_height / 2.0,
            "bottom" => config.y + config.height - 2.0,
            other => return Err(RenderError::InvalidVerticalAlignment(other.to_string())),
        };

        let mut text_x = match h_align.as_str() {
            "left" => {
                config.x
                    + if is_header {
                        HEADER_TEXT_PADDING
                    } else {
                        BODY_TEXT_PADDING
                    }
            }
            "center" => config.x + config.width / 2.0,
            "right" => config.x + config.width - 3.0,
            other => return Err(RenderError::InvalidHorizontalAlignment(other.to_string())),
        };

        // Oversized glyphs are clipped to the cell box so they cannot
        // bleed into neighboring cells. The host resets clip state
        // between cells.
        if text_height > box_height {
            gc.begin_path();
            gc.rect(config.x, config.y, config.width, config.height - 1.0);
            gc.clip();
        }

        let vertical_header = is_header && self.state.headers_vertical;

        gc.set_text_baseline("bottom");
        gc.set_text_align(&h_align);

        if vertical_header {
            gc.save();
            gc.rotate(-FRAC_PI_2);
            text_x = -config.height + 2.0;
            text_y = config.x + config.width - 3.0;
            gc.set_text_baseline("bottom");
            gc.set_text_align("left");
        }

        gc.set_font(&font);
        gc.set_fill_style(&color);

        let outcome = self.draw_glyphs(gc, config, &text, text_x, text_y, &color, &h_align);

        // The rotation is scoped to this draw; pop it even when the
        // underline pass bails with an error.
        if vertical_header {
            gc.restore();
        }
        outcome
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_glyphs(
        &self,
        gc: &mut dyn GraphicsContext,
        config: &CellConfig,
        text: &str,
        text_x: f64,
        text_y: f64,
        color: &str,
        h_align: &str,
    ) -> Result<()> {
        let hovered = self.managers.hover.hovered_cell();
        if is_cell_hovered(hovered.as_ref(), config) {
            self.draw_text_underline(gc, config, text, text_x, text_y, color, h_align)?;
        }
        gc.fill_text(text, text_x, text_y);
        Ok(())
    }

    /// Underline hovered URL-like text, 0.5px above the baseline, in
    /// the text color.
    #[allow(clippy::too_many_arguments)]
    fn draw_text_underline(
        &self,
        gc: &mut dyn GraphicsContext,
        config: &CellConfig,
        text: &str,
        text_x: f64,
        text_y: f64,
        color: &str,
        h_align: &str,
    ) -> Result<()> {
        if !helpers::is_url(text) {
            return Ok(());
        }

        let font_size = self
            .state
            .data_font_size
            .unwrap_or(DEFAULT_DATA_FONT_SIZE);
        let text_width = gc.measure_string_width(text, font_size) - 8.0;

        let (start_x, end_x) = match h_align {
            "left" => (text_x, (text_x + text_width).round()),
            "center" => {
                // Centered text anchors at the midline; the underline
                // starts half a text width to the left of it.
                let start = config.x + config.width / 2.0 - text_width / 2.0;
                (start, (start + text_width).round())
            }
            "right" => (text_x, (text_x - text_width).round()),
            other => return Err(RenderError::InvalidHorizontalAlignment(other.to_string())),
        };

        gc.begin_path();
        gc.move_to(start_x, text_y - 0.5);
        gc.line_to(end_x, text_y - 0.5);
        gc.set_stroke_style(color);
        gc.set_line_width(1.0);
        gc.stroke();
        Ok(())
    }
}

/// Data-bar fill fraction: value magnitude over the column maximum,
/// kept inside [0, 1]. Degenerate normalization (missing maximum,
/// non-numeric value) yields an empty bar.
fn normalized_percent(value: f64, max_value: f64) -> f64 {
    let percent = value.abs() / max_value;
    if percent.is_finite() {
        percent.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::normalized_percent;

    #[test]
    fn percent_is_magnitude_over_max() {
        assert_eq!(normalized_percent(5.0, 10.0), 0.5);
        assert_eq!(normalized_percent(-5.0, 10.0), 0.5);
    }

    #[test]
    fn percent_stays_inside_unit_interval() {
        assert_eq!(normalized_percent(25.0, 10.0), 1.0);
        assert_eq!(normalized_percent(0.0, 10.0), 0.0);
    }

    #[test]
    fn degenerate_normalization_is_empty() {
        assert_eq!(normalized_percent(5.0, 0.0), 0.0);
        assert_eq!(normalized_percent(f64::NAN, 10.0), 0.0);
    }
}
