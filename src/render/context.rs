//! Drawing-surface abstraction.
//!
//! Models the slice of a Canvas-2D-style context the cell renderer
//! touches, so the core stays independent of the concrete surface
//! (browser canvas in production, a recording fake in tests).
//!
//! External contract with the host grid: surface state is reset to a
//! neutral baseline before each cell's paint, so clip regions
//! established here are not reverted by the renderer. Transforms are
//! different: any `save`/`rotate` the renderer pushes is popped before
//! the draw call returns, including on the error path.

/// Canvas-2D-shaped drawing surface.
pub trait GraphicsContext {
    /// Push the current surface state (transform, clip, styles).
    fn save(&mut self);
    /// Pop back to the most recently saved state.
    fn restore(&mut self);
    /// Rotate the surface about the origin by `radians`.
    fn rotate(&mut self, radians: f64);

    fn begin_path(&mut self);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Intersect the clip region with the current path.
    fn clip(&mut self);

    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    fn set_font(&mut self, font: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_text_align(&mut self, align: &str);
    fn set_text_baseline(&mut self, baseline: &str);

    /// Line height of `font`.
    fn measure_font_height(&mut self, font: &str) -> f64;
    /// Width of `text` rendered at `font_size` in the grid font family.
    fn measure_string_width(&mut self, text: &str, font_size: f64) -> f64;
}
