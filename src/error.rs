//! Structured error types for cellview.
//!
//! Alignment values reach the renderer as strings from the host grid's
//! column model. A value outside the recognized set is a programmer
//! error on the host side and fails fast instead of silently defaulting,
//! since an unknown alignment would produce ambiguous text placement.

/// All errors that can occur while painting a cell.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Horizontal alignment outside `left` / `center` / `right`.
    #[error("unrecognized horizontal alignment: {0:?}")]
    InvalidHorizontalAlignment(String),

    /// Vertical alignment outside `top` / `center` / `bottom`.
    #[error("unrecognized vertical alignment: {0:?}")]
    InvalidVerticalAlignment(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(target_arch = "wasm32")]
impl From<RenderError> for wasm_bindgen::JsValue {
    fn from(e: RenderError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
