//! Canvas-element surface backed by the 2D drawing context.

use crate::style::js_err;
use tela_core::surface::{Surface, SurfaceError, SurfaceResult};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Surface over an `HtmlCanvasElement` and its 2D context.
///
/// Assigning the backing-store size through `set_backstore_size`
/// resets the context state, including any accumulated scale; this is
/// the browser's own behavior and the controller relies on it.
pub struct DomSurface {
    element: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl DomSurface {
    /// Wrap a canvas element, acquiring its 2D context.
    pub fn new(element: HtmlCanvasElement) -> SurfaceResult<Self> {
        let context = element
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| SurfaceError::ContextUnavailable("2d".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::ContextUnavailable("2d".to_string()))?;
        Ok(Self { element, context })
    }

    /// The underlying canvas element.
    pub fn element(&self) -> &HtmlCanvasElement {
        &self.element
    }

    /// The 2D drawing context.
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }
}

impl Surface for DomSurface {
    fn set_backstore_size(&mut self, width: u32, height: u32) -> SurfaceResult<()> {
        self.element.set_width(width);
        self.element.set_height(height);
        Ok(())
    }

    fn backstore_size(&self) -> (u32, u32) {
        (self.element.width(), self.element.height())
    }

    fn set_css_size(&mut self, width: &str, height: &str) -> SurfaceResult<()> {
        let style = self.element.style();
        style.set_property("width", width).map_err(js_err)?;
        style.set_property("height", height).map_err(js_err)
    }

    fn scale_context(&mut self, sx: f64, sy: f64) -> SurfaceResult<()> {
        self.context.scale(sx, sy).map_err(js_err)
    }
}
