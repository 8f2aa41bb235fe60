//! Stacked lower/upper canvas scaffolding.

use crate::style::{self, js_err};
use crate::surface::DomSurface;
use tela_core::canvas::Canvas;
use tela_core::events::CanvasEvent;
use tela_core::options::CanvasOptions;
use tela_core::surface::{SurfaceError, SurfaceResult};
use web_sys::{HtmlCanvasElement, HtmlElement};

/// Class applied to the lower (render) canvas element.
pub const LOWER_CANVAS_CLASS: &str = "lower-canvas";
/// Class applied to the upper (interaction) canvas element.
pub const UPPER_CANVAS_CLASS: &str = "upper-canvas";
/// Class applied to the wrapper container element.
pub const WRAPPER_CLASS: &str = "canvas-container";

/// A canvas controller mounted into the page as a pair of stacked
/// canvas elements inside a wrapper container.
///
/// The wrapper's CSS size tracks the controller's logical dimensions
/// through a subscribed event listener.
pub struct CanvasStack {
    canvas: Canvas<DomSurface>,
    wrapper: HtmlElement,
}

impl CanvasStack {
    /// Build the stack around an existing canvas element.
    ///
    /// The element becomes the lower canvas; a wrapper `<div>` takes
    /// its place in the tree and a freshly created upper canvas is
    /// stacked on top. The pixel ratio comes from `options`, else from
    /// a single `window.devicePixelRatio` read.
    pub fn attach(element: HtmlCanvasElement, options: CanvasOptions) -> SurfaceResult<Self> {
        let document = element.owner_document().ok_or_else(|| {
            SurfaceError::Backend("canvas element has no owning document".to_string())
        })?;

        let width = options.width.unwrap_or_else(|| element.width() as f64);
        let height = options.height.unwrap_or_else(|| element.height() as f64);
        let pixel_ratio = options
            .pixel_ratio
            .or_else(|| web_sys::window().map(|window| window.device_pixel_ratio()))
            .unwrap_or(1.0);

        style::add_class(&element, LOWER_CANVAS_CLASS)?;
        apply_canvas_style(&element, width, height)?;

        let wrapper = style::wrap_element(&document, &element, WRAPPER_CLASS)?;
        style::set_style(
            &wrapper,
            &[
                ("position", "relative"),
                ("width", &px(width)),
                ("height", &px(height)),
            ],
        )?;

        let upper_element = style::create_canvas(&document)?;
        style::add_class(&upper_element, UPPER_CANVAS_CLASS)?;
        apply_canvas_style(&upper_element, width, height)?;
        wrapper.append_child(&upper_element).map_err(js_err)?;

        let lower = DomSurface::new(element)?;
        let upper = DomSurface::new(upper_element)?;

        let mut canvas = Canvas::new(
            lower,
            upper,
            CanvasOptions {
                width: Some(width),
                height: Some(height),
                pixel_ratio: Some(pixel_ratio),
            },
        )?;

        let wrapper_for_sync = wrapper.clone();
        canvas.on(move |event| {
            if let CanvasEvent::DimensionsChanged { width, height } = event {
                let style = wrapper_for_sync.style();
                let _ = style.set_property("width", &px(*width));
                let _ = style.set_property("height", &px(*height));
            }
        });

        log::info!(
            "canvas stack attached: {}x{} (pixel ratio {})",
            width,
            height,
            pixel_ratio
        );
        Ok(Self { canvas, wrapper })
    }

    /// The canvas controller.
    pub fn canvas(&self) -> &Canvas<DomSurface> {
        &self.canvas
    }

    /// Mutable access to the canvas controller.
    pub fn canvas_mut(&mut self) -> &mut Canvas<DomSurface> {
        &mut self.canvas
    }

    /// The wrapper container element.
    pub fn wrapper(&self) -> &HtmlElement {
        &self.wrapper
    }

    /// Resize to new container dimensions, keeping the visual center
    /// anchored. The entry point for geometry-observer callbacks.
    pub fn resize(&mut self, width: f64, height: f64) -> SurfaceResult<()> {
        self.canvas.resize(width, height)
    }
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

fn apply_canvas_style(element: &HtmlCanvasElement, width: f64, height: f64) -> SurfaceResult<()> {
    style::set_style(
        element,
        &[
            ("position", "absolute"),
            ("width", &px(width)),
            ("height", &px(height)),
            ("left", "0"),
            ("top", "0"),
        ],
    )?;
    element.set_width(width as u32);
    element.set_height(height as u32);
    style::make_unselectable(element)
}
