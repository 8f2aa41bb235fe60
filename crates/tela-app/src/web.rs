//! WebAssembly entry point and page wiring.

use std::cell::RefCell;
use std::rc::Rc;
use tela_core::options::CanvasOptions;
use tela_core::surface::{SurfaceError, SurfaceResult};
use tela_web::{CanvasStack, ContainerObserver};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement};

/// Id of the container element the canvas fills.
const CONTAINER_ID: &str = "tela-container";
/// Id of the lower canvas element.
const CANVAS_ID: &str = "tela-canvas";

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Starting Tela (WASM)");

    if let Err(error) = mount() {
        log::error!("Failed to mount canvas stack: {}", error);
    }
}

fn mount() -> SurfaceResult<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SurfaceError::Backend("no document".to_string()))?;

    let container = find_or_create_container(&document)?;
    let canvas = find_or_create_canvas(&document, &container)?;

    let stack = CanvasStack::attach(canvas, CanvasOptions::new())?;
    let stack = Rc::new(RefCell::new(stack));

    let observer = ContainerObserver::observe(&container, Rc::clone(&stack))?;

    // The observer holds the stack alive through its callback; keep
    // both for the page lifetime.
    std::mem::forget(observer);
    Ok(())
}

fn find_or_create_container(document: &Document) -> SurfaceResult<Element> {
    if let Some(container) = document.get_element_by_id(CONTAINER_ID) {
        return Ok(container);
    }
    let body = document
        .body()
        .ok_or_else(|| SurfaceError::Backend("no document body".to_string()))?;
    let container = document
        .create_element("div")
        .map_err(|e| SurfaceError::Backend(format!("{:?}", e)))?;
    container.set_id(CONTAINER_ID);
    let _ = container
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|element| {
            let style = element.style();
            let _ = style.set_property("width", "100%");
            let _ = style.set_property("height", "100vh");
        });
    body.append_child(&container)
        .map_err(|e| SurfaceError::Backend(format!("{:?}", e)))?;
    Ok(container)
}

fn find_or_create_canvas(
    document: &Document,
    container: &Element,
) -> SurfaceResult<HtmlCanvasElement> {
    if let Some(canvas) = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
    {
        return Ok(canvas);
    }
    let canvas = tela_web::style::create_canvas(document)?;
    canvas.set_id(CANVAS_ID);
    container
        .append_child(&canvas)
        .map_err(|e| SurfaceError::Backend(format!("{:?}", e)))?;
    Ok(canvas)
}
