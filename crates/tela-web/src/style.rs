//! DOM styling helpers.

use tela_core::surface::{SurfaceError, SurfaceResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

/// Map a JS exception into a surface error.
pub(crate) fn js_err(value: JsValue) -> SurfaceError {
    SurfaceError::Backend(format!("{:?}", value))
}

/// Append a CSS class to an element.
pub fn add_class(element: &Element, class: &str) -> SurfaceResult<()> {
    element.class_list().add_1(class).map_err(js_err)
}

/// Set several inline CSS properties at once.
pub fn set_style(element: &HtmlElement, properties: &[(&str, &str)]) -> SurfaceResult<()> {
    let style = element.style();
    for (property, value) in properties {
        style.set_property(property, value).map_err(js_err)?;
    }
    Ok(())
}

/// Disable user text selection on an element.
pub fn make_unselectable(element: &HtmlElement) -> SurfaceResult<()> {
    element
        .set_attribute("unselectable", "on")
        .map_err(js_err)?;
    set_style(
        element,
        &[("user-select", "none"), ("-webkit-user-select", "none")],
    )
}

/// Wrap an element in a new container `<div>` with the given class.
///
/// The container takes the element's place in the tree and the element
/// moves inside it.
pub fn wrap_element(
    document: &Document,
    element: &Element,
    class: &str,
) -> SurfaceResult<HtmlElement> {
    let wrapper = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SurfaceError::Backend("created element is not an HtmlElement".into()))?;
    add_class(&wrapper, class)?;

    if let Some(parent) = element.parent_node() {
        parent
            .insert_before(&wrapper, Some(element.as_ref()))
            .map_err(js_err)?;
    }
    wrapper.append_child(element).map_err(js_err)?;
    Ok(wrapper)
}

/// Construct a blank canvas element.
pub fn create_canvas(document: &Document) -> SurfaceResult<HtmlCanvasElement> {
    document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SurfaceError::Backend("created element is not a canvas".into()))
}
