//! Container resize observation.

use crate::stack::CanvasStack;
use crate::style::js_err;
use std::cell::RefCell;
use std::rc::Rc;
use tela_core::surface::SurfaceResult;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, ResizeObserver, ResizeObserverEntry};

/// Geometry observer feeding container size changes into a stack.
///
/// Wraps a `ResizeObserver` whose callback reads the container's
/// content rect and drives `CanvasStack::resize`. Observation stops
/// when the observer is dropped.
pub struct ContainerObserver {
    observer: ResizeObserver,
    // Held so the JS callback stays valid for the observer's lifetime.
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ContainerObserver {
    /// Observe `container`, resizing `stack` on every geometry change.
    pub fn observe(container: &Element, stack: Rc<RefCell<CanvasStack>>) -> SurfaceResult<Self> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            let Ok(entry) = entries.get(0).dyn_into::<ResizeObserverEntry>() else {
                return;
            };
            let rect = entry.content_rect();
            if let Err(error) = stack.borrow_mut().resize(rect.width(), rect.height()) {
                log::error!("container resize failed: {}", error);
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let observer =
            ResizeObserver::new(callback.as_ref().unchecked_ref()).map_err(js_err)?;
        observer.observe(container);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Stop observing.
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for ContainerObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
