//! Tela browser backend
//!
//! DOM integration for the Tela canvas library: a `Surface`
//! implementation over canvas elements, styling helpers, the stacked
//! lower/upper canvas scaffolding, and resize observation. Only
//! meaningful on wasm32 targets.

#[cfg(target_arch = "wasm32")]
mod observer;
#[cfg(target_arch = "wasm32")]
mod stack;
#[cfg(target_arch = "wasm32")]
pub mod style;
#[cfg(target_arch = "wasm32")]
mod surface;

#[cfg(target_arch = "wasm32")]
pub use observer::ContainerObserver;
#[cfg(target_arch = "wasm32")]
pub use stack::{CanvasStack, LOWER_CANVAS_CLASS, UPPER_CANVAS_CLASS, WRAPPER_CLASS};
#[cfg(target_arch = "wasm32")]
pub use surface::DomSurface;
