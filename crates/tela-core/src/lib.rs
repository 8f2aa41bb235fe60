//! Tela Core Library
//!
//! Platform-agnostic viewport and surface logic for the Tela
//! stacked-canvas library. The browser backend lives in `tela-web`.

pub mod canvas;
pub mod events;
pub mod options;
pub mod surface;
pub mod viewport;

pub use canvas::Canvas;
pub use events::{CanvasEvent, EventEmitter, ListenerId};
pub use options::{CanvasOptions, SetDimensionOptions};
pub use surface::{MemorySurface, Surface, SurfaceError, SurfaceResult};
pub use viewport::Viewport;
