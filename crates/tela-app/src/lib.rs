//! Tela demo shell
//!
//! Mounts a Tela canvas stack into the hosting page and keeps it
//! sized to its container.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
