//! Surface abstraction over a drawing target.

use thiserror::Error;

/// Surface errors.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Drawing context unavailable: {0}")]
    ContextUnavailable(String),
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Contract the canvas controller needs from a drawing surface.
///
/// Implementations can wrap a DOM canvas element, an offscreen buffer,
/// or a recording stub for tests. Errors come from the backend only;
/// dimension values are never validated here.
///
/// Note: no `Send`/`Sync` bounds — the DOM backend is single-threaded.
pub trait Surface {
    /// Set the backing-store size in device pixels.
    ///
    /// Resets the context scale to identity, matching 2D canvas
    /// semantics where assigning `width`/`height` resets context state.
    fn set_backstore_size(&mut self, width: u32, height: u32) -> SurfaceResult<()>;

    /// The backing-store size in device pixels.
    fn backstore_size(&self) -> (u32, u32);

    /// Set the CSS size as dimension strings, e.g. `("100px", "50px")`.
    fn set_css_size(&mut self, width: &str, height: &str) -> SurfaceResult<()>;

    /// Multiply the drawing-context scale by `(sx, sy)`.
    ///
    /// Scales compound across calls until the next backing-store set.
    fn scale_context(&mut self, sx: f64, sy: f64) -> SurfaceResult<()>;
}

/// In-memory surface for tests and headless hosts.
///
/// Records the backing-store size, the CSS size strings, and the
/// accumulated context scale.
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySurface {
    backstore: (u32, u32),
    css: (String, String),
    context_scale: (f64, f64),
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// Create an empty surface with an identity context scale.
    pub fn new() -> Self {
        Self {
            backstore: (0, 0),
            css: (String::new(), String::new()),
            context_scale: (1.0, 1.0),
        }
    }

    /// Create a surface with an initial backing-store size.
    pub fn with_backstore(width: u32, height: u32) -> Self {
        Self {
            backstore: (width, height),
            ..Self::new()
        }
    }

    /// The recorded CSS size strings.
    pub fn css_size(&self) -> (&str, &str) {
        (&self.css.0, &self.css.1)
    }

    /// The accumulated context scale.
    pub fn context_scale(&self) -> (f64, f64) {
        self.context_scale
    }
}

impl Surface for MemorySurface {
    fn set_backstore_size(&mut self, width: u32, height: u32) -> SurfaceResult<()> {
        self.backstore = (width, height);
        self.context_scale = (1.0, 1.0);
        Ok(())
    }

    fn backstore_size(&self) -> (u32, u32) {
        self.backstore
    }

    fn set_css_size(&mut self, width: &str, height: &str) -> SurfaceResult<()> {
        self.css = (width.to_string(), height.to_string());
        Ok(())
    }

    fn scale_context(&mut self, sx: f64, sy: f64) -> SurfaceResult<()> {
        self.context_scale.0 *= sx;
        self.context_scale.1 *= sy;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backstore_set_resets_context_scale() {
        let mut surface = MemorySurface::new();
        surface.scale_context(2.0, 2.0).unwrap();
        assert_eq!(surface.context_scale(), (2.0, 2.0));

        surface.set_backstore_size(200, 100).unwrap();
        assert_eq!(surface.backstore_size(), (200, 100));
        assert_eq!(surface.context_scale(), (1.0, 1.0));
    }

    #[test]
    fn test_context_scale_compounds() {
        let mut surface = MemorySurface::new();
        surface.scale_context(2.0, 2.0).unwrap();
        surface.scale_context(2.0, 2.0).unwrap();
        assert_eq!(surface.context_scale(), (4.0, 4.0));
    }

    #[test]
    fn test_css_size_is_recorded_verbatim() {
        let mut surface = MemorySurface::new();
        surface.set_css_size("100px", "50px").unwrap();
        assert_eq!(surface.css_size(), ("100px", "50px"));
    }
}
