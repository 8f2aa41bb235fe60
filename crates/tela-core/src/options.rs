//! Canvas construction and dimension options.

use serde::{Deserialize, Serialize};

/// Options accepted at canvas construction.
///
/// Only the fields listed here are configurable; unknown keys in
/// deserialized input are ignored rather than assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasOptions {
    /// Initial logical width in CSS pixels. Falls back to the lower
    /// surface's backing-store width when absent.
    pub width: Option<f64>,
    /// Initial logical height in CSS pixels. Falls back to the lower
    /// surface's backing-store height when absent.
    pub height: Option<f64>,
    /// Device pixel ratio. Defaults to 1.0 when absent; the web layer
    /// supplies the browser's value when attaching to a page.
    pub pixel_ratio: Option<f64>,
}

impl CanvasOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial logical width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the initial logical height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the device pixel ratio.
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = Some(pixel_ratio);
        self
    }
}

/// Flags controlling which dimension set a dimension setter touches.
///
/// When neither flag is set, both the backing store and the CSS size
/// are updated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetDimensionOptions {
    /// Only touch the backing store, leaving the CSS size alone.
    pub backstore_only: bool,
    /// Only touch the CSS size, leaving the backing store alone.
    pub css_only: bool,
}

impl SetDimensionOptions {
    /// Update the backing store only.
    pub fn backstore_only() -> Self {
        Self {
            backstore_only: true,
            css_only: false,
        }
    }

    /// Update the CSS size only.
    pub fn css_only() -> Self {
        Self {
            backstore_only: false,
            css_only: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = CanvasOptions::new()
            .with_width(800.0)
            .with_height(600.0)
            .with_pixel_ratio(2.0);

        assert_eq!(options.width, Some(800.0));
        assert_eq!(options.height, Some(600.0));
        assert_eq!(options.pixel_ratio, Some(2.0));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let options: CanvasOptions = serde_json::from_str(
            r#"{"width": 320.0, "selectionColor": "blue", "renderOnAddRemove": false}"#,
        )
        .unwrap();

        assert_eq!(options.width, Some(320.0));
        assert_eq!(options.height, None);
        assert_eq!(options.pixel_ratio, None);
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let options: CanvasOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, CanvasOptions::default());
    }
}
