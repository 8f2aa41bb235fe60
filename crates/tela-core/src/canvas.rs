//! Canvas controller owning the stacked surfaces and the viewport.

use crate::events::{CanvasEvent, EventEmitter, ListenerId};
use crate::options::{CanvasOptions, SetDimensionOptions};
use crate::surface::{Surface, SurfaceResult};
use crate::viewport::Viewport;
use kurbo::{Affine, Point, Size, Vec2};

/// Canvas controller over a pair of stacked surfaces.
///
/// Owns the lower (render) and upper (interaction) surfaces, the
/// logical CSS-pixel dimensions shared by both, the injected device
/// pixel ratio, and the viewport transform. All operations are
/// synchronous and single-owner; dimension values are never validated,
/// so zero or negative sizes flow into logical state unchanged.
pub struct Canvas<S: Surface> {
    lower: S,
    upper: S,
    width: f64,
    height: f64,
    pixel_ratio: f64,
    viewport: Viewport,
    events: EventEmitter,
}

impl<S: Surface> Canvas<S> {
    /// Create a canvas over the given surfaces.
    ///
    /// Dimensions come from `options`, falling back to the lower
    /// surface's current backing-store size. Pixel-ratio scaling is
    /// applied once before returning.
    pub fn new(lower: S, upper: S, options: CanvasOptions) -> SurfaceResult<Self> {
        let (backstore_width, backstore_height) = lower.backstore_size();
        let mut canvas = Self {
            lower,
            upper,
            width: options.width.unwrap_or(backstore_width as f64),
            height: options.height.unwrap_or(backstore_height as f64),
            pixel_ratio: options.pixel_ratio.unwrap_or(1.0),
            viewport: Viewport::new(),
            events: EventEmitter::new(),
        };
        canvas.apply_pixel_ratio_scaling()?;
        Ok(canvas)
    }

    /// Logical width in CSS pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Logical height in CSS pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The injected device pixel ratio.
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// The viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The current viewport transform.
    pub fn viewport_transform(&self) -> Affine {
        self.viewport.transform()
    }

    /// The lower (render) surface.
    pub fn lower(&self) -> &S {
        &self.lower
    }

    /// The upper (interaction) surface.
    pub fn upper(&self) -> &S {
        &self.upper
    }

    /// Mutable access to the lower surface.
    pub fn lower_mut(&mut self) -> &mut S {
        &mut self.lower
    }

    /// Mutable access to the upper surface.
    pub fn upper_mut(&mut self) -> &mut S {
        &mut self.upper
    }

    /// The event emitter.
    pub fn events(&self) -> &EventEmitter {
        &self.events
    }

    /// Mutable access to the event emitter.
    pub fn events_mut(&mut self) -> &mut EventEmitter {
        &mut self.events
    }

    /// Register an event listener.
    pub fn on(&mut self, listener: impl FnMut(&CanvasEvent) + 'static) -> ListenerId {
        self.events.on(listener)
    }

    /// Unregister an event listener.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    /// Set both logical dimensions.
    pub fn set_dimensions(&mut self, size: Size, options: SetDimensionOptions) -> SurfaceResult<()> {
        self.set_dimension_values(Some(size.width), Some(size.height), options)
    }

    /// Set the logical width.
    pub fn set_width(&mut self, value: f64, options: SetDimensionOptions) -> SurfaceResult<()> {
        self.set_dimension_values(Some(value), None, options)
    }

    /// Set the logical height.
    pub fn set_height(&mut self, value: f64, options: SetDimensionOptions) -> SurfaceResult<()> {
        self.set_dimension_values(None, Some(value), options)
    }

    fn set_dimension_values(
        &mut self,
        width: Option<f64>,
        height: Option<f64>,
        options: SetDimensionOptions,
    ) -> SurfaceResult<()> {
        if let Some(width) = width {
            if !options.css_only {
                self.lower.set_backstore_size(width as u32, self.lower.backstore_size().1)?;
                self.upper.set_backstore_size(width as u32, self.upper.backstore_size().1)?;
                self.width = width;
            }
            if !options.backstore_only {
                let css = format!("{}px", width);
                self.set_css_width(&css)?;
            }
        }
        if let Some(height) = height {
            if !options.css_only {
                self.lower.set_backstore_size(self.lower.backstore_size().0, height as u32)?;
                self.upper.set_backstore_size(self.upper.backstore_size().0, height as u32)?;
                self.height = height;
            }
            if !options.backstore_only {
                let css = format!("{}px", height);
                self.set_css_height(&css)?;
            }
        }

        // The scaling pass re-derives both dimension sets from logical
        // state, so it always runs after a dimension change.
        self.apply_pixel_ratio_scaling()?;

        log::debug!(
            "dimensions set: {}x{} (pixel ratio {})",
            self.width,
            self.height,
            self.pixel_ratio
        );
        self.events.emit(&CanvasEvent::DimensionsChanged {
            width: self.width,
            height: self.height,
        });
        Ok(())
    }

    fn set_css_width(&mut self, value: &str) -> SurfaceResult<()> {
        let css_height = format!("{}px", self.height);
        self.lower.set_css_size(value, &css_height)?;
        self.upper.set_css_size(value, &css_height)
    }

    fn set_css_height(&mut self, value: &str) -> SurfaceResult<()> {
        let css_width = format!("{}px", self.width);
        self.lower.set_css_size(&css_width, value)?;
        self.upper.set_css_size(&css_width, value)
    }

    /// Re-apply device-pixel-ratio scaling to both surfaces.
    ///
    /// Sets each backing store to `round(logical × ratio)` device
    /// pixels, the CSS size to the unscaled logical size, and scales
    /// the drawing context by `(ratio, ratio)` so draw calls use
    /// logical units. Call once per dimension change: the context
    /// scale compounds across repeated calls on an unchanged surface.
    pub fn apply_pixel_ratio_scaling(&mut self) -> SurfaceResult<()> {
        let backstore_width = (self.width * self.pixel_ratio).round() as u32;
        let backstore_height = (self.height * self.pixel_ratio).round() as u32;
        let css_width = format!("{}px", self.width);
        let css_height = format!("{}px", self.height);

        for surface in [&mut self.lower, &mut self.upper] {
            surface.set_backstore_size(backstore_width, backstore_height)?;
            surface.set_css_size(&css_width, &css_height)?;
            surface.scale_context(self.pixel_ratio, self.pixel_ratio)?;
        }
        Ok(())
    }

    /// Resize to new dimensions, keeping the visual center anchored.
    ///
    /// Sets the new dimensions, then pans by half the dimension change
    /// so the point previously at the viewport center stays there.
    pub fn resize(&mut self, next_width: f64, next_height: f64) -> SurfaceResult<()> {
        let prev_width = self.width;
        let prev_height = self.height;

        self.set_dimension_values(
            Some(next_width),
            Some(next_height),
            SetDimensionOptions::default(),
        )?;

        let delta = Vec2::new(
            next_width / 2.0 - prev_width / 2.0,
            next_height / 2.0 - prev_height / 2.0,
        );
        self.relative_pan(delta);

        log::debug!(
            "resized {}x{} -> {}x{}",
            prev_width,
            prev_height,
            next_width,
            next_height
        );
        self.events.emit(&CanvasEvent::Resized {
            width: next_width,
            height: next_height,
        });
        Ok(())
    }

    /// Replace the viewport transform wholesale. Any six numbers are
    /// accepted; no validation is performed.
    pub fn set_viewport_transform(&mut self, transform: Affine) {
        self.viewport.set_transform(transform);
        self.emit_viewport_changed();
    }

    /// Pan so that `point` lands at the top-left corner of the visible
    /// viewport.
    pub fn absolute_pan(&mut self, point: Point) {
        self.viewport.absolute_pan(point);
        self.emit_viewport_changed();
    }

    /// Pan the viewport by a delta.
    pub fn relative_pan(&mut self, delta: Vec2) {
        self.viewport.relative_pan(delta);
        self.emit_viewport_changed();
    }

    fn emit_viewport_changed(&mut self) {
        self.events.emit(&CanvasEvent::ViewportChanged {
            transform: self.viewport.transform(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn canvas_100x100_at_2x() -> Canvas<MemorySurface> {
        Canvas::new(
            MemorySurface::new(),
            MemorySurface::new(),
            CanvasOptions::new()
                .with_width(100.0)
                .with_height(100.0)
                .with_pixel_ratio(2.0),
        )
        .unwrap()
    }

    #[test]
    fn test_construction_scales_both_surfaces() {
        let canvas = canvas_100x100_at_2x();

        for surface in [canvas.lower(), canvas.upper()] {
            assert_eq!(surface.backstore_size(), (200, 200));
            assert_eq!(surface.css_size(), ("100px", "100px"));
            assert_eq!(surface.context_scale(), (2.0, 2.0));
        }
        assert_eq!(canvas.viewport_transform(), Affine::IDENTITY);
    }

    #[test]
    fn test_dimensions_fall_back_to_lower_backstore() {
        let canvas = Canvas::new(
            MemorySurface::with_backstore(300, 150),
            MemorySurface::new(),
            CanvasOptions::new(),
        )
        .unwrap();

        assert_eq!(canvas.width(), 300.0);
        assert_eq!(canvas.height(), 150.0);
        assert_eq!(canvas.pixel_ratio(), 1.0);
        assert_eq!(canvas.lower().backstore_size(), (300, 150));
    }

    #[test]
    fn test_set_dimensions_scales_backstore() {
        let mut canvas = canvas_100x100_at_2x();

        canvas
            .set_dimensions(Size::new(320.0, 240.0), SetDimensionOptions::default())
            .unwrap();

        assert_eq!(canvas.width(), 320.0);
        assert_eq!(canvas.height(), 240.0);
        for surface in [canvas.lower(), canvas.upper()] {
            assert_eq!(surface.backstore_size(), (640, 480));
            assert_eq!(surface.css_size(), ("320px", "240px"));
        }
    }

    #[test]
    fn test_backstore_size_rounds_to_device_pixels() {
        let mut canvas = Canvas::new(
            MemorySurface::new(),
            MemorySurface::new(),
            CanvasOptions::new().with_pixel_ratio(1.5),
        )
        .unwrap();

        canvas
            .set_dimensions(Size::new(101.0, 33.0), SetDimensionOptions::default())
            .unwrap();

        // 101 * 1.5 = 151.5 and 33 * 1.5 = 49.5, both round half up.
        assert_eq!(canvas.lower().backstore_size(), (152, 50));
    }

    #[test]
    fn test_css_only_leaves_logical_dimensions() {
        let mut canvas = canvas_100x100_at_2x();

        canvas
            .set_width(500.0, SetDimensionOptions::css_only())
            .unwrap();

        assert_eq!(canvas.width(), 100.0);
        // The scaling pass re-derives sizes from logical state, so the
        // surfaces end up back at the old dimensions.
        assert_eq!(canvas.lower().backstore_size(), (200, 200));
        assert_eq!(canvas.lower().css_size(), ("100px", "100px"));
    }

    #[test]
    fn test_backstore_only_updates_logical_dimensions() {
        let mut canvas = canvas_100x100_at_2x();

        canvas
            .set_width(50.0, SetDimensionOptions::backstore_only())
            .unwrap();

        assert_eq!(canvas.width(), 50.0);
        assert_eq!(canvas.lower().backstore_size(), (100, 200));
    }

    #[test]
    fn test_resize_recenters_viewport() {
        // Worked example: 100x100 at ratio 2, identity transform.
        let mut canvas = canvas_100x100_at_2x();

        canvas.resize(200.0, 100.0).unwrap();

        for surface in [canvas.lower(), canvas.upper()] {
            assert_eq!(surface.backstore_size(), (400, 200));
            assert_eq!(surface.css_size(), ("200px", "100px"));
        }
        assert_eq!(canvas.viewport().translation(), Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_resize_delta_composes_with_existing_pan() {
        let mut canvas = canvas_100x100_at_2x();
        canvas.absolute_pan(Point::new(-10.0, -20.0));
        assert_eq!(canvas.viewport().translation(), Vec2::new(10.0, 20.0));

        canvas.resize(300.0, 50.0).unwrap();

        // (e + (300-100)/2, f + (50-100)/2)
        assert_eq!(canvas.viewport().translation(), Vec2::new(110.0, -5.0));
    }

    #[test]
    fn test_repeated_scaling_compounds_context_scale() {
        let mut canvas = canvas_100x100_at_2x();
        assert_eq!(canvas.lower().context_scale(), (2.0, 2.0));

        // No dimension change in between: the scale compounds.
        canvas.apply_pixel_ratio_scaling().unwrap();
        assert_eq!(canvas.lower().context_scale(), (4.0, 4.0));

        // A dimension change resets the backing store, and with it the
        // context scale.
        canvas
            .set_dimensions(Size::new(100.0, 100.0), SetDimensionOptions::default())
            .unwrap();
        assert_eq!(canvas.lower().context_scale(), (2.0, 2.0));
    }

    #[test]
    fn test_negative_dimensions_pass_through() {
        let mut canvas = canvas_100x100_at_2x();

        canvas
            .set_dimensions(Size::new(-5.0, 0.0), SetDimensionOptions::default())
            .unwrap();

        assert_eq!(canvas.width(), -5.0);
        assert_eq!(canvas.height(), 0.0);
        // The backing store saturates at zero device pixels.
        assert_eq!(canvas.lower().backstore_size(), (0, 0));
    }

    #[test]
    fn test_set_viewport_transform_accepts_any_matrix() {
        let mut canvas = canvas_100x100_at_2x();
        let matrix = Affine::new([0.0, f64::NAN, -3.0, 0.5, f64::INFINITY, -0.0]);

        canvas.set_viewport_transform(matrix);

        let coefficients = canvas.viewport_transform().as_coeffs();
        assert!(coefficients[1].is_nan());
        assert_eq!(coefficients[4], f64::INFINITY);
    }

    #[test]
    fn test_events_are_emitted_on_mutation() {
        let mut canvas = canvas_100x100_at_2x();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_by_listener = Rc::clone(&seen);
        canvas.on(move |event| seen_by_listener.borrow_mut().push(event.clone()));

        canvas.resize(200.0, 100.0).unwrap();

        let events = seen.borrow();
        assert_eq!(
            events.as_slice(),
            &[
                CanvasEvent::DimensionsChanged {
                    width: 200.0,
                    height: 100.0
                },
                CanvasEvent::ViewportChanged {
                    transform: Affine::new([1.0, 0.0, 0.0, 1.0, 50.0, 0.0])
                },
                CanvasEvent::Resized {
                    width: 200.0,
                    height: 100.0
                },
            ]
        );
    }

    #[test]
    fn test_unsubscribed_listener_stops_receiving() {
        let mut canvas = canvas_100x100_at_2x();
        let count = Rc::new(RefCell::new(0usize));

        let count_by_listener = Rc::clone(&count);
        let id = canvas.on(move |_| *count_by_listener.borrow_mut() += 1);

        canvas.relative_pan(Vec2::new(1.0, 1.0));
        assert_eq!(*count.borrow(), 1);

        assert!(canvas.off(id));
        canvas.relative_pan(Vec2::new(1.0, 1.0));
        assert_eq!(*count.borrow(), 1);
    }
}
