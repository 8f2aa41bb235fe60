//! Event subscription for canvas state changes.
//!
//! The emitter is a value held by the canvas, not a base type; hosts
//! subscribe through it to observe dimension and viewport mutations.

use kurbo::Affine;

/// Events published by the canvas controller.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// Logical dimensions changed through a dimension setter.
    DimensionsChanged { width: f64, height: f64 },
    /// The viewport transform was replaced or panned.
    ViewportChanged { transform: Affine },
    /// A container resize completed (dimensions set and view recentered).
    Resized { width: f64, height: f64 },
}

/// Token identifying a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Synchronous event fan-out in registration order.
#[derive(Default)]
pub struct EventEmitter {
    listeners: Vec<(ListenerId, Box<dyn FnMut(&CanvasEvent)>)>,
    next_id: u64,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl EventEmitter {
    /// Create an emitter with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; the returned token unregisters it.
    pub fn on(&mut self, listener: impl FnMut(&CanvasEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns false if the token is unknown.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener, in registration order.
    pub fn emit(&mut self, event: &CanvasEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
