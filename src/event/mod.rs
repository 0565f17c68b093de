mod bus;

pub use bus::EventBus;

/// Change notifications raised by the sketch engine after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    /// The stroke history changed; the whole frame must be replayed.
    DrawingChanged,
    /// Only the equipped tool's preview anchor moved; history is untouched.
    ToolMoved,
}

/// Receives canvas events. Dispatch is synchronous: every handler has run
/// to completion before the mutating call returns.
pub trait EventHandler {
    fn handle_event(&mut self, event: &CanvasEvent);
}

// Let plain closures subscribe without a wrapper type.
impl<F: FnMut(&CanvasEvent)> EventHandler for F {
    fn handle_event(&mut self, event: &CanvasEvent) {
        self(event);
    }
}
