use std::cell::RefCell;

use crate::event::{CanvasEvent, EventHandler};

/// A simple event bus for broadcasting canvas events to registered handlers.
///
/// Subscription is append-only and dispatch is synchronous, so every handler
/// observes a fully applied mutation (the engine is single-threaded).
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field(
                "handlers",
                &format!("<{} handlers>", self.handlers.borrow().len()),
            )
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus with no subscribers.
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive every subsequent event.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit an event to all registered handlers, in subscription order.
    pub fn emit(&self, event: CanvasEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn emit_reaches_every_subscriber_in_order() {
        let bus = EventBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let log = log.clone();
            bus.subscribe(Box::new(move |_: &CanvasEvent| {
                log.borrow_mut().push(tag);
            }));
        }

        bus.emit(CanvasEvent::DrawingChanged);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn handlers_see_the_emitted_event() {
        let bus = EventBus::new();
        let moved = Rc::new(Cell::new(0));
        let counter = moved.clone();
        bus.subscribe(Box::new(move |event: &CanvasEvent| {
            if *event == CanvasEvent::ToolMoved {
                counter.set(counter.get() + 1);
            }
        }));

        bus.emit(CanvasEvent::ToolMoved);
        bus.emit(CanvasEvent::DrawingChanged);
        assert_eq!(moved.get(), 1);
    }
}
