//! Event sinks: where the engine publishes `MatchEvent`s.
//!
//! The engine owns its sinks as boxed trait objects. A caller that needs
//! to read a sink back after play (a statistics tracker, a test log)
//! subscribes an `Rc<RefCell<S>>` and keeps its own clone of the `Rc`.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use super::event::{EventKind, MatchEvent};

/// Receives engine notifications.
///
/// Called synchronously, after the state change the event describes has
/// been applied.
pub trait EventSink {
    fn notify(&mut self, event: &MatchEvent);
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn notify(&mut self, event: &MatchEvent) {
        (**self).notify(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Rc<RefCell<S>> {
    fn notify(&mut self, event: &MatchEvent) {
        self.borrow_mut().notify(event);
    }
}

/// Records every event it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<MatchEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A shareable log: subscribe one clone, read the other.
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Kinds of the recorded events, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.iter().map(MatchEvent::kind).collect()
    }

    /// Drain the recorded events.
    pub fn take(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: &MatchEvent) {
        self.events.push(event.clone());
    }
}

/// Emits every event as a `tracing` record at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn notify(&mut self, event: &MatchEvent) {
        tracing::debug!(kind = event.name(), ?event, "match event");
    }
}

/// The engine's subscriber list. Most engines carry one or two sinks.
#[derive(Default)]
pub struct Subscribers {
    sinks: SmallVec<[Box<dyn EventSink>; 2]>,
}

impl Subscribers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Deliver an event to every sink in subscription order.
    pub fn publish(&mut self, event: &MatchEvent) {
        for sink in &mut self.sinks {
            sink.notify(event);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.sinks.len())
            .finish()
    }
}
