//! Engine notifications.
//!
//! The engine publishes a `MatchEvent` for every transition. Presentation,
//! statistics and persistence live behind `EventSink` and never mutate the
//! match themselves.

pub mod event;
pub mod sink;

pub use event::{EventKind, MatchEvent};
pub use sink::{EventLog, EventSink, Subscribers, TracingSink};
