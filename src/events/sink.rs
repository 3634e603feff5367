//! Event sinks.

use super::event::GameEvent;

/// Receiver for game events.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

/// Sink that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &GameEvent) {}
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &GameEvent) {
        (**self).emit(event);
    }
}

/// In-memory event collector with a few query helpers.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in emission order.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Only the `RoundResolved` events.
    pub fn rounds(&self) -> impl Iterator<Item = &GameEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::RoundResolved { .. }))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_collects() {
        let mut log = EventLog::new();
        log.emit(&GameEvent::GameStarted { deck_size: 2, seed: 0 });
        assert_eq!(log.len(), 1);
        assert_eq!(log.rounds().count(), 0);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_vec_sink_and_reborrow() {
        fn emit_rejected(mut sink: impl EventSink) {
            sink.emit(&GameEvent::Rejected { names: vec!["x".into()] });
        }

        let mut events: Vec<GameEvent> = Vec::new();
        emit_rejected(&mut events);
        assert_eq!(events.len(), 1);

        let mut null = NullSink;
        null.emit(&events[0]);
    }
}
