use std::collections::BTreeMap;

use crate::event_sourcing::core::{Aggregate, AggregateId, DomainEvent, EventEnvelope};

// ============================================================================
// Generic Event Store - Repository for Events
// ============================================================================
//
// Process-lifetime event store, generic over the event type.
//
// Responsibilities:
// 1. Append events to a per-aggregate stream (append-only)
// 2. Load event history for aggregates
// 3. Enforce optimistic concurrency on the expected version
//
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("Cannot append empty event list")]
    EmptyAppend,

    #[error("Concurrency conflict on aggregate {aggregate_id}: expected version {expected}, but current is {actual}")]
    ConcurrencyConflict {
        aggregate_id: AggregateId,
        expected: i64,
        actual: i64,
    },
}

pub struct EventStore<E: DomainEvent> {
    aggregate_type_name: String, // e.g. "Order"
    streams: BTreeMap<AggregateId, Vec<EventEnvelope<E>>>,
}

impl<E: DomainEvent> EventStore<E> {
    pub fn new(aggregate_type_name: &str) -> Self {
        Self {
            aggregate_type_name: aggregate_type_name.to_string(),
            streams: BTreeMap::new(),
        }
    }

    /// Append events to the stream of `aggregate_id`.
    ///
    /// Returns the new version number after appending. Nothing is written
    /// when the check fails.
    pub fn append_events(
        &mut self,
        aggregate_id: AggregateId,
        expected_version: i64,
        events: Vec<EventEnvelope<E>>,
    ) -> Result<i64, EventStoreError> {
        if events.is_empty() {
            return Err(EventStoreError::EmptyAppend);
        }

        let current_version = self.current_version(aggregate_id);
        if current_version != expected_version {
            return Err(EventStoreError::ConcurrencyConflict {
                aggregate_id,
                expected: expected_version,
                actual: current_version,
            });
        }

        let event_count = events.len();
        let stream = self.streams.entry(aggregate_id).or_default();
        stream.extend(events);
        let new_version = stream.last().map_or(0, |e| e.sequence_number);

        tracing::debug!(
            aggregate_id,
            aggregate_type = %self.aggregate_type_name,
            new_version,
            event_count,
            "Appended events to event store"
        );

        Ok(new_version)
    }

    /// Start the stream of a new aggregate with its first event.
    ///
    /// Callers hand out fresh ids, so the stream is always empty here.
    pub fn open_stream(&mut self, aggregate_id: AggregateId, first: EventEnvelope<E>) {
        debug_assert!(!self.aggregate_exists(aggregate_id), "stream {aggregate_id} already open");

        tracing::debug!(
            aggregate_id,
            aggregate_type = %self.aggregate_type_name,
            event_type = %first.event_type,
            "Opened event stream"
        );

        self.streams.entry(aggregate_id).or_default().push(first);
    }

    /// All events of one aggregate, oldest first. Empty for unknown ids.
    pub fn load_events(&self, aggregate_id: AggregateId) -> &[EventEnvelope<E>] {
        self.streams
            .get(&aggregate_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Sequence number of the last event, 0 for a new aggregate
    pub fn current_version(&self, aggregate_id: AggregateId) -> i64 {
        self.load_events(aggregate_id)
            .last()
            .map_or(0, |e| e.sequence_number)
    }

    /// Rebuild an aggregate from its stream; `Ok(None)` when it has no events
    pub fn load_aggregate<A>(&self, aggregate_id: AggregateId) -> Result<Option<A>, A::Error>
    where
        A: Aggregate<Event = E>,
    {
        A::load_from_events(self.load_events(aggregate_id))
    }

    pub fn aggregate_exists(&self, aggregate_id: AggregateId) -> bool {
        self.current_version(aggregate_id) > 0
    }

    /// Total number of recorded events across all streams
    pub fn event_count(&self) -> usize {
        self.streams.values().map(Vec::len).sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
