use uuid::Uuid;

use crate::event_sourcing::{Aggregate, EventEnvelope, EventStore};
use super::aggregate::Order;
use super::commands::OrderCommand;
use super::errors::OrderError;
use super::events::OrderEvent;

// ============================================================================
// Order Store
// ============================================================================
//
// Sole owner of order identity and state:
//   Command → Aggregate → Events → Event Store → read model
//
// Ids are assigned sequentially from 1 and never reused. `orders` keeps the
// read model in creation order; it is refreshed from the event stream after
// every accepted command.
//
// ============================================================================

pub struct OrderStore {
    event_store: EventStore<OrderEvent>,
    orders: Vec<Order>,
    next_id: u64,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            event_store: EventStore::new("Order"),
            orders: Vec::new(),
            next_id: 1,
        }
    }

    /// Place a new order. Inputs are stored verbatim; this never fails.
    pub fn create_order(&mut self, clothes_count: impl Into<String>, address: impl Into<String>) -> Order {
        let order_id = self.next_id;
        let correlation_id = Uuid::new_v4();

        let placed = Order::place(order_id, clothes_count.into(), address.into());
        let mut order = Order::from_placed(&placed);
        let envelope = EventEnvelope::new(order_id, 1, OrderEvent::Placed(placed), correlation_id);
        order.set_version(envelope.sequence_number);

        self.event_store.open_stream(order_id, envelope);
        self.orders.push(order.clone());
        self.next_id += 1;

        tracing::info!(
            order_id,
            clothes_count = %order.clothes_count,
            address = %order.address,
            %correlation_id,
            "Order placed"
        );

        order
    }

    /// All orders, oldest first
    pub fn list_orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get_order(&self, order_id: u64) -> Option<&Order> {
        self.position(order_id).map(|idx| &self.orders[idx])
    }

    /// Set the status of an existing order.
    ///
    /// The id is checked before the status name. A failed call changes nothing.
    pub fn update_status(&mut self, order_id: u64, status: &str) -> Result<Order, OrderError> {
        let idx = self.position(order_id).ok_or(OrderError::NotFound(order_id))?;

        let command = OrderCommand::UpdateStatus { status: status.to_string() };
        let correlation_id = Uuid::new_v4();

        // Load current aggregate state from its stream
        let mut aggregate: Order = self
            .event_store
            .load_aggregate(order_id)?
            .ok_or(OrderError::NotFound(order_id))?;

        let expected_version = aggregate.version();
        let domain_events = aggregate.handle_command(&command).inspect_err(|e| {
            tracing::warn!(order_id, status, error = %e, "Status update rejected");
        })?;

        if domain_events.is_empty() {
            tracing::debug!(order_id, status, "Status unchanged");
            return Ok(self.orders[idx].clone());
        }

        let mut envelopes = Vec::with_capacity(domain_events.len());
        let mut seq = expected_version;
        for domain_event in domain_events {
            seq += 1;
            aggregate.apply_event(&domain_event)?;
            aggregate.set_version(seq);
            envelopes.push(EventEnvelope::new(order_id, seq, domain_event, correlation_id));
        }

        self.event_store.append_events(order_id, expected_version, envelopes)?;
        self.orders[idx] = aggregate.clone();

        tracing::info!(
            order_id = aggregate.aggregate_id(),
            status = %aggregate.status,
            version = aggregate.version,
            %correlation_id,
            "Order status updated"
        );

        Ok(aggregate)
    }

    /// Event log of one order in sequence order; empty for unknown ids
    pub fn history(&self, order_id: u64) -> &[EventEnvelope<OrderEvent>] {
        self.event_store.load_events(order_id)
    }

    /// Events recorded across all orders
    pub fn event_count(&self) -> usize {
        self.event_store.event_count()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    // `orders` is sorted by id because ids are assigned in creation order
    fn position(&self, order_id: u64) -> Option<usize> {
        self.orders
            .binary_search_by_key(&order_id, |order| order.id)
            .ok()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;

    #[test]
    fn test_create_order_scenario() {
        let mut store = OrderStore::new();

        let order = store.create_order("3", "12 Elm St");
        assert_eq!(order.id, 1);
        assert_eq!(order.clothes_count, "3");
        assert_eq!(order.address, "12 Elm St");
        assert_eq!(order.status, OrderStatus::Pending);

        assert_eq!(store.list_orders(), &[order]);
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut store = OrderStore::new();

        let ids: Vec<u64> = (0..5).map(|i| store.create_order(i.to_string(), "addr").id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let listed: Vec<u64> = store.list_orders().iter().map(|o| o.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn test_inputs_are_not_validated() {
        let mut store = OrderStore::new();

        let order = store.create_order("", "");
        assert_eq!(order.clothes_count, "");
        assert_eq!(order.address, "");

        let order = store.create_order("a dozen-ish", "  ");
        assert_eq!(order.clothes_count, "a dozen-ish");
        assert_eq!(order.address, "  ");
    }

    #[test]
    fn test_two_orders_listed_in_creation_order() {
        let mut store = OrderStore::new();
        store.create_order("1", "first");
        store.create_order("2", "second");

        let orders = store.list_orders();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, 1);
        assert_eq!(orders[0].address, "first");
        assert_eq!(orders[1].id, 2);
    }

    #[test]
    fn test_update_status_is_visible_in_listing() {
        let mut store = OrderStore::new();
        store.create_order("3", "12 Elm St");

        let updated = store.update_status(1, "Processing").unwrap();
        assert_eq!(updated.status, OrderStatus::Processing);
        assert_eq!(store.list_orders()[0].status, OrderStatus::Processing);
        assert_eq!(store.list_orders()[0], updated);
    }

    #[test]
    fn test_update_unknown_order_on_empty_store() {
        let mut store = OrderStore::new();

        assert_eq!(store.update_status(99, "Completed"), Err(OrderError::NotFound(99)));
        assert!(store.list_orders().is_empty());
        assert!(store.history(99).is_empty());
    }

    #[test]
    fn test_not_found_takes_precedence_over_invalid_status() {
        let mut store = OrderStore::new();
        store.create_order("1", "x");
        store.update_status(1, "Processing").unwrap();
        let before = store.list_orders().to_vec();
        let events_before = store.event_count();

        assert_eq!(store.update_status(2, "Bogus"), Err(OrderError::NotFound(2)));
        assert_eq!(store.update_status(2, "Completed"), Err(OrderError::NotFound(2)));

        assert_eq!(store.list_orders(), before.as_slice());
        assert_eq!(store.event_count(), events_before);
        assert!(store.history(2).is_empty());
    }

    #[test]
    fn test_invalid_status_leaves_store_unmodified() {
        let mut store = OrderStore::new();
        store.create_order("1", "x");
        let before = store.list_orders().to_vec();

        assert_eq!(
            store.update_status(1, "completed"),
            Err(OrderError::InvalidStatus("completed".into()))
        );
        assert_eq!(store.list_orders(), before.as_slice());
        assert_eq!(store.history(1).len(), 1);
    }

    #[test]
    fn test_completed_can_return_to_pending() {
        let mut store = OrderStore::new();
        store.create_order("5", "Oak Ave");

        store.update_status(1, "Completed").unwrap();
        let order = store.update_status(1, "Pending").unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(store.get_order(1).unwrap().status, OrderStatus::Pending);
    }

    #[test]
    fn test_update_status_is_idempotent() {
        let mut store = OrderStore::new();
        store.create_order("2", "Pine Rd");

        let once = store.update_status(1, "Completed").unwrap();
        let twice = store.update_status(1, "Completed").unwrap();

        assert_eq!(once, twice);
        assert_eq!(store.history(1).len(), 2);
        assert_eq!(store.event_count(), 2);
    }

    #[test]
    fn test_listing_twice_is_stable() {
        let mut store = OrderStore::new();
        store.create_order("1", "a");
        store.create_order("2", "b");
        store.update_status(2, "Processing").unwrap();

        let first = store.list_orders().to_vec();
        let second = store.list_orders().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_history_replays_to_stored_order() {
        let mut store = OrderStore::new();
        store.create_order("7", "Birch Ln");
        store.update_status(1, "Processing").unwrap();
        store.update_status(1, "Completed").unwrap();

        let history = store.history(1);
        let sequence: Vec<i64> = history.iter().map(|e| e.sequence_number).collect();
        assert_eq!(sequence, vec![1, 2, 3]);
        assert_eq!(history[0].event_type, "OrderPlaced");

        let replayed = Order::load_from_events(history).unwrap().unwrap();
        assert_eq!(&replayed, store.get_order(1).unwrap());
        assert_eq!(replayed.version, 3);
    }

    #[test]
    fn test_other_orders_untouched_by_update() {
        let mut store = OrderStore::new();
        store.create_order("1", "a");
        store.create_order("2", "b");

        store.update_status(1, "Completed").unwrap();

        assert_eq!(store.get_order(2).unwrap().status, OrderStatus::Pending);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }
}
