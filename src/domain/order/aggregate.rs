use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event_sourcing::{Aggregate, AggregateId};
use super::commands::OrderCommand;
use super::errors::OrderError;
use super::events::{OrderEvent, OrderPlaced, StatusChanged};
use super::value_objects::OrderStatus;

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================

/// One laundry pickup request.
///
/// Only `status` changes after creation (`version` and `updated_at` follow
/// the applied events).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    // Identity
    pub id: u64,
    pub version: i64,

    // Current State (derived from events)
    pub clothes_count: String,
    pub address: String,
    pub status: OrderStatus,

    // Audit Trail
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Aggregate Trait Implementation
// ============================================================================

impl Aggregate for Order {
    type Event = OrderEvent;
    type Command = OrderCommand;
    type Error = OrderError;

    fn apply_first_event(event: &Self::Event) -> Result<Self, Self::Error> {
        match event {
            OrderEvent::Placed(e) => Ok(Self::from_placed(e)),
            _ => Err(OrderError::NotInitialized),
        }
    }

    fn apply_event(&mut self, event: &Self::Event) -> Result<(), Self::Error> {
        match event {
            OrderEvent::Placed(_) => Err(OrderError::AlreadyPlaced),
            OrderEvent::StatusChanged(e) => {
                self.status = e.to;
                self.updated_at = e.changed_at;
                Ok(())
            }
        }
    }

    fn handle_command(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::UpdateStatus { status } => {
                let to: OrderStatus = status.parse()?;

                // Re-applying the current status records nothing
                if to == self.status {
                    return Ok(vec![]);
                }

                Ok(vec![OrderEvent::StatusChanged(StatusChanged {
                    from: self.status,
                    to,
                    changed_at: Utc::now(),
                })])
            }
        }
    }

    fn aggregate_id(&self) -> AggregateId {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn set_version(&mut self, version: i64) {
        self.version = version;
    }
}

impl Order {
    /// First event of a new order. The aggregate does not exist yet, so there
    /// is no command to validate against.
    pub fn place(order_id: u64, clothes_count: String, address: String) -> OrderPlaced {
        OrderPlaced {
            order_id,
            clothes_count,
            address,
            placed_at: Utc::now(),
        }
    }

    pub fn from_placed(e: &OrderPlaced) -> Self {
        Self {
            id: e.order_id,
            version: 0,
            clothes_count: e.clothes_count.clone(),
            address: e.address.clone(),
            status: OrderStatus::Pending,
            created_at: e.placed_at,
            updated_at: e.placed_at,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn placed_order() -> Order {
        let placed = Order::place(1, "3".to_string(), "12 Elm St".to_string());
        Order::apply_first_event(&OrderEvent::Placed(placed)).unwrap()
    }

    #[test]
    fn test_place_order_starts_pending() {
        let order = placed_order();
        assert_eq!(order.id, 1);
        assert_eq!(order.clothes_count, "3");
        assert_eq!(order.address, "12 Elm St");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn test_first_event_must_be_placed() {
        let event = OrderEvent::StatusChanged(StatusChanged {
            from: OrderStatus::Pending,
            to: OrderStatus::Processing,
            changed_at: Utc::now(),
        });
        assert_eq!(Order::apply_first_event(&event), Err(OrderError::NotInitialized));
    }

    #[test]
    fn test_update_status_emits_change() {
        let order = placed_order();
        let events = order
            .handle_command(&OrderCommand::UpdateStatus { status: "Processing".into() })
            .unwrap();

        assert_eq!(events.len(), 1);
        match &events[0] {
            OrderEvent::StatusChanged(e) => {
                assert_eq!(e.from, OrderStatus::Pending);
                assert_eq!(e.to, OrderStatus::Processing);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_same_status_emits_nothing() {
        let order = placed_order();
        let events = order
            .handle_command(&OrderCommand::UpdateStatus { status: "Pending".into() })
            .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_invalid_status_is_rejected() {
        let order = placed_order();
        let result = order.handle_command(&OrderCommand::UpdateStatus { status: "Lost".into() });
        assert_eq!(result, Err(OrderError::InvalidStatus("Lost".into())));
    }

    #[test]
    fn test_completed_is_not_terminal() {
        let mut order = placed_order();

        for target in ["Completed", "Pending", "Processing", "Completed"] {
            let events = order
                .handle_command(&OrderCommand::UpdateStatus { status: target.into() })
                .unwrap();
            for event in &events {
                order.apply_event(event).unwrap();
            }
            assert_eq!(order.status.as_str(), target);
        }
    }

    #[test]
    fn test_placing_twice_is_rejected() {
        let mut order = placed_order();
        let replay = OrderEvent::Placed(Order::place(1, String::new(), String::new()));

        assert_eq!(order.apply_event(&replay), Err(OrderError::AlreadyPlaced));
        assert_eq!(order.address, "12 Elm St");
    }
}
