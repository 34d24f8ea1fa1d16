use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event_sourcing::DomainEvent;
use super::value_objects::OrderStatus;

// ============================================================================
// Order Events - Domain Events for the Order aggregate
// ============================================================================

/// Order Event - Union type for all order events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    Placed(OrderPlaced),
    StatusChanged(StatusChanged),
}

impl DomainEvent for OrderEvent {
    fn event_name(&self) -> &'static str {
        match self {
            OrderEvent::Placed(_) => "OrderPlaced",
            OrderEvent::StatusChanged(_) => "StatusChanged",
        }
    }
}

// ============================================================================
// Individual Event Types
// ============================================================================

/// Order Placed - Initial event in the order lifecycle, status is Pending
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OrderPlaced {
    pub order_id: u64,
    pub clothes_count: String,
    pub address: String,
    pub placed_at: DateTime<Utc>,
}

/// Status Changed - only emitted when `from != to`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StatusChanged {
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub changed_at: DateTime<Utc>,
}
