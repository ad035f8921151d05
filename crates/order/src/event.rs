use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bistro_events::Event;

use crate::order::Order;

/// Event: an order passed validation and entered the lifecycle.
///
/// Events snapshot the aggregate as of event construction; a consumer sees
/// the order exactly as it stood when the operation completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreatedEvent {
    pub order: Order,
    pub created_at: DateTime<Utc>,
}

/// Event: the pay operation completed for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPaidEvent {
    pub order: Order,
    pub created_at: DateTime<Utc>,
}

/// Event: cancellation began for an order's payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCancelledEvent {
    pub order: Order,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    Created(OrderCreatedEvent),
    Paid(OrderPaidEvent),
    Cancelled(OrderCancelledEvent),
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::Created(_) => "order.created",
            OrderEvent::Paid(_) => "order.paid",
            OrderEvent::Cancelled(_) => "order.cancelled",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::Created(e) => e.created_at,
            OrderEvent::Paid(e) => e.created_at,
            OrderEvent::Cancelled(e) => e.created_at,
        }
    }
}
