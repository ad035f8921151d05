//! Order domain module for the food-ordering platform.
//!
//! This crate contains the purchase-order aggregate, the restaurant catalog
//! snapshot it is validated against, and the domain service orchestrating
//! the order lifecycle, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod address;
pub mod event;
pub mod order;
pub mod order_item;
pub mod product;
pub mod restaurant;
pub mod service;

pub use address::StreetAddress;
pub use event::{OrderCancelledEvent, OrderCreatedEvent, OrderEvent, OrderPaidEvent};
pub use order::{Order, OrderBuilder, OrderStatus};
pub use order_item::{OrderItem, OrderItemId};
pub use product::Product;
pub use restaurant::Restaurant;
pub use service::OrderDomainService;
