use serde::{Deserialize, Serialize};

use bistro_core::{
    AggregateRoot, CustomerId, DomainError, DomainResult, Entity, Money, OrderId, RestaurantId,
    TrackingId,
};

use crate::address::StreetAddress;
use crate::order_item::{OrderItem, OrderItemId};

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Approved,
    Cancelling,
    Cancelled,
}

/// Aggregate root: a customer's purchase order against one restaurant.
///
/// Identity, tracking handle and status are assigned by [`Order::initialize`];
/// a freshly built order carries none of them. The declared total price is
/// fixed at construction and never recomputed; [`Order::validate`]
/// cross-checks it against the item subtotals instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: Option<OrderId>,
    customer_id: CustomerId,
    restaurant_id: RestaurantId,
    delivery_address: StreetAddress,
    price: Money,
    items: Vec<OrderItem>,
    tracking_id: Option<TrackingId>,
    status: Option<OrderStatus>,
    failure_messages: Option<Vec<String>>,
}

impl Order {
    pub fn builder() -> OrderBuilder {
        OrderBuilder::default()
    }

    pub fn id_typed(&self) -> Option<OrderId> {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn delivery_address(&self) -> &StreetAddress {
        &self.delivery_address
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut [OrderItem] {
        &mut self.items
    }

    pub fn tracking_id(&self) -> Option<TrackingId> {
        self.tracking_id
    }

    pub fn status(&self) -> Option<OrderStatus> {
        self.status
    }

    pub fn failure_messages(&self) -> Option<&[String]> {
        self.failure_messages.as_deref()
    }

    /// Assign identity and enter the lifecycle at `Pending`.
    ///
    /// Generates a fresh order id and tracking id and numbers the items
    /// sequentially from 1 in list order. Not guarded against re-invocation:
    /// calling again reassigns both ids and renumbers the items.
    pub fn initialize(&mut self) {
        let order_id = OrderId::new();
        self.id = Some(order_id);
        self.tracking_id = Some(TrackingId::new());
        self.status = Some(OrderStatus::Pending);
        self.initialize_items(order_id);
    }

    fn initialize_items(&mut self, order_id: OrderId) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.initialize(order_id, OrderItemId::new(index as u64 + 1));
        }
    }

    /// Run the pre-initialization validations, in order: the order must not
    /// already be initialized, the declared total must be strictly positive,
    /// and every item must be internally consistent and sum to the declared
    /// total. Fails on the first broken invariant.
    pub fn validate(&self) -> DomainResult<()> {
        self.validate_initial_state()?;
        self.validate_total_price()?;
        self.validate_items_price()
    }

    /// Both identity and status assigned.
    fn is_initialized(&self) -> bool {
        self.id.is_some() && self.status.is_some()
    }

    fn validate_initial_state(&self) -> DomainResult<()> {
        if self.is_initialized() {
            return Err(DomainError::invariant(
                "order is not in the correct state for initialization",
            ));
        }
        Ok(())
    }

    fn validate_total_price(&self) -> DomainResult<()> {
        if !self.price.is_greater_than_zero() {
            return Err(DomainError::invariant(
                "total price must be greater than zero",
            ));
        }
        Ok(())
    }

    fn validate_items_price(&self) -> DomainResult<()> {
        let mut items_total = Money::ZERO;
        for item in &self.items {
            Self::validate_item_price(item)?;
            items_total = items_total.add(item.sub_total());
        }

        if self.price != items_total {
            return Err(DomainError::invariant(format!(
                "total price {} is not equal to the order items total {}",
                self.price, items_total
            )));
        }
        Ok(())
    }

    fn validate_item_price(item: &OrderItem) -> DomainResult<()> {
        if !item.is_price_valid() {
            return Err(DomainError::invariant(format!(
                "order item price {} is not valid for product {}",
                item.price(),
                item.product().id_typed()
            )));
        }
        Ok(())
    }

    /// Pending → Paid.
    pub fn approve(&mut self) -> DomainResult<()> {
        if self.status != Some(OrderStatus::Pending) {
            return Err(DomainError::invariant(
                "order is not in the correct state for the pay operation",
            ));
        }
        self.status = Some(OrderStatus::Paid);
        Ok(())
    }

    /// Paid → Approved.
    pub fn paid(&mut self) -> DomainResult<()> {
        if self.status != Some(OrderStatus::Paid) {
            return Err(DomainError::invariant(
                "order is not in the correct state for the approve operation",
            ));
        }
        self.status = Some(OrderStatus::Approved);
        Ok(())
    }

    /// Paid → Cancelling. Failure messages are merged into the order.
    pub fn init_cancel(&mut self, failure_messages: Vec<String>) -> DomainResult<()> {
        if self.status != Some(OrderStatus::Paid) {
            return Err(DomainError::invariant(
                "order is not in the correct state for the init-cancel operation",
            ));
        }
        self.status = Some(OrderStatus::Cancelling);
        self.update_failure_messages(failure_messages);
        Ok(())
    }

    /// Cancelling or Pending → Cancelled. Failure messages are merged.
    pub fn cancel(&mut self, failure_messages: Vec<String>) -> DomainResult<()> {
        if !matches!(
            self.status,
            Some(OrderStatus::Cancelling) | Some(OrderStatus::Pending)
        ) {
            return Err(DomainError::invariant(
                "order is not in the correct state for the cancel operation",
            ));
        }
        self.status = Some(OrderStatus::Cancelled);
        self.update_failure_messages(failure_messages);
        Ok(())
    }

    // An existing non-empty list absorbs incoming messages (empty strings
    // dropped); an absent list is replaced wholesale without filtering. A
    // present-but-empty list swallows incoming messages entirely.
    fn update_failure_messages(&mut self, incoming: Vec<String>) {
        match self.failure_messages.as_mut() {
            Some(existing) => {
                if !existing.is_empty() && !incoming.is_empty() {
                    existing.extend(incoming.into_iter().filter(|message| !message.is_empty()));
                }
            }
            None => self.failure_messages = Some(incoming),
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> Option<&OrderId> {
        self.id.as_ref()
    }
}

impl AggregateRoot for Order {}

/// Builder for [`Order`].
///
/// A new order needs customer, restaurant, delivery address, declared total
/// price and items; identity, tracking handle, status and failure messages
/// are supplied only when rehydrating a persisted order.
#[derive(Debug, Default)]
pub struct OrderBuilder {
    id: Option<OrderId>,
    customer_id: Option<CustomerId>,
    restaurant_id: Option<RestaurantId>,
    delivery_address: Option<StreetAddress>,
    price: Option<Money>,
    items: Option<Vec<OrderItem>>,
    tracking_id: Option<TrackingId>,
    status: Option<OrderStatus>,
    failure_messages: Option<Vec<String>>,
}

impl OrderBuilder {
    pub fn id(mut self, id: OrderId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn customer_id(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn restaurant_id(mut self, restaurant_id: RestaurantId) -> Self {
        self.restaurant_id = Some(restaurant_id);
        self
    }

    pub fn delivery_address(mut self, delivery_address: StreetAddress) -> Self {
        self.delivery_address = Some(delivery_address);
        self
    }

    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn items(mut self, items: Vec<OrderItem>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn tracking_id(mut self, tracking_id: TrackingId) -> Self {
        self.tracking_id = Some(tracking_id);
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn failure_messages(mut self, failure_messages: Vec<String>) -> Self {
        self.failure_messages = Some(failure_messages);
        self
    }

    pub fn build(self) -> DomainResult<Order> {
        let customer_id = self
            .customer_id
            .ok_or_else(|| DomainError::invariant("order requires a customer id"))?;
        let restaurant_id = self
            .restaurant_id
            .ok_or_else(|| DomainError::invariant("order requires a restaurant id"))?;
        let delivery_address = self
            .delivery_address
            .ok_or_else(|| DomainError::invariant("order requires a delivery address"))?;
        let price = self
            .price
            .ok_or_else(|| DomainError::invariant("order requires a total price"))?;
        let items = self
            .items
            .ok_or_else(|| DomainError::invariant("order requires its items"))?;

        Ok(Order {
            id: self.id,
            customer_id,
            restaurant_id,
            delivery_address,
            price,
            items,
            tracking_id: self.tracking_id,
            status: self.status,
            failure_messages: self.failure_messages,
        })
    }
}
