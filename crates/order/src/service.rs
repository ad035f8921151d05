use chrono::Utc;

use bistro_core::{DomainError, DomainResult};

use crate::event::{OrderCancelledEvent, OrderCreatedEvent, OrderPaidEvent};
use crate::order::Order;
use crate::restaurant::Restaurant;

/// Stateless orchestration facade for cross-aggregate order workflows.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderDomainService;

impl OrderDomainService {
    pub fn new() -> Self {
        Self
    }

    /// Confirm item prices against the restaurant catalog, validate the
    /// order and assign its identity.
    ///
    /// The restaurant must be active. An item whose product is absent from
    /// the catalog keeps its submitted name and price.
    pub fn validate_and_initiate_order(
        &self,
        order: &mut Order,
        restaurant: &Restaurant,
    ) -> DomainResult<OrderCreatedEvent> {
        Self::validate_restaurant(restaurant)?;
        Self::confirm_order_products(order, restaurant);
        order.validate()?;
        order.initialize();
        if let Some(id) = order.id_typed() {
            tracing::info!("order {} has been initiated", id);
        }
        Ok(OrderCreatedEvent {
            order: order.clone(),
            created_at: Utc::now(),
        })
    }

    /// Complete the pay step for an order.
    pub fn pay_order(&self, order: &mut Order) -> DomainResult<OrderPaidEvent> {
        order.paid()?;
        if let Some(id) = order.id_typed() {
            tracing::info!("order {} has been paid", id);
        }
        Ok(OrderPaidEvent {
            order: order.clone(),
            created_at: Utc::now(),
        })
    }

    /// Approve a pending order. Produces no event; callers synthesize any
    /// approval notification themselves.
    pub fn approve_order(&self, order: &mut Order) -> DomainResult<()> {
        order.approve()?;
        if let Some(id) = order.id_typed() {
            tracing::info!("order {} has been approved", id);
        }
        Ok(())
    }

    /// Begin cancelling a paid order, recording why.
    pub fn cancel_order_payment(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
    ) -> DomainResult<OrderCancelledEvent> {
        order.init_cancel(failure_messages)?;
        if let Some(id) = order.id_typed() {
            tracing::info!("order payment is cancelling for order {}", id);
        }
        Ok(OrderCancelledEvent {
            order: order.clone(),
            created_at: Utc::now(),
        })
    }

    /// Cancel an order outright. Produces no event.
    pub fn cancel_order(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
    ) -> DomainResult<()> {
        order.cancel(failure_messages)?;
        if let Some(id) = order.id_typed() {
            tracing::info!("order {} has been cancelled", id);
        }
        Ok(())
    }

    fn validate_restaurant(restaurant: &Restaurant) -> DomainResult<()> {
        if !restaurant.is_active() {
            return Err(DomainError::invariant(format!(
                "restaurant {} is currently not active",
                restaurant.id_typed()
            )));
        }
        Ok(())
    }

    fn confirm_order_products(order: &mut Order, restaurant: &Restaurant) {
        for item in order.items_mut() {
            if let Some(catalog_product) = restaurant.find_product(item.product()) {
                let confirmed_name = catalog_product.name().to_owned();
                let confirmed_price = *catalog_product.price();
                item.confirm_product(&confirmed_name, confirmed_price);
            }
        }
    }
}
