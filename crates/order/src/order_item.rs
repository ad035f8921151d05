use serde::{Deserialize, Serialize};

use bistro_core::{Entity, Money, OrderId};

use crate::product::Product;

/// Identifier of an order line.
///
/// Assigned sequentially (starting at 1) when the owning order is
/// initialized; unique within that order only, not globally.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(u64);

impl OrderItemId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for OrderItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A line item tying a product, a quantity, the declared unit price and the
/// declared subtotal.
///
/// Identity and the back-reference to the owning order are assigned when the
/// order is initialized; a freshly submitted line carries neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    id: Option<OrderItemId>,
    order_id: Option<OrderId>,
    product: Product,
    quantity: u32,
    price: Money,
    sub_total: Money,
}

impl OrderItem {
    /// Build a not-yet-numbered line item from a customer submission.
    pub fn new(product: Product, quantity: u32, price: Money, sub_total: Money) -> Self {
        Self {
            id: None,
            order_id: None,
            product,
            quantity,
            price,
            sub_total,
        }
    }

    pub fn order_id(&self) -> Option<&OrderId> {
        self.order_id.as_ref()
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn sub_total(&self) -> &Money {
        &self.sub_total
    }

    /// The declared unit price must be strictly positive, match the
    /// product's current price, and multiply out to the declared subtotal.
    pub fn is_price_valid(&self) -> bool {
        self.price.is_greater_than_zero()
            && self.price == *self.product.price()
            && self.price.multiply(self.quantity) == self.sub_total
    }

    /// One-time identity assignment by the owning order.
    ///
    /// Not guarded: a second call silently overwrites the previous identity.
    pub(crate) fn initialize(&mut self, order_id: OrderId, item_id: OrderItemId) {
        self.order_id = Some(order_id);
        self.id = Some(item_id);
    }

    /// Replace the product with the catalog's confirmed name and price.
    pub(crate) fn confirm_product(&mut self, name: &str, price: Money) {
        self.product = self.product.with_confirmed_name_and_price(name, price);
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    fn id(&self) -> Option<&OrderItemId> {
        self.id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::ProductId;
    use core::str::FromStr;
    use rust_decimal::Decimal;

    fn money(raw: &str) -> Money {
        Money::new(Decimal::from_str(raw).unwrap())
    }

    fn item(unit_price: &str, product_price: &str, quantity: u32, sub_total: &str) -> OrderItem {
        let product = Product::new(ProductId::new(), "Pizza Margherita", money(product_price));
        OrderItem::new(product, quantity, money(unit_price), money(sub_total))
    }

    #[test]
    fn price_is_valid_when_all_three_conditions_hold() {
        assert!(item("10.00", "10.00", 2, "20.00").is_price_valid());
    }

    #[test]
    fn price_is_invalid_when_not_positive() {
        assert!(!item("0.00", "0.00", 2, "0.00").is_price_valid());
        assert!(!item("-1.00", "-1.00", 2, "-2.00").is_price_valid());
    }

    #[test]
    fn price_is_invalid_when_it_differs_from_the_product() {
        assert!(!item("9.50", "10.00", 2, "19.00").is_price_valid());
    }

    #[test]
    fn price_is_invalid_when_subtotal_does_not_multiply_out() {
        assert!(!item("10.00", "10.00", 2, "19.99").is_price_valid());
    }

    #[test]
    fn initialize_assigns_identity_and_back_reference() {
        let mut line = item("10.00", "10.00", 1, "10.00");
        assert!(Entity::id(&line).is_none());
        assert!(line.order_id().is_none());

        let order_id = OrderId::new();
        line.initialize(order_id, OrderItemId::new(1));
        assert_eq!(Entity::id(&line), Some(&OrderItemId::new(1)));
        assert_eq!(line.order_id(), Some(&order_id));
    }

    #[test]
    fn initialize_is_not_guarded_and_overwrites() {
        let mut line = item("10.00", "10.00", 1, "10.00");
        let first_order = OrderId::new();
        let second_order = OrderId::new();

        line.initialize(first_order, OrderItemId::new(1));
        line.initialize(second_order, OrderItemId::new(7));

        assert_eq!(Entity::id(&line), Some(&OrderItemId::new(7)));
        assert_eq!(line.order_id(), Some(&second_order));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a line whose declared data is internally consistent
            /// and positive is always valid.
            #[test]
            fn consistent_positive_lines_are_valid(
                cents in 1i64..100_000,
                quantity in 1u32..50
            ) {
                let unit = Money::new(Decimal::new(cents, 2));
                let product = Product::new(ProductId::new(), "Pizza Margherita", unit);
                let line = OrderItem::new(product, quantity, unit, unit.multiply(quantity));
                prop_assert!(line.is_price_valid());
            }

            /// Property: a declared subtotal that deviates by any non-zero
            /// amount invalidates the line.
            #[test]
            fn skewed_subtotals_are_invalid(
                cents in 1i64..100_000,
                quantity in 1u32..50,
                skew in prop_oneof![(-10_000i64..0), (1i64..10_000)]
            ) {
                let unit = Money::new(Decimal::new(cents, 2));
                let product = Product::new(ProductId::new(), "Pizza Margherita", unit);
                let declared = unit.multiply(quantity).add(&Money::new(Decimal::new(skew, 2)));
                let line = OrderItem::new(product, quantity, unit, declared);
                prop_assert!(!line.is_price_valid());
            }
        }
    }
}
