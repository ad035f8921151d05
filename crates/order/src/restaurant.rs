use serde::{Deserialize, Serialize};

use bistro_core::{AggregateRoot, Entity, RestaurantId};

use crate::product::Product;

/// Snapshot of a restaurant's catalog as supplied by the catalog service.
///
/// Read-only input to order validation; the order aggregate does not own it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    id: RestaurantId,
    active: bool,
    products: Vec<Product>,
}

impl Restaurant {
    pub fn new(id: RestaurantId, active: bool, products: Vec<Product>) -> Self {
        Self {
            id,
            active,
            products,
        }
    }

    pub fn id_typed(&self) -> RestaurantId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up the catalog entry matching `product` (identity equality).
    pub fn find_product(&self, product: &Product) -> Option<&Product> {
        self.products.iter().find(|candidate| *candidate == product)
    }
}

impl Entity for Restaurant {
    type Id = RestaurantId;

    fn id(&self) -> Option<&RestaurantId> {
        Some(&self.id)
    }
}

impl AggregateRoot for Restaurant {}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::{Money, ProductId};
    use core::str::FromStr;
    use rust_decimal::Decimal;

    fn money(raw: &str) -> Money {
        Money::new(Decimal::from_str(raw).unwrap())
    }

    #[test]
    fn find_product_matches_by_id_regardless_of_name_and_price() {
        let id = ProductId::new();
        let catalog_entry = Product::new(id, "Pizza Margherita", money("10.00"));
        let restaurant = Restaurant::new(RestaurantId::new(), true, vec![catalog_entry]);

        let submitted = Product::new(id, "margherita", money("9.50"));
        let found = restaurant.find_product(&submitted).unwrap();
        assert_eq!(found.name(), "Pizza Margherita");
    }

    #[test]
    fn find_product_misses_unknown_ids() {
        let restaurant = Restaurant::new(
            RestaurantId::new(),
            true,
            vec![Product::new(ProductId::new(), "Pizza Margherita", money("10.00"))],
        );
        let unknown = Product::new(ProductId::new(), "Calzone", money("12.00"));
        assert!(restaurant.find_product(&unknown).is_none());
    }
}
