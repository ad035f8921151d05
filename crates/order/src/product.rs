use serde::{Deserialize, Serialize};

use bistro_core::{Entity, Money, ProductId};

/// A restaurant catalog line referenced by an order item.
///
/// Products compare by identity only: name and price may drift between the
/// customer's submission and catalog confirmation, and the same id must
/// still match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    /// This product with the catalog's authoritative name and price.
    ///
    /// Confirmation produces a new value rather than mutating in place, so a
    /// catalog entry reused across orders can never be aliased.
    pub fn with_confirmed_name_and_price(&self, name: impl Into<String>, price: Money) -> Product {
        Product {
            id: self.id,
            name: name.into(),
            price,
        }
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl core::hash::Hash for Product {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<&ProductId> {
        Some(&self.id)
    }
}
