use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bistro_core::ValueObject;

/// Delivery street address attached to an order.
///
/// The `id` is a persistence handle only: equality and hashing consider
/// street, post code and city, so two addresses with different ids but the
/// same location compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreetAddress {
    id: Uuid,
    street: String,
    post_code: String,
    city: String,
}

impl StreetAddress {
    pub fn new(
        id: Uuid,
        street: impl Into<String>,
        post_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id,
            street: street.into(),
            post_code: post_code.into(),
            city: city.into(),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn post_code(&self) -> &str {
        &self.post_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl PartialEq for StreetAddress {
    fn eq(&self, other: &Self) -> bool {
        self.street == other.street
            && self.post_code == other.post_code
            && self.city == other.city
    }
}

impl Eq for StreetAddress {}

impl core::hash::Hash for StreetAddress {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.street.hash(state);
        self.post_code.hash(state);
        self.city.hash(state);
    }
}

impl ValueObject for StreetAddress {}
