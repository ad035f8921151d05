//! Aggregate root trait for in-place mutated domain models.

use crate::entity::Entity;

/// Aggregate root marker.
///
/// The aggregate root is the single entry point for invariant-enforcing
/// mutations to the entities it owns. This is intentionally small so domain
/// modules can decide how they model state transitions without bringing in
/// any infrastructure concerns.
pub trait AggregateRoot: Entity {}
