//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. Two value objects with the same values are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (an order line for 2 × `SMALL-TABLE` on
///   order `order-001` is the same line wherever it appears)
/// - **Entity**: has identity (a batch stays the same batch while its
///   allocations change)
///
/// ## Design Constraints
///
/// - **Clone**: values are copied freely
/// - **Eq + Hash**: values live in sets, where inserting an equal value twice
///   is a no-op
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Quantity(u32);
///
/// impl ValueObject for Quantity {}
///
/// let mut set = std::collections::HashSet::new();
/// set.insert(Quantity(2));
/// set.insert(Quantity(2));
/// assert_eq!(set.len(), 1);
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
