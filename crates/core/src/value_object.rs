//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity: two prices of 1299 cents are the same
/// price, two `Food` categories are the same category. "Modifying" one means
/// building a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price(u64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(500), Price(500));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
