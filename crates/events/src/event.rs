use chrono::{DateTime, Utc};

/// A domain-agnostic event describing one state change.
///
/// Events are immutable facts; the store emits them after the mutation has
/// already been applied.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "products.product.added").
    fn event_type(&self) -> &'static str;

    /// When the mutation was applied.
    fn occurred_at(&self) -> DateTime<Utc>;
}
