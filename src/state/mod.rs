pub mod field;
pub mod listeners;

pub use field::FieldLayout;
pub use listeners::{IntervalGuard, ListenerGuard};
