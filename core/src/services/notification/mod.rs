//! Notification format selection and delivery-agnostic payloads
//!
//! A format pairs a code generation strategy with a notification payload
//! factory, so hosts can swap how codes are presented without touching the
//! lifecycle logic. Delivery itself is the host's responsibility.

mod format;
mod payload;

pub use format::{Format, FormatRegistry};
pub use payload::NotificationPayload;
