//! Entity types of the point-of-sale dashboard.
//!
//! The store treats these as opaque payload; field validation belongs to
//! whoever builds them. All serialize camelCase with timestamps flattened in.

mod category;
mod payment;
mod product;
mod settings;
mod user;

pub use category::Category;
pub use payment::{Payment, PaymentItem, PaymentMethod, PaymentStatus};
pub use product::Product;
pub use settings::{Settings, Theme};
pub use user::{User, UserRole};
