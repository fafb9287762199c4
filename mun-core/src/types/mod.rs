mod committee;
mod contact_form;
mod dashboard;
mod gallery_item;
mod pagination;
mod payment;
mod payment_stats;
mod popup;
mod portfolio;
mod pricing;
mod registration;
mod role;
mod transaction_log;
mod user;

pub use committee::*;
pub use contact_form::*;
pub use dashboard::*;
pub use gallery_item::*;
pub use pagination::*;
pub use payment::*;
pub use payment_stats::*;
pub use popup::*;
pub use portfolio::*;
pub use pricing::*;
pub use registration::*;
pub use role::*;
pub use transaction_log::*;
pub use user::*;
