//! View-models behind the admin and delegate screens. Each one fetches into local
//! state on `load`, filters client-side, and reports failures as toasts while staying usable.

mod committees;
mod contacts;
mod delegate;
mod filter;
mod gallery;
mod mailer;
mod overview;
mod popup;
mod portfolios;
mod pricing;
mod registrations;
mod transactions;

pub use committees::*;
pub use contacts::*;
pub use delegate::*;
pub use filter::*;
pub use gallery::*;
pub use mailer::*;
pub use overview::*;
pub use popup::*;
pub use portfolios::*;
pub use pricing::*;
pub use registrations::*;
pub use transactions::*;

pub const REQUIRED_FIELDS: &str = "Please fill in all required fields";
