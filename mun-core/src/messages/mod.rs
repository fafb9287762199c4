mod auth;
mod committees;
mod contact;
mod gallery;
mod mailer;
mod payments;
mod popups;
mod pricing;
mod registrations;
mod users;

pub use auth::*;
pub use committees::*;
pub use contact::*;
pub use gallery::*;
pub use mailer::*;
pub use payments::*;
pub use popups::*;
pub use pricing::*;
pub use registrations::*;
pub use users::*;
