mod actions;
mod checkout;
mod machine;
mod state;
mod view;

pub use actions::*;
pub use checkout::*;
pub use machine::*;
pub use state::*;
pub use view::*;
