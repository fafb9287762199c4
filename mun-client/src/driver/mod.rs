mod runner;
mod script;
mod timers;

pub use runner::*;
pub use script::*;
pub use timers::*;
