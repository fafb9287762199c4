#[cfg(feature = "http")]
mod backend;
mod facade;
mod interface;

pub use facade::*;
pub use interface::*;
