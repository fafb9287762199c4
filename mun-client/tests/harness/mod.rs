pub mod checkout;
pub mod event;
pub mod harness;
pub mod ui;
