use super::PaymentState;

/// Everything a renderer needs to draw the pay button and the lines around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub state: PaymentState,
    pub label: String,
    pub disabled: bool,
    /// "Loading payment gateway..." while the script is not in.
    pub gateway_hint: Option<String>,
    pub fee_line: Option<String>,
    pub show_try_again: bool,
}

pub const GATEWAY_LOADING_HINT: &str = "Loading payment gateway...";
