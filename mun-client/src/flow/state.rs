use kmun_core::types::DelegateKind;

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentState {
    Idle,
    Processing,
    Success,
    Failed,
}

/// Where the amount to charge comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmountSource {
    /// Looked up from the pricing singleton by delegate kind.
    Pricing(DelegateKind),
    /// Known up front; pricing is never fetched.
    Fixed(u64),
}

/// Who is paying for what.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowParams {
    pub user_id: String,
    pub registration_id: Option<String>,
    pub custom_user_id: String,
    pub amount: AmountSource,
}

impl FlowParams {
    pub fn registration_fee(
        user_id: impl Into<String>,
        registration_id: impl Into<String>,
        custom_user_id: impl Into<String>,
        internal: bool,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            registration_id: Some(registration_id.into()),
            custom_user_id: custom_user_id.into(),
            amount: AmountSource::Pricing(internal.into()),
        }
    }

    pub fn fixed(user_id: impl Into<String>, amount: u64) -> Self {
        Self {
            user_id: user_id.into(),
            registration_id: None,
            custom_user_id: String::new(),
            amount: AmountSource::Fixed(amount),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PendingOrder {
    pub payment_id: String,
    pub order_id: String,
}
