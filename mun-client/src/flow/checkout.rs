use std::collections::BTreeMap;

use kmun_core::{
    messages::{CreateOrderResponse, VerifyPaymentRequest},
    types::DelegateKind,
};

use crate::interfaces::{CheckoutOptions, CheckoutResponse, Prefill, Theme};

use super::{AmountSource, FlowParams};

pub(crate) struct Branding<'a> {
    pub name: &'a str,
    pub theme_color: &'a str,
}

pub(crate) fn description(source: AmountSource) -> String {
    match source {
        AmountSource::Pricing(kind) => format!("Registration Payment - {} Delegate", kind.label()),
        AmountSource::Fixed(_) => "Registration Payment".to_string(),
    }
}

pub(crate) fn checkout_options(
    params: &FlowParams,
    order: &CreateOrderResponse,
    branding: Branding<'_>,
) -> CheckoutOptions {
    let mut notes = BTreeMap::new();
    notes.insert("userId".to_string(), params.user_id.clone());
    notes.insert(
        "registrationId".to_string(),
        params.registration_id.clone().unwrap_or_default(),
    );
    notes.insert("customUserId".to_string(), params.custom_user_id.clone());
    if let AmountSource::Pricing(kind) = params.amount {
        notes.insert("delegateType".to_string(), kind.label().to_string());
    }

    CheckoutOptions {
        key: order.key.clone(),
        amount: order.razorpay_order.amount,
        currency: order.razorpay_order.currency.clone(),
        name: branding.name.to_string(),
        description: description(params.amount),
        order_id: order.razorpay_order.id.clone(),
        prefill: Prefill {
            name: params.custom_user_id.clone(),
            ..Default::default()
        },
        notes,
        theme: Theme {
            color: branding.theme_color.to_string(),
        },
    }
}

/// The backend wants our own payment record id next to the gateway's ids.
pub(crate) fn verify_request(payment_id: &str, response: &CheckoutResponse) -> VerifyPaymentRequest {
    VerifyPaymentRequest {
        payment_id: payment_id.to_string(),
        razorpay_payment_id: response.razorpay_payment_id.clone(),
        razorpay_signature: response.razorpay_signature.clone(),
    }
}

pub fn fee_line(kind: DelegateKind, amount: u64) -> String {
    format!("{} Delegate Fee: ₹{}", kind.label(), amount)
}
