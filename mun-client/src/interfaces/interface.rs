use std::collections::BTreeMap;

use kmun_core::{
    format::error::ApiError,
    messages::{CreateOrderRequest, CreateOrderResponse, VerifyPaymentRequest},
    types::{Pricing, UserProfile},
};
use serde_json::Value;

use crate::{flow::ButtonView, notify::Toaster};

// backend

#[async_trait::async_trait]
pub trait PaymentsBackend: Send + Sync + 'static {
    async fn fetch_pricing(&self) -> Result<Pricing, ApiError>;
    async fn create_order(&self, req: CreateOrderRequest) -> Result<CreateOrderResponse, ApiError>;
    async fn verify_payment(&self, req: VerifyPaymentRequest) -> Result<Value, ApiError>;
    async fn fetch_profile(&self) -> Result<UserProfile, ApiError>;
}

// checkout widget

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct Theme {
    pub color: String,
}

/// Options handed to the hosted checkout. Field names are the widget's own.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct CheckoutOptions {
    pub key: String,
    pub amount: u64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: Prefill,
    pub notes: BTreeMap<String, String>,
    pub theme: Theme,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct CheckoutResponse {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CheckoutOutcome {
    Completed(CheckoutResponse),
    Dismissed,
}

#[async_trait::async_trait]
pub trait CheckoutWidget: Send + Sync + 'static {
    /// Injects the checkout script. Never fails loudly: `false` means not loaded.
    async fn load_script(&self, src: &str) -> bool;
    async fn open(&self, options: CheckoutOptions) -> CheckoutOutcome;
}

// ui

pub trait PaymentUi: Toaster + 'static {
    fn render(&self, view: ButtonView);
    fn payment_succeeded(&self, payload: Value);
    fn payment_failed(&self, reason: String);
    fn resynced(&self, profile: UserProfile);
    /// The user closed the checkout of a fixed-amount payment.
    fn checkout_closed(&self);
}

pub trait PaymentInterface: PaymentsBackend + CheckoutWidget + PaymentUi {}

impl<T> PaymentInterface for T where T: PaymentsBackend + CheckoutWidget + PaymentUi {}
