use kmun_core::{
    format::error::ApiError,
    messages::{CreateOrderRequest, CreateOrderResponse, VerifyPaymentRequest},
    types::{Pricing, UserProfile},
};
use serde_json::Value;

use crate::{
    flow::ButtonView,
    notify::{Toast, Toaster},
};

use super::{CheckoutOptions, CheckoutOutcome, CheckoutWidget, PaymentUi, PaymentsBackend};

/// Glues three independent implementations into one [`super::PaymentInterface`].
pub struct PaymentInterfaceFacade<B, C, U> {
    backend: B,
    checkout: C,
    ui: U,
}

impl<B, C, U> PaymentInterfaceFacade<B, C, U> {
    pub fn new(backend: B, checkout: C, ui: U) -> Self {
        Self {
            backend,
            checkout,
            ui,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[async_trait::async_trait]
impl<B, C, U> PaymentsBackend for PaymentInterfaceFacade<B, C, U>
where
    B: PaymentsBackend,
    C: Send + Sync + 'static,
    U: Send + Sync + 'static,
{
    async fn fetch_pricing(&self) -> Result<Pricing, ApiError> {
        self.backend.fetch_pricing().await
    }
    async fn create_order(&self, req: CreateOrderRequest) -> Result<CreateOrderResponse, ApiError> {
        self.backend.create_order(req).await
    }
    async fn verify_payment(&self, req: VerifyPaymentRequest) -> Result<Value, ApiError> {
        self.backend.verify_payment(req).await
    }
    async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        self.backend.fetch_profile().await
    }
}

#[async_trait::async_trait]
impl<B, C, U> CheckoutWidget for PaymentInterfaceFacade<B, C, U>
where
    B: Send + Sync + 'static,
    C: CheckoutWidget,
    U: Send + Sync + 'static,
{
    async fn load_script(&self, src: &str) -> bool {
        self.checkout.load_script(src).await
    }
    async fn open(&self, options: CheckoutOptions) -> CheckoutOutcome {
        self.checkout.open(options).await
    }
}

impl<B, C, U> Toaster for PaymentInterfaceFacade<B, C, U>
where
    B: Send + Sync,
    C: Send + Sync,
    U: Toaster,
{
    fn toast(&self, toast: Toast) {
        self.ui.toast(toast)
    }
}

impl<B, C, U> PaymentUi for PaymentInterfaceFacade<B, C, U>
where
    B: Send + Sync + 'static,
    C: Send + Sync + 'static,
    U: PaymentUi,
{
    fn render(&self, view: ButtonView) {
        self.ui.render(view)
    }
    fn payment_succeeded(&self, payload: Value) {
        self.ui.payment_succeeded(payload)
    }
    fn payment_failed(&self, reason: String) {
        self.ui.payment_failed(reason)
    }
    fn resynced(&self, profile: UserProfile) {
        self.ui.resynced(profile)
    }
    fn checkout_closed(&self) {
        self.ui.checkout_closed()
    }
}
