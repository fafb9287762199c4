use kmun_core::{
    messages::{CreateOrderRequest, VerifyPaymentRequest},
    types::UserProfile,
};
use serde_json::Value;

use crate::{driver::TimerId, interfaces::CheckoutOptions, notify::Toast};

use super::{ButtonView, PaymentFlowCore};

#[derive(Debug)]
pub enum FlowAction {
    LoadCheckoutScript(String),
    FetchPricing,
    CreateOrder(CreateOrderRequest),
    OpenCheckout(CheckoutOptions),
    VerifyPayment(VerifyPaymentRequest),
    FetchProfile,
    Toast(Toast),
    Render(ButtonView),
    NotifySuccess(Value),
    NotifyFailure(String),
    NotifyResynced(UserProfile),
    NotifyClosed,
    AddTimeout(TimerId, u64),
    RemoveTimeout(TimerId),
}

impl PaymentFlowCore {
    pub(crate) fn load_checkout_script(&mut self) {
        let src = self.checkout_script_url.clone();
        self.queued_actions
            .push_back(FlowAction::LoadCheckoutScript(src));
    }

    pub(crate) fn fetch_pricing(&mut self) {
        self.queued_actions.push_back(FlowAction::FetchPricing);
    }

    pub(crate) fn create_order(&mut self, req: CreateOrderRequest) {
        self.queued_actions.push_back(FlowAction::CreateOrder(req));
    }

    pub(crate) fn open_checkout(&mut self, options: CheckoutOptions) {
        self.queued_actions
            .push_back(FlowAction::OpenCheckout(options));
    }

    pub(crate) fn verify_payment(&mut self, req: VerifyPaymentRequest) {
        self.queued_actions
            .push_back(FlowAction::VerifyPayment(req));
    }

    pub(crate) fn fetch_profile(&mut self) {
        self.queued_actions.push_back(FlowAction::FetchProfile);
    }

    pub(crate) fn toast(&mut self, toast: Toast) {
        self.queued_actions.push_back(FlowAction::Toast(toast));
    }

    pub(crate) fn render(&mut self) {
        let view = self.view();
        self.queued_actions.push_back(FlowAction::Render(view));
    }

    pub(crate) fn notify_success(&mut self, payload: Value) {
        self.queued_actions
            .push_back(FlowAction::NotifySuccess(payload));
    }

    pub(crate) fn notify_failure(&mut self, reason: String) {
        self.queued_actions
            .push_back(FlowAction::NotifyFailure(reason));
    }

    pub(crate) fn notify_resynced(&mut self, profile: UserProfile) {
        self.queued_actions
            .push_back(FlowAction::NotifyResynced(profile));
    }

    pub(crate) fn notify_closed(&mut self) {
        self.queued_actions.push_back(FlowAction::NotifyClosed);
    }

    pub(crate) fn add_timeout(&mut self, timer_id: TimerId, timeout_ms: u64) {
        self.queued_actions
            .push_back(FlowAction::AddTimeout(timer_id, timeout_ms));
    }

    pub(crate) fn remove_timeout(&mut self, timer_id: TimerId) {
        self.queued_actions
            .push_back(FlowAction::RemoveTimeout(timer_id));
    }
}
