use std::collections::VecDeque;

use kmun_core::{
    format::error::ApiError,
    messages::{CreateOrderRequest, CreateOrderResponse},
    types::{Pricing, UserProfile},
};
use serde_json::Value;

use crate::{
    config::PortalConfig,
    driver::TimerId,
    interfaces::CheckoutOutcome,
    notify::Toast,
};

use super::{
    checkout::{checkout_options, fee_line, verify_request, Branding},
    AmountSource, ButtonView, FlowAction, FlowParams, PaymentState, PendingOrder,
    GATEWAY_LOADING_HINT,
};

pub const GATEWAY_LOADING_TOAST: &str = "Payment gateway is still loading. Please try again.";
pub const PRICING_MISSING_TOAST: &str = "Pricing information not available. Please try again.";
pub const PAYMENT_SUCCESS_TOAST: &str = "Payment successful! Your registration is now confirmed.";
pub const VERIFICATION_FAILED_TOAST: &str = "Payment verification failed. Please contact support.";
pub const ORDER_FAILED_FALLBACK: &str = "Failed to create payment order";

// the generic "Pay Now" gateway words things more tersely
pub const FIXED_SUCCESS_TOAST: &str = "Payment successful!";
pub const FIXED_VERIFICATION_FAILED_TOAST: &str = "Payment verification failed";
pub const FIXED_ORDER_FAILED_TOAST: &str = "Failed to initiate payment";

/// Sans-IO payment completion machine. Every event method returns the actions the
/// driver has to perform; nothing here awaits.
pub struct PaymentFlowCore {
    pub(crate) params: FlowParams,
    pub(crate) currency: String,
    pub(crate) brand_name: String,
    pub(crate) theme_color: String,
    pub(crate) checkout_script_url: String,
    pub(crate) resync_delay_ms: u64,
    pub(crate) state: PaymentState,
    pub(crate) loading: bool,
    pub(crate) script_loaded: bool,
    pub(crate) pricing: Option<Pricing>,
    pub(crate) pending_order: Option<PendingOrder>,
    pub(crate) unmounted: bool,
    pub(crate) queued_actions: VecDeque<FlowAction>,
}

impl PaymentFlowCore {
    pub fn new(params: FlowParams, config: &PortalConfig) -> Self {
        Self {
            params,
            currency: config.currency.clone(),
            brand_name: config.brand_name.clone(),
            theme_color: config.theme_color.clone(),
            checkout_script_url: config.checkout_script_url.clone(),
            resync_delay_ms: config.resync_delay_ms,
            state: PaymentState::Idle,
            loading: false,
            script_loaded: false,
            pricing: None,
            pending_order: None,
            unmounted: false,
            queued_actions: VecDeque::new(),
        }
    }

    pub fn state(&self) -> PaymentState {
        self.state
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    /// Amount to charge, once it is known.
    pub fn amount(&self) -> Option<u64> {
        match self.params.amount {
            AmountSource::Fixed(amount) => Some(amount),
            AmountSource::Pricing(kind) => self.pricing.as_ref().map(|p| p.amount_for(kind)),
        }
    }

    fn is_fixed(&self) -> bool {
        matches!(self.params.amount, AmountSource::Fixed(_))
    }

    fn pricing_ready(&self) -> bool {
        self.amount().is_some()
    }

    fn busy(&self) -> bool {
        self.loading || matches!(self.state, PaymentState::Processing | PaymentState::Success)
    }

    pub fn view(&self) -> ButtonView {
        let amount = self.amount();
        let label = match self.state {
            PaymentState::Idle => match self.params.amount {
                AmountSource::Fixed(_) => "Pay Now".to_string(),
                AmountSource::Pricing(_) => {
                    format!("Complete Payment - ₹{}", amount.unwrap_or(0))
                }
            },
            PaymentState::Processing => "Processing Payment...".to_string(),
            PaymentState::Success => "Payment Successful!".to_string(),
            PaymentState::Failed => "Payment Failed".to_string(),
        };
        let fee_line = match (self.params.amount, amount) {
            (AmountSource::Pricing(kind), Some(amount)) => Some(fee_line(kind, amount)),
            _ => None,
        };
        ButtonView {
            state: self.state,
            label,
            disabled: self.busy() || !self.script_loaded || !self.pricing_ready(),
            gateway_hint: (!self.script_loaded).then(|| GATEWAY_LOADING_HINT.to_string()),
            fee_line,
            show_try_again: self.state == PaymentState::Failed,
        }
    }

    fn drain(&mut self) -> Vec<FlowAction> {
        self.queued_actions.drain(..).collect()
    }

    fn set_state(&mut self, state: PaymentState) {
        if self.state != state {
            log::info!("payment state {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    // events

    pub fn init(&mut self) -> Vec<FlowAction> {
        self.init_helper();
        self.drain()
    }

    fn init_helper(&mut self) {
        self.load_checkout_script();
        if let AmountSource::Pricing(_) = self.params.amount {
            self.fetch_pricing();
        }
        self.render();
    }

    pub fn script_settled(&mut self, loaded: bool) -> Vec<FlowAction> {
        if !self.unmounted {
            if !loaded {
                log::error!("failed to load checkout script");
            }
            self.script_loaded = loaded;
            self.render();
        }
        self.drain()
    }

    pub fn pricing_settled(&mut self, result: Result<Pricing, ApiError>) -> Vec<FlowAction> {
        if !self.unmounted {
            match result {
                Ok(pricing) => {
                    log::debug!("pricing: {:?}", pricing);
                    self.pricing = Some(pricing);
                }
                Err(e) => log::error!("failed to fetch pricing: {}", e),
            }
            self.render();
        }
        self.drain()
    }

    pub fn trigger(&mut self) -> Vec<FlowAction> {
        if !self.unmounted {
            self.trigger_helper();
        }
        self.drain()
    }

    fn trigger_helper(&mut self) {
        if self.busy() {
            log::debug!("pay ignored in state {:?}", self.state);
            return;
        }
        if !self.script_loaded {
            self.toast(Toast::error(GATEWAY_LOADING_TOAST));
            return;
        }
        let Some(amount) = self.amount() else {
            self.toast(Toast::error(PRICING_MISSING_TOAST));
            return;
        };

        self.loading = true;
        self.set_state(PaymentState::Processing);
        self.create_order(CreateOrderRequest {
            user_id: self.params.user_id.clone(),
            registration_id: self.params.registration_id.clone(),
            amount,
            currency: self.currency.clone(),
        });
        self.render();
    }

    pub fn order_created(
        &mut self,
        result: Result<CreateOrderResponse, ApiError>,
    ) -> Vec<FlowAction> {
        if !self.unmounted {
            self.order_created_helper(result);
        }
        self.drain()
    }

    fn order_created_helper(&mut self, result: Result<CreateOrderResponse, ApiError>) {
        self.loading = false;
        match result {
            Ok(order) => {
                log::info!(
                    "order {} created for payment {}",
                    order.razorpay_order.id,
                    order.payment.id
                );
                self.pending_order = Some(PendingOrder {
                    payment_id: order.payment.id.clone(),
                    order_id: order.razorpay_order.id.clone(),
                });
                let options = checkout_options(
                    &self.params,
                    &order,
                    Branding {
                        name: &self.brand_name,
                        theme_color: &self.theme_color,
                    },
                );
                self.open_checkout(options);
            }
            Err(e) => {
                let message = e.message_or(ORDER_FAILED_FALLBACK);
                log::warn!("order creation failed: {}", message);
                self.set_state(PaymentState::Idle);
                let toast = if self.is_fixed() {
                    FIXED_ORDER_FAILED_TOAST.to_string()
                } else {
                    message.clone()
                };
                self.toast(Toast::error(toast));
                self.notify_failure(message);
            }
        }
        self.render();
    }

    pub fn checkout_finished(&mut self, outcome: CheckoutOutcome) -> Vec<FlowAction> {
        if !self.unmounted {
            self.checkout_finished_helper(outcome);
        }
        self.drain()
    }

    fn checkout_finished_helper(&mut self, outcome: CheckoutOutcome) {
        match outcome {
            CheckoutOutcome::Dismissed => {
                log::info!("checkout dismissed");
                self.pending_order = None;
                self.set_state(PaymentState::Idle);
                if self.is_fixed() {
                    self.notify_closed();
                }
            }
            CheckoutOutcome::Completed(response) => {
                let Some(order) = self.pending_order.as_ref() else {
                    log::warn!("checkout completed without a pending order");
                    return;
                };
                if order.order_id != response.razorpay_order_id {
                    log::warn!(
                        "checkout returned order {} while {} was pending",
                        response.razorpay_order_id,
                        order.order_id
                    );
                }
                let req = verify_request(&order.payment_id, &response);
                self.set_state(PaymentState::Processing);
                self.verify_payment(req);
            }
        }
        self.render();
    }

    pub fn verification_settled(&mut self, result: Result<Value, ApiError>) -> Vec<FlowAction> {
        if !self.unmounted {
            self.verification_settled_helper(result);
        }
        self.drain()
    }

    fn verification_settled_helper(&mut self, result: Result<Value, ApiError>) {
        self.pending_order = None;
        match result {
            Ok(payload) => {
                self.set_state(PaymentState::Success);
                self.toast(Toast::success(if self.is_fixed() {
                    FIXED_SUCCESS_TOAST
                } else {
                    PAYMENT_SUCCESS_TOAST
                }));
                self.notify_success(payload);
                self.add_timeout(TimerId::Resync, self.resync_delay_ms);
            }
            Err(e) => {
                log::warn!("payment verification failed: {}", e);
                self.set_state(PaymentState::Failed);
                self.toast(Toast::error(if self.is_fixed() {
                    FIXED_VERIFICATION_FAILED_TOAST
                } else {
                    VERIFICATION_FAILED_TOAST
                }));
                self.notify_failure(e.to_string());
            }
        }
        self.render();
    }

    /// "Try Again": only leaves `Failed`, and never touches the network.
    pub fn try_again(&mut self) -> Vec<FlowAction> {
        if !self.unmounted && self.state == PaymentState::Failed {
            self.set_state(PaymentState::Idle);
            self.render();
        }
        self.drain()
    }

    pub fn handle_timeout(&mut self, id: TimerId) -> Vec<FlowAction> {
        if !self.unmounted {
            match id {
                TimerId::Resync => self.fetch_profile(),
            }
        }
        self.drain()
    }

    pub fn resynced(&mut self, result: Result<UserProfile, ApiError>) -> Vec<FlowAction> {
        if !self.unmounted {
            match result {
                Ok(profile) => self.notify_resynced(profile),
                Err(e) => log::warn!("failed to refresh profile after payment: {}", e),
            }
        }
        self.drain()
    }

    /// After this every event is ignored.
    pub fn unmount(&mut self) -> Vec<FlowAction> {
        if !self.unmounted {
            log::debug!("payment flow unmounted in state {:?}", self.state);
            self.unmounted = true;
            self.queued_actions.clear();
            self.remove_timeout(TimerId::Resync);
        }
        self.drain()
    }
}
