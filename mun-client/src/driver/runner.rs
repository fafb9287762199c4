use std::sync::Arc;

use flume::{Receiver, Sender};
use futures::{future::BoxFuture, stream::FuturesUnordered, StreamExt};
use kmun_core::{
    format::error::ApiError,
    messages::CreateOrderResponse,
    types::{Pricing, UserProfile},
};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::{
    config::PortalConfig,
    flow::{FlowAction, FlowParams, PaymentFlowCore},
    interfaces::{CheckoutOutcome, CheckoutWidget, PaymentInterface, PaymentUi, PaymentsBackend},
    notify::Toaster,
};

use super::{ScriptLoader, TimerDriver, TimerManager};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserInput {
    Pay,
    TryAgain,
}

enum Completion {
    Script(bool),
    Pricing(Result<Pricing, ApiError>),
    Order(Result<CreateOrderResponse, ApiError>),
    Checkout(CheckoutOutcome),
    Verify(Result<Value, ApiError>),
    Profile(Result<UserProfile, ApiError>),
}

/// What a frontend holds to drive a running [`PaymentFlow`].
#[derive(Clone)]
pub struct PaymentFlowHandle {
    input_tx: Sender<UserInput>,
    stop_token: CancellationToken,
}

impl PaymentFlowHandle {
    pub fn pay(&self) {
        if self.input_tx.send(UserInput::Pay).is_err() {
            log::debug!("pay after the flow stopped");
        }
    }

    pub fn try_again(&self) {
        if self.input_tx.send(UserInput::TryAgain).is_err() {
            log::debug!("try again after the flow stopped");
        }
    }

    pub fn unmount(&self) {
        self.stop_token.cancel();
    }
}

pub struct PaymentFlow<I: PaymentInterface, T: TimerManager> {
    core: PaymentFlowCore,
    interface: Arc<I>,
    timers: TimerDriver<T>,
    script: ScriptLoader,
    input_rx: Receiver<UserInput>,
    stop_token: CancellationToken,
}

impl<I: PaymentInterface, T: TimerManager> PaymentFlow<I, T> {
    pub fn new(
        interface: Arc<I>,
        timer: T,
        script: ScriptLoader,
        params: FlowParams,
        config: &PortalConfig,
        input_rx: Receiver<UserInput>,
        stop_token: CancellationToken,
    ) -> Self {
        Self {
            core: PaymentFlowCore::new(params, config),
            interface,
            timers: TimerDriver::new(timer),
            script,
            input_rx,
            stop_token,
        }
    }

    /// Builds a flow together with the handle that feeds it.
    pub fn with_handle(
        interface: Arc<I>,
        timer: T,
        script: ScriptLoader,
        params: FlowParams,
        config: &PortalConfig,
    ) -> (Self, PaymentFlowHandle) {
        let (input_tx, input_rx) = flume::unbounded();
        let stop_token = CancellationToken::new();
        let handle = PaymentFlowHandle {
            input_tx,
            stop_token: stop_token.clone(),
        };
        let flow = Self::new(interface, timer, script, params, config, input_rx, stop_token);
        (flow, handle)
    }

    pub async fn run(self) {
        let PaymentFlow {
            mut core,
            interface,
            mut timers,
            script,
            input_rx,
            stop_token,
        } = self;
        let mut in_flight: FuturesUnordered<BoxFuture<'static, Completion>> =
            FuturesUnordered::new();
        let mut actions = core.init();

        loop {
            for action in actions.drain(..) {
                match action {
                    FlowAction::LoadCheckoutScript(src) => {
                        log::debug!("load checkout script: {}", src);
                        let interface = interface.clone();
                        let script = script.clone();
                        in_flight.push(Box::pin(async move {
                            Completion::Script(script.ensure_loaded(&*interface, &src).await)
                        }));
                    }
                    FlowAction::FetchPricing => {
                        log::debug!("fetch pricing");
                        let interface = interface.clone();
                        in_flight.push(Box::pin(async move {
                            Completion::Pricing(interface.fetch_pricing().await)
                        }));
                    }
                    FlowAction::CreateOrder(req) => {
                        log::info!("create order: {:?}", req);
                        let interface = interface.clone();
                        in_flight.push(Box::pin(async move {
                            Completion::Order(interface.create_order(req).await)
                        }));
                    }
                    FlowAction::OpenCheckout(options) => {
                        log::info!("open checkout for order {}", options.order_id);
                        let interface = interface.clone();
                        in_flight.push(Box::pin(async move {
                            Completion::Checkout(interface.open(options).await)
                        }));
                    }
                    FlowAction::VerifyPayment(req) => {
                        log::info!("verify payment {}", req.payment_id);
                        let interface = interface.clone();
                        in_flight.push(Box::pin(async move {
                            Completion::Verify(interface.verify_payment(req).await)
                        }));
                    }
                    FlowAction::FetchProfile => {
                        log::debug!("resync profile");
                        let interface = interface.clone();
                        in_flight.push(Box::pin(async move {
                            Completion::Profile(interface.fetch_profile().await)
                        }));
                    }
                    FlowAction::Toast(toast) => interface.toast(toast),
                    FlowAction::Render(view) => {
                        log::trace!("render: {:?}", view);
                        interface.render(view);
                    }
                    FlowAction::NotifySuccess(payload) => interface.payment_succeeded(payload),
                    FlowAction::NotifyFailure(reason) => interface.payment_failed(reason),
                    FlowAction::NotifyResynced(profile) => interface.resynced(profile),
                    FlowAction::NotifyClosed => interface.checkout_closed(),
                    FlowAction::AddTimeout(id, timeout_ms) => {
                        log::trace!("add timeout, id: {:?}, in: {}ms", id, timeout_ms);
                        timers.add_or_update(id, timeout_ms);
                    }
                    FlowAction::RemoveTimeout(id) => {
                        log::trace!("remove timeout, id: {:?}", id);
                        timers.remove_timeout(id);
                    }
                }
            }

            tokio::select! {
                biased;
                _ = stop_token.cancelled() => {
                    actions = core.unmount();
                    break;
                }
                input = input_rx.recv_async() => {
                    match input {
                        Ok(UserInput::Pay) => actions = core.trigger(),
                        Ok(UserInput::TryAgain) => actions = core.try_again(),
                        Err(_) => {
                            log::debug!("input closed, stopping payment flow");
                            actions = core.unmount();
                            break;
                        }
                    }
                }
                id = &mut timers => {
                    log::trace!("id timedout: {:?}", id);
                    actions = core.handle_timeout(id);
                }
                Some(done) = in_flight.next(), if !in_flight.is_empty() => {
                    actions = match done {
                        Completion::Script(loaded) => core.script_settled(loaded),
                        Completion::Pricing(result) => core.pricing_settled(result),
                        Completion::Order(result) => core.order_created(result),
                        Completion::Checkout(outcome) => core.checkout_finished(outcome),
                        Completion::Verify(result) => core.verification_settled(result),
                        Completion::Profile(result) => core.resynced(result),
                    };
                }
            }
        }

        for action in actions {
            if let FlowAction::RemoveTimeout(id) = action {
                timers.remove_timeout(id);
            }
        }
        timers.remove_all_timeouts();
        log::info!("payment flow stopped in state {:?}", core.state());
    }
}
