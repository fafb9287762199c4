use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use kmun_client::interfaces::{CheckoutOptions, CheckoutOutcome, CheckoutResponse, CheckoutWidget};

use super::event::{CheckoutEvents, Event, EventTx};

pub fn completed(order_id: &str) -> CheckoutOutcome {
    CheckoutOutcome::Completed(CheckoutResponse {
        razorpay_payment_id: "rzp_pay_1".into(),
        razorpay_order_id: order_id.into(),
        razorpay_signature: "sig_1".into(),
    })
}

pub struct MockCheckout {
    failing_loads: AtomicUsize,
    outcome: Mutex<CheckoutOutcome>,
    event_tx: EventTx,
}

impl MockCheckout {
    /// The first `failing_loads` script loads report failure.
    pub fn new(failing_loads: usize, outcome: CheckoutOutcome, event_tx: EventTx) -> Self {
        Self {
            failing_loads: AtomicUsize::new(failing_loads),
            outcome: Mutex::new(outcome),
            event_tx,
        }
    }
}

#[async_trait::async_trait]
impl CheckoutWidget for MockCheckout {
    async fn load_script(&self, src: &str) -> bool {
        self.event_tx
            .push(Event::Checkout(CheckoutEvents::ScriptRequested(src.to_string())));
        self.failing_loads
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .is_err()
    }

    async fn open(&self, options: CheckoutOptions) -> CheckoutOutcome {
        self.event_tx
            .push(Event::Checkout(CheckoutEvents::Opened(options)));
        self.outcome.lock().unwrap().clone()
    }
}
