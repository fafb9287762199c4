use std::{
    collections::VecDeque,
    future::poll_fn,
    sync::{Arc, Mutex},
    task::Poll,
    time::{Duration, Instant},
};

use futures::task::AtomicWaker;
use kmun_client::{flow::ButtonView, interfaces::CheckoutOptions, notify::Toast};
use kmun_core::{
    messages::{CreateOrderRequest, VerifyPaymentRequest},
    types::UserProfile,
};
use serde_json::Value;
use tokio::time;

#[derive(Clone, Debug)]
pub enum BackendEvents {
    PricingFetched,
    OrderRequested(CreateOrderRequest),
    VerifyRequested(VerifyPaymentRequest),
    ProfileFetched,
}

#[derive(Clone, Debug)]
pub enum CheckoutEvents {
    ScriptRequested(String),
    Opened(CheckoutOptions),
}

#[derive(Clone, Debug)]
pub enum UiEvents {
    Toast(Toast),
    Render(ButtonView),
    Succeeded(Value),
    Failed(String),
    Resynced(UserProfile),
    Closed,
}

#[derive(Clone, Debug)]
pub enum Event {
    Backend(BackendEvents),
    Checkout(CheckoutEvents),
    Ui(UiEvents),
    Stopped,
}

impl Event {
    /// Anything that went over the network or opened the widget.
    pub fn is_outbound(&self) -> bool {
        matches!(
            self,
            Event::Backend(_) | Event::Checkout(CheckoutEvents::Opened(_))
        )
    }
}

#[derive(Debug)]
struct Inner {
    list: Mutex<VecDeque<Event>>,
    waker: AtomicWaker,
}

impl Inner {
    fn push(&self, ev: Event) {
        self.list.lock().unwrap().push_back(ev);
        self.waker.wake();
    }
}

#[derive(Clone, Debug)]
pub struct EventTx {
    inner: Arc<Inner>,
}

impl EventTx {
    pub fn push(&self, ev: Event) {
        self.inner.push(ev);
    }
}

#[derive(Debug)]
pub struct EventRx {
    inner: Arc<Inner>,
    timeout: Duration,
}

impl EventRx {
    pub async fn next(&self) -> Option<(Event, Duration)> {
        self.next_within(self.timeout).await
    }

    pub async fn next_within(&self, timeout: Duration) -> Option<(Event, Duration)> {
        let start = Instant::now();

        let wait_one = poll_fn(|cx| {
            if let Some(ev) = self.inner.list.lock().unwrap().pop_front() {
                return Poll::Ready(ev);
            }
            self.inner.waker.register(cx.waker());
            if let Some(ev) = self.inner.list.lock().unwrap().pop_front() {
                Poll::Ready(ev)
            } else {
                Poll::Pending
            }
        });

        match time::timeout(timeout, wait_one).await {
            Ok(ev) => Some((ev, start.elapsed())),
            Err(_) => None,
        }
    }
}

pub fn event_bus(timeout: u64) -> (EventTx, EventRx) {
    let inner = Arc::new(Inner {
        list: Default::default(),
        waker: AtomicWaker::new(),
    });
    (
        EventTx {
            inner: inner.clone(),
        },
        EventRx {
            inner,
            timeout: Duration::from_secs(timeout),
        },
    )
}
