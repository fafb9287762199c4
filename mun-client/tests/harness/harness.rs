use std::{sync::{Arc, Once}, time::Duration};

use kmun_client::{
    driver::{PaymentFlow, PaymentFlowHandle, ScriptLoader, TokioTimerManager},
    flow::{ButtonView, FlowParams},
    interfaces::{CheckoutOutcome, PaymentInterfaceFacade},
    notify::Toast,
    PortalConfig,
};
use log::LevelFilter;
use tokio::sync::Notify;

use super::{
    backend::{BackendScript, MockBackend},
    checkout::{completed, MockCheckout},
    event::{event_bus, Event, EventRx, UiEvents},
    ui::MockUi,
};

pub type TestInterface = PaymentInterfaceFacade<MockBackend, MockCheckout, MockUi>;

pub struct FlowSetup {
    pub params: FlowParams,
    pub backend: BackendScript,
    pub failing_loads: usize,
    pub outcome: CheckoutOutcome,
    pub loader: ScriptLoader,
    pub config: PortalConfig,
}

impl Default for FlowSetup {
    fn default() -> Self {
        Self {
            params: FlowParams::registration_fee("u1", "r1", "KMUN001", true),
            backend: BackendScript::default(),
            failing_loads: 0,
            outcome: completed("order_1"),
            loader: ScriptLoader::new(),
            config: PortalConfig {
                resync_delay_ms: 50,
                ..Default::default()
            },
        }
    }
}

pub struct FlowHarness {
    pub handle: PaymentFlowHandle,
    pub bus_rx: EventRx,
    pub interface: Arc<TestInterface>,
}

static INIT: Once = Once::new();

fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .try_init()
            .ok();
    });
}

impl FlowHarness {
    pub fn new(timeout: u64, setup: FlowSetup) -> Self {
        init_logger();
        let (tx, rx) = event_bus(timeout);
        let interface = Arc::new(PaymentInterfaceFacade::new(
            MockBackend::new(setup.backend, tx.clone()),
            MockCheckout::new(setup.failing_loads, setup.outcome, tx.clone()),
            MockUi::new(tx.clone()),
        ));
        let (flow, handle) = PaymentFlow::with_handle(
            interface.clone(),
            TokioTimerManager::new(),
            setup.loader,
            setup.params,
            &setup.config,
        );
        tokio::spawn(async move {
            flow.run().await;
            tx.push(Event::Stopped);
        });
        Self {
            handle,
            bus_rx: rx,
            interface,
        }
    }

    pub fn gate_orders(&self) -> Arc<Notify> {
        self.interface.backend().gate_orders()
    }

    /// Skips events until one matches, panicking on timeout.
    pub async fn expect<F>(&self, what: &str, pred: F) -> Event
    where
        F: Fn(&Event) -> bool,
    {
        loop {
            match self.bus_rx.next().await {
                Some((ev, _)) if pred(&ev) => return ev,
                Some((ev, _)) => log::trace!("skipping {:?} while waiting for {}", ev, what),
                None => panic!("timed out waiting for {what}"),
            }
        }
    }

    pub async fn expect_view<F>(&self, what: &str, pred: F) -> ButtonView
    where
        F: Fn(&ButtonView) -> bool,
    {
        match self
            .expect(what, |ev| matches!(ev, Event::Ui(UiEvents::Render(v)) if pred(v)))
            .await
        {
            Event::Ui(UiEvents::Render(view)) => view,
            _ => unreachable!(),
        }
    }

    /// Waits for the first enabled button.
    pub async fn ready(&self) -> ButtonView {
        self.expect_view("enabled pay button", |v| !v.disabled).await
    }

    pub async fn expect_toast(&self) -> Toast {
        match self
            .expect("toast", |ev| matches!(ev, Event::Ui(UiEvents::Toast(_))))
            .await
        {
            Event::Ui(UiEvents::Toast(toast)) => toast,
            _ => unreachable!(),
        }
    }

    /// Everything the flow emits over the next `ms` milliseconds.
    pub async fn collect_for(&self, ms: u64) -> Vec<Event> {
        let deadline = tokio::time::Instant::now() + Duration::from_millis(ms);
        let mut events = Vec::new();
        loop {
            let left = deadline.saturating_duration_since(tokio::time::Instant::now());
            if left.is_zero() {
                return events;
            }
            match self.bus_rx.next_within(left).await {
                Some((ev, _)) => events.push(ev),
                None => return events,
            }
        }
    }

    /// Fails if anything goes over the network or opens the widget within `ms`.
    pub async fn assert_no_outbound(&self, ms: u64) {
        let events = self.collect_for(ms).await;
        if let Some(ev) = events.iter().find(|ev| ev.is_outbound()) {
            panic!("unexpected outbound event: {ev:?}");
        }
    }
}
