use kmun_client::{driver::ScriptLoader, flow::PaymentState};

use crate::harness::{
    event::{BackendEvents, CheckoutEvents, Event},
    harness::{FlowHarness, FlowSetup},
};

pub async fn unmount_mid_order() {
    let h = FlowHarness::new(5, FlowSetup::default());
    let gate = h.gate_orders();
    h.ready().await;

    h.handle.pay();
    h.expect("order request", |ev| {
        matches!(ev, Event::Backend(BackendEvents::OrderRequested(_)))
    })
    .await;
    h.handle.unmount();
    h.expect("flow stopped", |ev| matches!(ev, Event::Stopped)).await;

    gate.notify_one();
    let late = h.collect_for(300).await;
    assert!(late.is_empty(), "nothing may happen after unmount: {late:?}");
}

pub async fn shared_script_loader() {
    let loader = ScriptLoader::new();

    let first = FlowHarness::new(
        5,
        FlowSetup {
            failing_loads: 1,
            loader: loader.clone(),
            ..Default::default()
        },
    );
    first
        .expect_view("pricing without gateway", |v| v.fee_line.is_some())
        .await;
    first.handle.unmount();
    first.expect("first stopped", |ev| matches!(ev, Event::Stopped)).await;
    assert!(!loader.is_loaded());

    let second = FlowHarness::new(
        5,
        FlowSetup {
            loader: loader.clone(),
            ..Default::default()
        },
    );
    second
        .expect("script requested again", |ev| {
            matches!(ev, Event::Checkout(CheckoutEvents::ScriptRequested(_)))
        })
        .await;
    let view = second.ready().await;
    assert_eq!(view.state, PaymentState::Idle);
    assert!(loader.is_loaded());

    // a cached load never reaches the widget
    let third = FlowHarness::new(
        5,
        FlowSetup {
            failing_loads: 10,
            loader,
            ..Default::default()
        },
    );
    let events = third.collect_for(300).await;
    assert!(!events
        .iter()
        .any(|ev| matches!(ev, Event::Checkout(CheckoutEvents::ScriptRequested(_)))));
    assert!(events.iter().any(|ev| matches!(
        ev,
        Event::Ui(crate::harness::event::UiEvents::Render(v)) if !v.disabled
    )));
}
