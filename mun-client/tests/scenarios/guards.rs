use std::time::Duration;

use kmun_client::{
    flow::{PaymentState, GATEWAY_LOADING_HINT, GATEWAY_LOADING_TOAST, PRICING_MISSING_TOAST},
    notify::ToastKind,
};
use kmun_core::format::error::{ApiError, GenericError};

use crate::harness::{
    backend::BackendScript,
    event::{BackendEvents, CheckoutEvents, Event},
    harness::{FlowHarness, FlowSetup},
};

pub async fn script_missing() {
    let h = FlowHarness::new(
        5,
        FlowSetup {
            failing_loads: 1,
            ..Default::default()
        },
    );

    let view = h
        .expect_view("pricing without gateway", |v| v.fee_line.is_some())
        .await;
    assert_eq!(view.gateway_hint.as_deref(), Some(GATEWAY_LOADING_HINT));
    assert!(view.disabled);

    h.handle.pay();
    let toast = h.expect_toast().await;
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, GATEWAY_LOADING_TOAST);
    h.assert_no_outbound(300).await;
}

pub async fn pricing_missing() {
    let h = FlowHarness::new(
        5,
        FlowSetup {
            backend: BackendScript {
                pricing: Err(ApiError::Other(GenericError::Offline)),
                ..Default::default()
            },
            ..Default::default()
        },
    );

    h.expect("pricing fetch", |ev| {
        matches!(ev, Event::Backend(BackendEvents::PricingFetched))
    })
    .await;
    let view = h
        .expect_view("gateway loaded", |v| v.gateway_hint.is_none())
        .await;
    assert!(view.disabled);
    assert_eq!(view.fee_line, None);
    // both mocks answer immediately; let the pricing failure land
    tokio::time::sleep(Duration::from_millis(50)).await;

    h.handle.pay();
    let toast = h.expect_toast().await;
    assert_eq!(toast.message, PRICING_MISSING_TOAST);
    h.assert_no_outbound(300).await;
}

pub async fn double_pay() {
    let h = FlowHarness::new(5, FlowSetup::default());
    let gate = h.gate_orders();
    h.ready().await;

    h.handle.pay();
    h.expect_view("processing", |v| v.state == PaymentState::Processing)
        .await;
    h.handle.pay();
    h.handle.pay();

    let events = h.collect_for(300).await;
    let orders = events
        .iter()
        .filter(|ev| matches!(ev, Event::Backend(BackendEvents::OrderRequested(_))))
        .count();
    assert_eq!(orders, 1);
    gate.notify_one();
    h.expect("checkout opened", |ev| {
        matches!(ev, Event::Checkout(CheckoutEvents::Opened(_)))
    })
    .await;
}
