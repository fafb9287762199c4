use kmun_client::{
    flow::{
        FlowParams, PaymentState, FIXED_SUCCESS_TOAST, FIXED_VERIFICATION_FAILED_TOAST,
        PAYMENT_SUCCESS_TOAST, VERIFICATION_FAILED_TOAST,
    },
    interfaces::CheckoutOutcome,
    notify::ToastKind,
};
use kmun_core::format::error::ApiError;
use serde_json::json;

use crate::harness::{
    backend::BackendScript,
    event::{BackendEvents, CheckoutEvents, Event, UiEvents},
    harness::{FlowHarness, FlowSetup},
};

pub async fn order_rejected() {
    let h = FlowHarness::new(
        5,
        FlowSetup {
            backend: BackendScript {
                order: Err(ApiError::Http {
                    status: 403,
                    message: Some("insufficient permissions".into()),
                }),
                ..Default::default()
            },
            ..Default::default()
        },
    );
    h.ready().await;

    h.handle.pay();
    h.expect("order request", |ev| {
        matches!(ev, Event::Backend(BackendEvents::OrderRequested(_)))
    })
    .await;
    let toast = h.expect_toast().await;
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "insufficient permissions");
    let view = h.expect_view("idle again", |v| v.state == PaymentState::Idle).await;
    assert!(!view.disabled);

    let events = h.collect_for(300).await;
    assert!(!events
        .iter()
        .any(|ev| matches!(ev, Event::Checkout(CheckoutEvents::Opened(_)))));
}

pub async fn verified() {
    let payload = json!({ "payment": { "id": "pay_rec_1", "status": "PAID" }, "extra": [1, 2] });
    let h = FlowHarness::new(
        5,
        FlowSetup {
            backend: BackendScript {
                verify: Ok(payload.clone()),
                ..Default::default()
            },
            ..Default::default()
        },
    );
    h.ready().await;
    h.handle.pay();

    match h
        .expect("order request", |ev| {
            matches!(ev, Event::Backend(BackendEvents::OrderRequested(_)))
        })
        .await
    {
        Event::Backend(BackendEvents::OrderRequested(req)) => {
            assert_eq!(req.user_id, "u1");
            assert_eq!(req.registration_id.as_deref(), Some("r1"));
            assert_eq!(req.amount, 1600);
            assert_eq!(req.currency, "INR");
        }
        _ => unreachable!(),
    }

    match h
        .expect("checkout opened", |ev| {
            matches!(ev, Event::Checkout(CheckoutEvents::Opened(_)))
        })
        .await
    {
        Event::Checkout(CheckoutEvents::Opened(options)) => {
            assert_eq!(options.order_id, "order_1");
            assert_eq!(options.key, "rzp_test_key");
            assert_eq!(options.amount, 160000);
            assert_eq!(options.name, "Kumaraguru MUN 2025");
            assert_eq!(options.prefill.name, "KMUN001");
            assert_eq!(options.notes.get("delegateType").map(String::as_str), Some("Internal"));
            assert_eq!(options.theme.color, "#172d9d");
        }
        _ => unreachable!(),
    }

    match h
        .expect("verification", |ev| {
            matches!(ev, Event::Backend(BackendEvents::VerifyRequested(_)))
        })
        .await
    {
        Event::Backend(BackendEvents::VerifyRequested(req)) => {
            assert_eq!(req.payment_id, "pay_rec_1");
            assert_eq!(req.razorpay_payment_id, "rzp_pay_1");
            assert_eq!(req.razorpay_signature, "sig_1");
        }
        _ => unreachable!(),
    }

    let toast = h.expect_toast().await;
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, PAYMENT_SUCCESS_TOAST);
    match h
        .expect("success callback", |ev| matches!(ev, Event::Ui(UiEvents::Succeeded(_))))
        .await
    {
        Event::Ui(UiEvents::Succeeded(got)) => assert_eq!(got, payload),
        _ => unreachable!(),
    }
    let view = h.expect_view("success", |v| v.state == PaymentState::Success).await;
    assert_eq!(view.label, "Payment Successful!");
    assert!(view.disabled);

    h.expect("profile resync", |ev| {
        matches!(ev, Event::Backend(BackendEvents::ProfileFetched))
    })
    .await;
    match h
        .expect("resynced profile", |ev| matches!(ev, Event::Ui(UiEvents::Resynced(_))))
        .await
    {
        Event::Ui(UiEvents::Resynced(profile)) => assert!(profile.has_paid()),
        _ => unreachable!(),
    }
}

pub async fn verification_failed() {
    let h = FlowHarness::new(
        5,
        FlowSetup {
            backend: BackendScript {
                verify: Err(ApiError::Rejected(Some("signature mismatch".into()))),
                ..Default::default()
            },
            ..Default::default()
        },
    );
    h.ready().await;
    h.handle.pay();

    let toast = h
        .expect("verification toast", |ev| {
            matches!(ev, Event::Ui(UiEvents::Toast(t)) if t.kind == ToastKind::Error)
        })
        .await;
    match toast {
        Event::Ui(UiEvents::Toast(t)) => assert_eq!(t.message, VERIFICATION_FAILED_TOAST),
        _ => unreachable!(),
    }
    let view = h.expect_view("failed", |v| v.state == PaymentState::Failed).await;
    assert_eq!(view.label, "Payment Failed");
    assert!(view.show_try_again);

    h.handle.try_again();
    let view = h.expect_view("idle", |v| v.state == PaymentState::Idle).await;
    assert!(!view.show_try_again);
    assert!(!view.disabled);
    h.assert_no_outbound(300).await;
}

pub async fn dismissed() {
    let h = FlowHarness::new(
        5,
        FlowSetup {
            outcome: CheckoutOutcome::Dismissed,
            ..Default::default()
        },
    );
    h.ready().await;
    h.handle.pay();

    h.expect("checkout opened", |ev| {
        matches!(ev, Event::Checkout(CheckoutEvents::Opened(_)))
    })
    .await;
    let view = h.expect_view("idle", |v| v.state == PaymentState::Idle).await;
    assert!(!view.disabled);
    let events = h.collect_for(300).await;
    assert!(!events.iter().any(|ev| ev.is_outbound()));
    assert!(!events
        .iter()
        .any(|ev| matches!(ev, Event::Ui(UiEvents::Closed))));
}

pub async fn fixed_dismissed_closes() {
    let h = FlowHarness::new(
        5,
        FlowSetup {
            params: FlowParams::fixed("u3", 2500),
            outcome: CheckoutOutcome::Dismissed,
            ..Default::default()
        },
    );
    h.ready().await;
    h.handle.pay();

    h.expect("closed callback", |ev| matches!(ev, Event::Ui(UiEvents::Closed)))
        .await;
    h.expect_view("idle", |v| v.state == PaymentState::Idle).await;
    h.assert_no_outbound(300).await;
}

pub async fn fixed_gateway_wording() {
    let h = FlowHarness::new(
        5,
        FlowSetup {
            params: FlowParams::fixed("u3", 2500),
            ..Default::default()
        },
    );
    h.ready().await;
    h.handle.pay();

    let toast = h.expect_toast().await;
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, FIXED_SUCCESS_TOAST);
    h.expect("success callback", |ev| matches!(ev, Event::Ui(UiEvents::Succeeded(_))))
        .await;

    let h = FlowHarness::new(
        5,
        FlowSetup {
            params: FlowParams::fixed("u3", 2500),
            backend: BackendScript {
                verify: Err(ApiError::rejected("signature mismatch")),
                ..Default::default()
            },
            ..Default::default()
        },
    );
    h.ready().await;
    h.handle.pay();

    let toast = h.expect_toast().await;
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, FIXED_VERIFICATION_FAILED_TOAST);
}
