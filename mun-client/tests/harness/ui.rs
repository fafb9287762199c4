use kmun_client::{
    flow::ButtonView,
    interfaces::PaymentUi,
    notify::{Toast, Toaster},
};
use kmun_core::types::UserProfile;
use serde_json::Value;

use super::event::{Event, EventTx, UiEvents};

pub struct MockUi {
    event_tx: EventTx,
}

impl MockUi {
    pub fn new(event_tx: EventTx) -> Self {
        Self { event_tx }
    }
}

impl Toaster for MockUi {
    fn toast(&self, toast: Toast) {
        self.event_tx.push(Event::Ui(UiEvents::Toast(toast)));
    }
}

impl PaymentUi for MockUi {
    fn render(&self, view: ButtonView) {
        self.event_tx.push(Event::Ui(UiEvents::Render(view)));
    }

    fn payment_succeeded(&self, payload: Value) {
        self.event_tx.push(Event::Ui(UiEvents::Succeeded(payload)));
    }

    fn payment_failed(&self, reason: String) {
        self.event_tx.push(Event::Ui(UiEvents::Failed(reason)));
    }

    fn resynced(&self, profile: UserProfile) {
        self.event_tx.push(Event::Ui(UiEvents::Resynced(profile)));
    }

    fn checkout_closed(&self) {
        self.event_tx.push(Event::Ui(UiEvents::Closed));
    }
}
