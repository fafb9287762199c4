use std::sync::Arc;

use kmun_core::{messages::UpdatePopupRequest, types::Popup};

use crate::{
    api::PopupApi,
    error::ClientError,
    notify::{Toast, Toaster},
};

pub const POPUP_FIELDS_REQUIRED: &str = "Please fill in both heading and text fields";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopupForm {
    pub heading: String,
    pub text: String,
    pub is_active: bool,
}

pub struct PopupDashboard<A: PopupApi> {
    api: Arc<A>,
    toaster: Arc<dyn Toaster>,
    popup: Option<Popup>,
    pub form: PopupForm,
}

impl<A: PopupApi> PopupDashboard<A> {
    pub fn new(api: Arc<A>, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            api,
            toaster,
            popup: None,
            form: PopupForm::default(),
        }
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub async fn load(&mut self) -> Result<(), ClientError> {
        match self.api.get_popup().await {
            Ok(popup) => {
                if let Some(p) = &popup {
                    self.form = PopupForm {
                        heading: p.heading.clone(),
                        text: p.text.clone(),
                        is_active: p.is_active,
                    };
                }
                self.popup = popup;
                Ok(())
            }
            Err(e) => {
                self.toaster.toast(Toast::error("Failed to load popup data"));
                Err(e.into())
            }
        }
    }

    pub async fn save(&mut self) -> Result<(), ClientError> {
        if self.form.heading.trim().is_empty() || self.form.text.trim().is_empty() {
            self.toaster.toast(Toast::error(POPUP_FIELDS_REQUIRED));
            return Err(ClientError::validation(POPUP_FIELDS_REQUIRED));
        }
        let req = UpdatePopupRequest {
            heading: self.form.heading.clone(),
            text: self.form.text.clone(),
            is_active: self.form.is_active,
        };
        match self.api.update_popup(req).await {
            Ok(popup) => {
                self.popup = Some(popup);
                self.toaster.toast(Toast::success("Popup updated successfully"));
                Ok(())
            }
            Err(e) => {
                self.toaster
                    .toast(Toast::error(e.message_or("Failed to update popup")));
                Err(e.into())
            }
        }
    }

    pub async fn toggle(&mut self) -> Result<(), ClientError> {
        let next = !self.form.is_active;
        match self.api.toggle_popup(next).await {
            Ok(popup) => {
                self.popup = Some(popup);
                self.form.is_active = next;
                let verb = if next { "activated" } else { "deactivated" };
                self.toaster
                    .toast(Toast::success(format!("Popup {verb} successfully")));
                Ok(())
            }
            Err(e) => {
                self.toaster
                    .toast(Toast::error(e.message_or("Failed to toggle popup")));
                Err(e.into())
            }
        }
    }
}

/// Site-wide announcement. Shown only for an active popup until the visitor closes it.
pub struct PopupBanner {
    popup: Option<Popup>,
    dismissed: bool,
}

impl PopupBanner {
    /// Any failure just means no banner.
    pub async fn fetch<A: PopupApi + ?Sized>(api: &A) -> Self {
        let popup = match api.active_popup().await {
            Ok(popup) => popup.filter(|p| p.is_active),
            Err(e) => {
                log::warn!("failed to fetch popup: {}", e);
                None
            }
        };
        Self {
            popup,
            dismissed: false,
        }
    }

    pub fn visible(&self) -> Option<&Popup> {
        if self.dismissed {
            None
        } else {
            self.popup.as_ref()
        }
    }

    pub fn close(&mut self) {
        self.dismissed = true;
    }
}
