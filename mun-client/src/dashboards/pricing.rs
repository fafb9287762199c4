use std::sync::Arc;

use kmun_core::{messages::UpdatePricingRequest, types::Pricing};

use crate::{
    api::PricingApi,
    error::ClientError,
    notify::{Toast, Toaster},
};

/// Editable copy of the two fees. Nothing else about pricing is user-editable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingForm {
    pub internal_delegate: u64,
    pub external_delegate: u64,
}

impl Default for PricingForm {
    fn default() -> Self {
        Self {
            internal_delegate: 2500,
            external_delegate: 3500,
        }
    }
}

impl From<&Pricing> for PricingForm {
    fn from(p: &Pricing) -> Self {
        Self {
            internal_delegate: p.internal_delegate,
            external_delegate: p.external_delegate,
        }
    }
}

impl PricingForm {
    /// Non-numeric input counts as zero.
    pub fn set_internal(&mut self, input: &str) {
        self.internal_delegate = input.trim().parse().unwrap_or(0);
    }

    pub fn set_external(&mut self, input: &str) {
        self.external_delegate = input.trim().parse().unwrap_or(0);
    }
}

pub struct PricingDashboard<A: PricingApi> {
    api: Arc<A>,
    toaster: Arc<dyn Toaster>,
    pricing: Option<Pricing>,
    pub form: PricingForm,
}

impl<A: PricingApi> PricingDashboard<A> {
    pub fn new(api: Arc<A>, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            api,
            toaster,
            pricing: None,
            form: PricingForm::default(),
        }
    }

    pub fn pricing(&self) -> Option<&Pricing> {
        self.pricing.as_ref()
    }

    pub async fn load(&mut self) -> Result<(), ClientError> {
        match self.api.get_pricing().await {
            Ok(pricing) => {
                self.form = PricingForm::from(&pricing);
                self.pricing = Some(pricing);
                Ok(())
            }
            Err(e) => {
                log::error!("failed to fetch pricing: {}", e);
                self.toaster.toast(Toast::error("Failed to load pricing data"));
                Err(e.into())
            }
        }
    }

    pub async fn save(&mut self) -> Result<(), ClientError> {
        let req = UpdatePricingRequest {
            internal_delegate: self.form.internal_delegate,
            external_delegate: self.form.external_delegate,
        };
        match self.api.update_pricing(req).await {
            Ok(pricing) => {
                self.pricing = Some(pricing);
                self.toaster.toast(Toast::success("Pricing updated successfully"));
                Ok(())
            }
            Err(e) => {
                log::error!("failed to update pricing: {}", e);
                self.toaster.toast(Toast::error("Failed to update pricing"));
                Err(e.into())
            }
        }
    }

    /// Back to the last fetched values; a no-op before the first fetch.
    pub fn reset(&mut self) {
        if let Some(pricing) = &self.pricing {
            self.form = PricingForm::from(pricing);
        }
    }
}
