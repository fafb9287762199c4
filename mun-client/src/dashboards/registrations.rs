use std::sync::Arc;

use kmun_core::{
    messages::UpdateRegistrationRequest,
    types::{Registration, RegistrationStatus},
};

use crate::{
    api::RegistrationsApi,
    error::ClientError,
    notify::{Toast, Toaster},
};

use super::{any_contains_ci, Filter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegistrationCounts {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub allocated: usize,
}

pub struct RegistrationsDashboard<A: RegistrationsApi> {
    api: Arc<A>,
    toaster: Arc<dyn Toaster>,
    registrations: Vec<Registration>,
    pub search: String,
    pub status: Filter<RegistrationStatus>,
}

impl<A: RegistrationsApi> RegistrationsDashboard<A> {
    pub fn new(api: Arc<A>, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            api,
            toaster,
            registrations: Vec::new(),
            search: String::new(),
            status: Filter::All,
        }
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub async fn load(&mut self) -> Result<(), ClientError> {
        match self.api.list_registrations().await {
            Ok(registrations) => {
                log::debug!("loaded {} registrations", registrations.len());
                self.registrations = registrations;
                Ok(())
            }
            Err(e) => {
                log::error!("failed to load registrations: {}", e);
                self.toaster
                    .toast(Toast::error(format!("Failed to load registrations: {e}")));
                Err(e.into())
            }
        }
    }

    pub fn visible(&self) -> Vec<&Registration> {
        self.registrations
            .iter()
            .filter(|r| {
                let name = r.full_name();
                any_contains_ci(&[name.as_str(), r.email.as_str()], &self.search)
                    && self.status.matches(&r.status)
            })
            .collect()
    }

    pub fn counts(&self) -> RegistrationCounts {
        let with = |s: RegistrationStatus| self.registrations.iter().filter(|r| r.status == s).count();
        RegistrationCounts {
            total: self.registrations.len(),
            pending: with(RegistrationStatus::Pending),
            confirmed: with(RegistrationStatus::Confirmed),
            allocated: self.registrations.iter().filter(|r| r.is_allocated()).count(),
        }
    }

    /// Assigns a committee and portfolio, then patches the row in place.
    pub async fn allocate(
        &mut self,
        id: &str,
        committee: &str,
        portfolio: &str,
    ) -> Result<(), ClientError> {
        let committee = committee.trim();
        let portfolio = portfolio.trim();
        if committee.is_empty() || portfolio.is_empty() {
            let e = ClientError::validation(super::REQUIRED_FIELDS);
            self.toaster.toast(Toast::error(e.to_string()));
            return Err(e);
        }
        let req = UpdateRegistrationRequest {
            allocated_committee: Some(committee.to_string()),
            allocated_portfolio: Some(portfolio.to_string()),
            ..Default::default()
        };
        self.update(id, req, "Allocation updated successfully", "Failed to update allocation")
            .await
    }

    pub async fn set_status(&mut self, id: &str, status: RegistrationStatus) -> Result<(), ClientError> {
        let req = UpdateRegistrationRequest {
            status: Some(status),
            ..Default::default()
        };
        self.update(id, req, "Registration updated successfully", "Failed to update registration")
            .await
    }

    async fn update(
        &mut self,
        id: &str,
        req: UpdateRegistrationRequest,
        ok: &str,
        fallback: &str,
    ) -> Result<(), ClientError> {
        if let Err(e) = self.api.update_registration(id, req.clone()).await {
            self.toaster.toast(Toast::error(e.message_or(fallback)));
            return Err(e.into());
        }
        if let Some(r) = self.registrations.iter_mut().find(|r| r.id == id) {
            if let Some(status) = req.status {
                r.status = status;
            }
            if req.allocated_committee.is_some() {
                r.allocated_committee = req.allocated_committee;
            }
            if req.allocated_portfolio.is_some() {
                r.allocated_portfolio = req.allocated_portfolio;
            }
        }
        self.toaster.toast(Toast::success(ok));
        Ok(())
    }
}
