use std::sync::Arc;

use chrono::Utc;
use kmun_core::{
    messages::UpdateContactRequest,
    types::{ContactForm, ContactStatus},
};

use crate::{
    api::ContactApi,
    error::ClientError,
    notify::{Toast, Toaster},
};

use super::{any_contains_ci, Filter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactCounts {
    pub pending: usize,
    pub resolved: usize,
    pub archived: usize,
    pub total: usize,
}

pub struct ContactsDashboard<A: ContactApi> {
    api: Arc<A>,
    toaster: Arc<dyn Toaster>,
    contacts: Vec<ContactForm>,
    pub search: String,
    pub status: Filter<ContactStatus>,
}

impl<A: ContactApi> ContactsDashboard<A> {
    pub fn new(api: Arc<A>, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            api,
            toaster,
            contacts: Vec::new(),
            search: String::new(),
            status: Filter::All,
        }
    }

    pub fn contacts(&self) -> &[ContactForm] {
        &self.contacts
    }

    pub async fn load(&mut self) -> Result<(), ClientError> {
        match self.api.list_contacts().await {
            Ok(contacts) => {
                log::debug!("loaded {} contact forms", contacts.len());
                self.contacts = contacts;
                Ok(())
            }
            Err(e) => {
                log::error!("failed to load contact forms: {}", e);
                self.toaster.toast(Toast::error("Failed to load contact forms"));
                Err(e.into())
            }
        }
    }

    pub fn visible(&self) -> Vec<&ContactForm> {
        self.contacts
            .iter()
            .filter(|c| {
                any_contains_ci(&[c.name.as_str(), c.email.as_str(), c.subject.as_str()], &self.search)
                    && self.status.matches(&c.status)
            })
            .collect()
    }

    pub fn counts(&self) -> ContactCounts {
        let count = |s: ContactStatus| self.contacts.iter().filter(|c| c.status == s).count();
        ContactCounts {
            pending: count(ContactStatus::Pending),
            resolved: count(ContactStatus::Resolved),
            archived: count(ContactStatus::Archived),
            total: self.contacts.len(),
        }
    }

    /// Patches the local copy in place; no refetch.
    pub async fn set_status(
        &mut self,
        id: &str,
        status: ContactStatus,
        notes: Option<String>,
    ) -> Result<(), ClientError> {
        let req = UpdateContactRequest {
            status,
            notes: notes.clone(),
        };
        if let Err(e) = self.api.update_contact(id, req).await {
            log::error!("failed to update contact {}: {}", id, e);
            self.toaster.toast(Toast::error("Failed to update contact status"));
            return Err(e.into());
        }
        if let Some(contact) = self.contacts.iter_mut().find(|c| c.id == id) {
            contact.status = status;
            contact.notes = notes;
            if status == ContactStatus::Resolved {
                contact.resolved_at = Some(Utc::now());
            }
        }
        let label = match status {
            ContactStatus::Pending => "pending",
            ContactStatus::Resolved => "resolved",
            ContactStatus::Archived => "archived",
        };
        self.toaster
            .toast(Toast::success(format!("Contact {label} successfully")));
        Ok(())
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        if let Err(e) = self.api.delete_contact(id).await {
            log::error!("failed to delete contact {}: {}", id, e);
            self.toaster.toast(Toast::error("Failed to delete contact form"));
            return Err(e.into());
        }
        self.contacts.retain(|c| c.id != id);
        self.toaster
            .toast(Toast::success("Contact form deleted successfully"));
        Ok(())
    }
}
