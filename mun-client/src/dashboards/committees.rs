use std::sync::Arc;

use kmun_core::{
    messages::CommitteeRequest,
    types::{Committee, InstitutionType},
};

use crate::{
    api::CommitteesApi,
    error::ClientError,
    notify::{Toast, Toaster},
};

use super::{contains_ci, Filter, REQUIRED_FIELDS};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommitteeForm {
    pub name: String,
    pub institution_type: Option<InstitutionType>,
    pub description: String,
    pub capacity: Option<u32>,
}

impl CommitteeForm {
    fn to_request(&self) -> Result<CommitteeRequest, ClientError> {
        let name = self.name.trim();
        match self.institution_type {
            Some(institution_type) if !name.is_empty() => Ok(CommitteeRequest {
                name: name.to_string(),
                institution_type,
                description: self.description.trim().to_string(),
                capacity: self.capacity,
            }),
            _ => Err(ClientError::validation(REQUIRED_FIELDS)),
        }
    }
}

impl From<&Committee> for CommitteeForm {
    fn from(c: &Committee) -> Self {
        Self {
            name: c.name.clone(),
            institution_type: Some(c.institution_type),
            description: c.description.clone(),
            capacity: c.capacity,
        }
    }
}

pub struct CommitteesDashboard<A: CommitteesApi> {
    api: Arc<A>,
    toaster: Arc<dyn Toaster>,
    committees: Vec<Committee>,
    pub search: String,
    pub institution: Filter<InstitutionType>,
    pub form: CommitteeForm,
    editing: Option<String>,
}

impl<A: CommitteesApi> CommitteesDashboard<A> {
    pub fn new(api: Arc<A>, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            api,
            toaster,
            committees: Vec::new(),
            search: String::new(),
            institution: Filter::All,
            form: CommitteeForm::default(),
            editing: None,
        }
    }

    pub fn committees(&self) -> &[Committee] {
        &self.committees
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub async fn load(&mut self) -> Result<(), ClientError> {
        match self.api.list_committees().await {
            Ok(committees) => {
                self.committees = committees;
                Ok(())
            }
            Err(e) => {
                self.toaster
                    .toast(Toast::error(format!("Failed to load committees: {e}")));
                Err(e.into())
            }
        }
    }

    pub fn visible(&self) -> Vec<&Committee> {
        self.committees
            .iter()
            .filter(|c| contains_ci(&c.name, &self.search) && self.institution.matches(&c.institution_type))
            .collect()
    }

    pub fn start_edit(&mut self, id: &str) {
        if let Some(c) = self.committees.iter().find(|c| c.id == id) {
            self.form = CommitteeForm::from(c);
            self.editing = Some(id.to_string());
        }
    }

    pub fn cancel_edit(&mut self) {
        self.form = CommitteeForm::default();
        self.editing = None;
    }

    /// Creates, or updates the committee being edited, then refetches the list.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        let req = match self.form.to_request() {
            Ok(req) => req,
            Err(e) => {
                self.toaster.toast(Toast::error(e.to_string()));
                return Err(e);
            }
        };
        let result = match &self.editing {
            Some(id) => self.api.update_committee(id, req).await,
            None => self.api.create_committee(req).await,
        };
        let updating = self.editing.is_some();
        match result {
            Ok(committee) => {
                log::info!("saved committee {}", committee.id);
                self.toaster.toast(Toast::success(if updating {
                    "Committee updated successfully"
                } else {
                    "Committee created successfully"
                }));
                self.cancel_edit();
                self.load().await
            }
            Err(e) => {
                log::error!("failed to save committee: {}", e);
                self.toaster.toast(Toast::error(if updating {
                    "Failed to update committee"
                } else {
                    "Failed to create committee"
                }));
                Err(e.into())
            }
        }
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        if let Err(e) = self.api.delete_committee(id).await {
            log::error!("failed to delete committee {}: {}", id, e);
            self.toaster.toast(Toast::error("Failed to delete committee"));
            return Err(e.into());
        }
        self.toaster
            .toast(Toast::success("Committee deleted successfully"));
        self.load().await
    }
}
