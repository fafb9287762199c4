use std::sync::Arc;

use kmun_core::{
    messages::PortfolioRequest,
    types::{Committee, InstitutionType, Portfolio},
};

use crate::{
    api::CommitteesApi,
    error::ClientError,
    notify::{Toast, Toaster},
    session::Session,
};

use super::{contains_ci, Filter, REQUIRED_FIELDS};

pub const SELECT_COMMITTEE_FIRST: &str = "Please select a committee first";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortfolioForm {
    pub name: String,
    pub description: String,
    pub capacity: Option<u32>,
}

impl PortfolioForm {
    fn to_request(&self) -> Result<PortfolioRequest, ClientError> {
        let name = self.name.trim();
        let description = self.description.trim();
        match self.capacity {
            Some(capacity) if !name.is_empty() && !description.is_empty() => Ok(PortfolioRequest {
                name: name.to_string(),
                description: description.to_string(),
                capacity,
            }),
            _ => Err(ClientError::validation(REQUIRED_FIELDS)),
        }
    }
}

/// Committee picker plus the portfolios of the selected committee. Every mutation is
/// gated on the session's role and refetches afterwards.
pub struct PortfoliosDashboard<A: CommitteesApi> {
    api: Arc<A>,
    toaster: Arc<dyn Toaster>,
    session: Session,
    committees: Vec<Committee>,
    selected: Option<String>,
    pub search: String,
    pub institution: Filter<InstitutionType>,
    pub form: PortfolioForm,
    editing: Option<String>,
}

impl<A: CommitteesApi> PortfoliosDashboard<A> {
    pub fn new(api: Arc<A>, toaster: Arc<dyn Toaster>, session: Session) -> Self {
        Self {
            api,
            toaster,
            session,
            committees: Vec::new(),
            selected: None,
            search: String::new(),
            institution: Filter::All,
            form: PortfolioForm::default(),
            editing: None,
        }
    }

    pub fn can_edit(&self) -> bool {
        self.session.can_manage_portfolios()
    }

    pub fn selected(&self) -> Option<&Committee> {
        let id = self.selected.as_deref()?;
        self.committees.iter().find(|c| c.id == id)
    }

    pub fn select(&mut self, committee_id: &str) {
        if self.committees.iter().any(|c| c.id == committee_id) {
            self.selected = Some(committee_id.to_string());
            self.form = PortfolioForm::default();
            self.editing = None;
        }
    }

    pub async fn load(&mut self) -> Result<(), ClientError> {
        match self.api.list_committees().await {
            Ok(committees) => {
                self.committees = committees;
                let still_there = self
                    .selected
                    .as_deref()
                    .is_some_and(|id| self.committees.iter().any(|c| c.id == id));
                if !still_there {
                    self.selected = self.committees.first().map(|c| c.id.clone());
                }
                Ok(())
            }
            Err(e) => {
                self.toaster
                    .toast(Toast::error(format!("Failed to load committees: {e}")));
                Err(e.into())
            }
        }
    }

    pub fn visible_committees(&self) -> Vec<&Committee> {
        self.committees
            .iter()
            .filter(|c| contains_ci(&c.name, &self.search) && self.institution.matches(&c.institution_type))
            .collect()
    }

    pub fn visible_portfolios(&self) -> Vec<&Portfolio> {
        self.selected()
            .map(|c| {
                c.portfolios
                    .iter()
                    .filter(|p| contains_ci(&p.name, &self.search))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn start_edit(&mut self, portfolio_id: &str) {
        let form = self
            .selected()
            .and_then(|c| c.portfolios.iter().find(|p| p.id == portfolio_id))
            .map(|p| PortfolioForm {
                name: p.name.clone(),
                description: p.description.clone(),
                capacity: Some(p.capacity),
            });
        if let Some(form) = form {
            self.form = form;
            self.editing = Some(portfolio_id.to_string());
        }
    }

    fn fail(&self, e: ClientError) -> Result<(), ClientError> {
        self.toaster.toast(Toast::error(e.to_string()));
        Err(e)
    }

    /// Role, selection and form checks, in that order. Nothing goes out on failure.
    fn checked(&self) -> Result<(String, PortfolioRequest), ClientError> {
        self.session.require_portfolio_manager()?;
        let committee_id = self
            .selected
            .clone()
            .ok_or_else(|| ClientError::validation(SELECT_COMMITTEE_FIRST))?;
        let req = self.form.to_request()?;
        Ok((committee_id, req))
    }

    pub async fn submit(&mut self) -> Result<(), ClientError> {
        let (committee_id, req) = match self.checked() {
            Ok(v) => v,
            Err(e) => return self.fail(e),
        };
        let result = match &self.editing {
            Some(pid) => self.api.update_portfolio(&committee_id, pid, req).await,
            None => self.api.create_portfolio(&committee_id, req).await,
        };
        let updating = self.editing.is_some();
        match result {
            Ok(portfolio) => {
                log::info!("saved portfolio {} in {}", portfolio.id, committee_id);
                self.toaster.toast(Toast::success(if updating {
                    "Portfolio updated successfully"
                } else {
                    "Portfolio added successfully"
                }));
                self.form = PortfolioForm::default();
                self.editing = None;
                self.load().await
            }
            Err(e) => {
                log::error!("failed to save portfolio: {}", e);
                self.toaster.toast(Toast::error(if updating {
                    "Failed to update portfolio"
                } else {
                    "Failed to add portfolio"
                }));
                Err(e.into())
            }
        }
    }

    pub async fn delete(&mut self, portfolio_id: &str) -> Result<(), ClientError> {
        if let Err(e) = self.session.require_portfolio_manager() {
            return self.fail(e);
        }
        let Some(committee_id) = self.selected.clone() else {
            return self.fail(ClientError::validation(SELECT_COMMITTEE_FIRST));
        };
        if let Err(e) = self.api.delete_portfolio(&committee_id, portfolio_id).await {
            log::error!("failed to delete portfolio {}: {}", portfolio_id, e);
            self.toaster.toast(Toast::error("Failed to delete portfolio"));
            return Err(e.into());
        }
        self.toaster
            .toast(Toast::success("Portfolio deleted successfully"));
        self.load().await
    }
}
