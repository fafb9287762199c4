use std::sync::Arc;

use kmun_core::messages::{EmailProvider, RecipientType, SendMailRequest};

use crate::{
    api::MailerApi,
    error::ClientError,
    notify::{Toast, Toaster},
};

use super::{contains_ci, REQUIRED_FIELDS};

pub const ALL_GROUP: &str = "all";
pub const EMAIL_REQUIRED: &str = "Please enter an email address";
pub const GROUP_REQUIRED: &str = "Please select at least one recipient group";
pub const PREVIEW_FIELDS_REQUIRED: &str = "Please fill in subject and message to preview";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipientGroup {
    pub id: String,
    pub name: String,
}

impl RecipientGroup {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Registrants as a whole plus one group per committee.
    pub fn defaults() -> Vec<Self> {
        [
            (ALL_GROUP, "All Registrants"),
            ("unsc", "UNSC Applicants"),
            ("unodc", "UNODC Applicants"),
            ("lok_sabha", "Lok Sabha Applicants"),
            ("ccc", "CCC Applicants"),
            ("ipc", "IPC Applicants"),
            ("disec", "DISEC Applicants"),
        ]
        .into_iter()
        .map(|(id, name)| Self::new(id, name))
        .collect()
    }
}

/// What the preview pane shows before sending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailPreview {
    pub recipients: String,
    pub subject: String,
    pub message: String,
}

pub struct Mailer<A: MailerApi> {
    api: Arc<A>,
    toaster: Arc<dyn Toaster>,
    groups: Vec<RecipientGroup>,
    selected: Vec<String>,
    pub recipient_type: RecipientType,
    pub single_email: String,
    pub provider: EmailProvider,
    pub subject: String,
    pub message: String,
    pub group_search: String,
}

impl<A: MailerApi> Mailer<A> {
    pub fn new(api: Arc<A>, toaster: Arc<dyn Toaster>) -> Self {
        Self::with_groups(api, toaster, RecipientGroup::defaults())
    }

    pub fn with_groups(api: Arc<A>, toaster: Arc<dyn Toaster>, groups: Vec<RecipientGroup>) -> Self {
        Self {
            api,
            toaster,
            groups,
            selected: vec![ALL_GROUP.to_string()],
            recipient_type: RecipientType::Registrants,
            single_email: String::new(),
            provider: EmailProvider::Gmail,
            subject: String::new(),
            message: String::new(),
            group_search: String::new(),
        }
    }

    pub fn groups(&self) -> Vec<&RecipientGroup> {
        self.groups
            .iter()
            .filter(|g| contains_ci(&g.name, &self.group_search))
            .collect()
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// "all" replaces any selection; picking a specific group drops "all".
    pub fn toggle_group(&mut self, id: &str) {
        if id == ALL_GROUP {
            self.selected = vec![ALL_GROUP.to_string()];
            return;
        }
        self.selected.retain(|s| s != ALL_GROUP);
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_string());
        }
    }

    pub fn recipient_display(&self) -> String {
        if self.recipient_type == RecipientType::Single {
            return if self.single_email.is_empty() {
                "No email entered".to_string()
            } else {
                self.single_email.clone()
            };
        }
        if self.is_selected(ALL_GROUP) {
            return "All Registrants".to_string();
        }
        let names: Vec<&str> = self
            .selected
            .iter()
            .filter_map(|id| self.groups.iter().find(|g| &g.id == id))
            .map(|g| g.name.as_str())
            .collect();
        if names.is_empty() {
            "No recipients selected".to_string()
        } else {
            names.join(", ")
        }
    }

    pub fn preview(&self) -> Result<MailPreview, ClientError> {
        if self.subject.trim().is_empty() || self.message.trim().is_empty() {
            self.toaster.toast(Toast::error(PREVIEW_FIELDS_REQUIRED));
            return Err(ClientError::validation(PREVIEW_FIELDS_REQUIRED));
        }
        Ok(MailPreview {
            recipients: self.recipient_display(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }

    fn to_request(&self) -> Result<SendMailRequest, ClientError> {
        if self.subject.trim().is_empty() || self.message.trim().is_empty() {
            return Err(ClientError::validation(REQUIRED_FIELDS));
        }
        let single = self.single_email.trim();
        match self.recipient_type {
            RecipientType::Single if single.is_empty() => {
                Err(ClientError::validation(EMAIL_REQUIRED))
            }
            RecipientType::Registrants if self.selected.is_empty() => {
                Err(ClientError::validation(GROUP_REQUIRED))
            }
            RecipientType::Single => Ok(SendMailRequest {
                recipient_type: RecipientType::Single,
                recipients: vec![single.to_string()],
                single_email: Some(single.to_string()),
                email_provider: self.provider,
                subject: self.subject.clone(),
                message: self.message.clone(),
            }),
            RecipientType::Registrants => Ok(SendMailRequest {
                recipient_type: RecipientType::Registrants,
                recipients: self.selected.clone(),
                single_email: None,
                email_provider: self.provider,
                subject: self.subject.clone(),
                message: self.message.clone(),
            }),
        }
    }

    /// Returns the number of recipients the backend reports.
    pub async fn send(&mut self) -> Result<u64, ClientError> {
        let req = match self.to_request() {
            Ok(req) => req,
            Err(e) => {
                self.toaster.toast(Toast::error(e.to_string()));
                return Err(e);
            }
        };
        match self.api.send_mail(req).await {
            Ok(total) => {
                let sent = total.unwrap_or(1);
                log::info!("mail sent to {} recipient(s)", sent);
                self.toaster.toast(Toast::success(format!(
                    "Email sent successfully to {sent} recipient(s)!"
                )));
                self.reset();
                Ok(sent)
            }
            Err(e) => {
                log::error!("failed to send mail: {}", e);
                self.toaster
                    .toast(Toast::error("Failed to send email. Please try again."));
                Err(e.into())
            }
        }
    }

    /// Recipient type and provider survive a reset.
    pub fn reset(&mut self) {
        self.subject.clear();
        self.message.clear();
        self.single_email.clear();
        self.selected = vec![ALL_GROUP.to_string()];
    }
}
