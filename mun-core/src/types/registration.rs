use chrono::{DateTime, Utc};

use super::{DelegateKind, InstitutionType};

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
    Confirmed,
    /// Any status this client does not know yet.
    #[serde(other)]
    Unknown,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "PENDING",
            RegistrationStatus::Approved => "APPROVED",
            RegistrationStatus::Rejected => "REJECTED",
            RegistrationStatus::Confirmed => "CONFIRMED",
            RegistrationStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_type: Option<InstitutionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    /// Set by the backend for host-institution delegates, who pay the internal fee.
    #[serde(default)]
    pub is_kumaraguru: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committee_preference1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committee_preference2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committee_preference3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_preference1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_preference2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_preference3: Option<String>,
    pub status: RegistrationStatus,
    #[serde(default)]
    pub allocated_committee: Option<String>,
    #[serde(default)]
    pub allocated_portfolio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Registration {
    pub fn delegate_kind(&self) -> DelegateKind {
        self.is_kumaraguru.into()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_allocated(&self) -> bool {
        self.allocated_committee.is_some() && self.allocated_portfolio.is_some()
    }

    /// Ranked (committee, portfolio) preferences, skipping empty ranks.
    pub fn preferences(&self) -> Vec<(&str, Option<&str>)> {
        [
            (&self.committee_preference1, &self.portfolio_preference1),
            (&self.committee_preference2, &self.portfolio_preference2),
            (&self.committee_preference3, &self.portfolio_preference3),
        ]
        .into_iter()
        .filter_map(|(c, p)| c.as_deref().map(|c| (c, p.as_deref())))
        .collect()
    }
}
