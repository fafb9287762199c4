use super::super::types::{InstitutionType, Registration, RegistrationStatus};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub institution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_type: Option<InstitutionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committee_preference1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committee_preference2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committee_preference3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_preference1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_preference2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_preference3: Option<String>,
}

/// The list endpoint answers either `{ registrations: [...] }` or a bare array.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum RegistrationList {
    Wrapped { registrations: Vec<Registration> },
    Bare(Vec<Registration>),
}

impl RegistrationList {
    pub fn into_vec(self) -> Vec<Registration> {
        match self {
            RegistrationList::Wrapped { registrations } => registrations,
            RegistrationList::Bare(v) => v,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegistrationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RegistrationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_committee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_portfolio: Option<String>,
}
