use chrono::{DateTime, Utc};

use super::{DelegateKind, PaymentStatus, RegistrationStatus, Role};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// What `/api/auth/profile` returns for the signed-in delegate.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    /// Conference-issued delegate id, shown on badges and used as checkout prefill.
    #[serde(default)]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default)]
    pub is_kumaraguru: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committee_preference1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committee_preference2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committee_preference3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocated_committee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocated_portfolio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_status: Option<RegistrationStatus>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Follows the backend's `isKumaraguru` flag, not the institution name.
    pub fn delegate_kind(&self) -> DelegateKind {
        self.is_kumaraguru.into()
    }

    pub fn has_paid(&self) -> bool {
        self.payment_status == Some(PaymentStatus::Paid)
    }

    pub fn committee_preferences(&self) -> Vec<&str> {
        [
            &self.committee_preference1,
            &self.committee_preference2,
            &self.committee_preference3,
        ]
        .into_iter()
        .filter_map(|p| p.as_deref())
        .collect()
    }
}
