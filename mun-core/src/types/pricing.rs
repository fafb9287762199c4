use chrono::{DateTime, Utc};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub internal_delegate: u64,
    pub external_delegate: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Pricing {
    pub fn amount_for(&self, kind: DelegateKind) -> u64 {
        match kind {
            DelegateKind::Internal => self.internal_delegate,
            DelegateKind::External => self.external_delegate,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelegateKind {
    Internal,
    External,
}

impl DelegateKind {
    pub fn label(&self) -> &'static str {
        match self {
            DelegateKind::Internal => "Internal",
            DelegateKind::External => "External",
        }
    }
}

impl From<bool> for DelegateKind {
    fn from(internal: bool) -> Self {
        if internal {
            DelegateKind::Internal
        } else {
            DelegateKind::External
        }
    }
}
