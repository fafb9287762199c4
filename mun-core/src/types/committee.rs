use chrono::{DateTime, Utc};

use super::Portfolio;

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InstitutionType {
    School,
    College,
    Both,
}

impl InstitutionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstitutionType::School => "school",
            InstitutionType::College => "college",
            InstitutionType::Both => "both",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InstitutionType::School => "School",
            InstitutionType::College => "College",
            InstitutionType::Both => "School & College",
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Committee {
    pub id: String,
    pub name: String,
    pub institution_type: InstitutionType,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub portfolios: Vec<Portfolio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Committee {
    pub fn seats_filled(&self) -> u32 {
        self.portfolios.iter().map(|p| p.registered).sum()
    }
}
