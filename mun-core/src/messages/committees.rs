use super::super::types::InstitutionType;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeRequest {
    pub name: String,
    pub institution_type: InstitutionType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRequest {
    pub name: String,
    pub description: String,
    pub capacity: u32,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeStats {
    #[serde(default)]
    pub total_committees: u64,
    #[serde(default)]
    pub total_portfolios: u64,
    #[serde(default)]
    pub total_capacity: u64,
    #[serde(default)]
    pub total_registered: u64,
}
