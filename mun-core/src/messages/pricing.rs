#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePricingRequest {
    pub internal_delegate: u64,
    pub external_delegate: u64,
}
