#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStats {
    pub total_payments: u64,
    pub successful_payments: u64,
    pub pending_payments: u64,
    pub failed_payments: u64,
    pub total_amount: u64,
    pub successful_amount: u64,
    /// Percentage already formatted by the backend, e.g. `"87.50"`.
    #[serde(default)]
    pub success_rate: String,
}
