pub const API_URL_ENV: &str = "VITE_API_URL";

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PortalConfig {
    pub api_url: String,
    /// Storage key the bearer token lives under.
    pub token_key: String,
    pub currency: String,
    pub brand_name: String,
    pub theme_color: String,
    pub checkout_script_url: String,
    pub resync_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub status_poll_ms: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3001".to_string(),
            token_key: "munToken".to_string(),
            currency: "INR".to_string(),
            brand_name: "Kumaraguru MUN 2025".to_string(),
            theme_color: "#172d9d".to_string(),
            checkout_script_url: "https://checkout.razorpay.com/v1/checkout.js".to_string(),
            resync_delay_ms: 2000,
            request_timeout_secs: 30,
            status_poll_ms: 30_000,
        }
    }
}

impl PortalConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                config.api_url = url.to_string();
            }
        }
        log::debug!("portal api at {}", config.api_url);
        config
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}
