#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    Registrants,
    Single,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    Gmail,
    Outlook,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendMailRequest {
    pub recipient_type: RecipientType,
    pub recipients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_email: Option<String>,
    pub email_provider: EmailProvider,
    pub subject: String,
    pub message: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct TestMailRequest {
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default)]
pub struct RecipientsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committee: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MailRecipient {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MailerStats {
    #[serde(default)]
    pub total_sent: u64,
    #[serde(default)]
    pub total_registrants: u64,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendMailResponse {
    #[serde(default)]
    pub total_sent: Option<u64>,
}
