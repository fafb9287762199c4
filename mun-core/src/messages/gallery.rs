use super::super::types::MediaType;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemRequest {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaType,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub category: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default)]
pub struct GalleryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
