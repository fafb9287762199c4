use std::sync::Arc;

use futures::future::try_join;
use kmun_core::{
    messages::GalleryItemRequest,
    types::{GalleryItem, MediaType},
};

use crate::{
    api::GalleryApi,
    error::ClientError,
    notify::{Toast, Toaster},
};

use super::{contains_ci, Filter, REQUIRED_FIELDS};

pub const VIDEO_URL_REQUIRED: &str = "Video URL is required for video type";

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryForm {
    pub title: String,
    pub kind: MediaType,
    pub image_url: String,
    pub video_url: String,
    pub category: String,
}

impl Default for GalleryForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: MediaType::Image,
            image_url: String::new(),
            video_url: String::new(),
            category: String::new(),
        }
    }
}

impl GalleryForm {
    fn to_request(&self) -> Result<GalleryItemRequest, ClientError> {
        let title = self.title.trim();
        let image_url = self.image_url.trim();
        let category = self.category.trim();
        if title.is_empty() || image_url.is_empty() || category.is_empty() {
            return Err(ClientError::validation(REQUIRED_FIELDS));
        }
        let video_url = self.video_url.trim();
        if self.kind == MediaType::Video && video_url.is_empty() {
            return Err(ClientError::validation(VIDEO_URL_REQUIRED));
        }
        Ok(GalleryItemRequest {
            title: title.to_string(),
            kind: self.kind,
            image_url: image_url.to_string(),
            video_url: (!video_url.is_empty()).then(|| video_url.to_string()),
            category: category.to_string(),
        })
    }
}

pub struct GalleryDashboard<A: GalleryApi> {
    api: Arc<A>,
    toaster: Arc<dyn Toaster>,
    items: Vec<GalleryItem>,
    categories: Vec<String>,
    pub search: String,
    pub category: Filter<String>,
    pub form: GalleryForm,
    editing: Option<String>,
}

impl<A: GalleryApi> GalleryDashboard<A> {
    pub fn new(api: Arc<A>, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            api,
            toaster,
            items: Vec::new(),
            categories: Vec::new(),
            search: String::new(),
            category: Filter::All,
            form: GalleryForm::default(),
            editing: None,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Items and categories are fetched together and land together.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let both = try_join(self.api.list_gallery(None), self.api.gallery_categories()).await;
        match both {
            Ok((items, categories)) => {
                self.items = items;
                self.categories = categories;
                Ok(())
            }
            Err(e) => {
                log::error!("failed to load gallery: {}", e);
                self.toaster.toast(Toast::error("Failed to load gallery data"));
                Err(e.into())
            }
        }
    }

    pub fn visible(&self) -> Vec<&GalleryItem> {
        self.items
            .iter()
            .filter(|i| contains_ci(&i.title, &self.search) && self.category.matches(&i.category))
            .collect()
    }

    pub fn start_edit(&mut self, id: &str) {
        if let Some(item) = self.items.iter().find(|i| i.id == id) {
            self.form = GalleryForm {
                title: item.title.clone(),
                kind: item.kind,
                image_url: item.image_url.clone(),
                video_url: item.video_url.clone().unwrap_or_default(),
                category: item.category.clone(),
            };
            self.editing = Some(id.to_string());
        }
    }

    pub async fn submit(&mut self) -> Result<(), ClientError> {
        let req = match self.form.to_request() {
            Ok(req) => req,
            Err(e) => {
                self.toaster.toast(Toast::error(e.to_string()));
                return Err(e);
            }
        };
        let updating = self.editing.is_some();
        let result = match &self.editing {
            Some(id) => self.api.update_gallery_item(id, req).await,
            None => self.api.create_gallery_item(req).await,
        };
        match result {
            Ok(_) => {
                self.toaster.toast(Toast::success(if updating {
                    "Gallery item updated successfully"
                } else {
                    "Gallery item created successfully"
                }));
                self.form = GalleryForm::default();
                self.editing = None;
                self.load().await
            }
            Err(e) => {
                self.toaster.toast(Toast::error(if updating {
                    "Failed to update gallery item"
                } else {
                    "Failed to create gallery item"
                }));
                Err(e.into())
            }
        }
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        if let Err(e) = self.api.delete_gallery_item(id).await {
            self.toaster.toast(Toast::error("Failed to delete gallery item"));
            return Err(e.into());
        }
        self.toaster
            .toast(Toast::success("Gallery item deleted successfully"));
        self.load().await
    }
}

/// The public gallery page: the backend filters by category.
pub struct PublicGallery<A: GalleryApi> {
    api: Arc<A>,
    items: Vec<GalleryItem>,
    categories: Vec<String>,
    selected: Filter<String>,
}

impl<A: GalleryApi> PublicGallery<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            items: Vec::new(),
            categories: Vec::new(),
            selected: Filter::All,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub async fn load(&mut self) -> Result<(), ClientError> {
        let (items, categories) =
            try_join(self.api.list_gallery(None), self.api.gallery_categories()).await?;
        self.items = items;
        self.categories = categories;
        Ok(())
    }

    pub async fn choose(&mut self, choice: &str) -> Result<(), ClientError> {
        self.selected = Filter::from_choice(choice);
        let category = match &self.selected {
            Filter::All => None,
            Filter::Only(c) => Some(c.as_str()),
        };
        self.items = self.api.list_gallery(category).await?;
        Ok(())
    }
}
