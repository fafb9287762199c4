/// Brand images served from the site root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrandImage {
    Logo,
    Dome,
    Favicon,
}

impl BrandImage {
    pub const ALL: [BrandImage; 3] = [BrandImage::Logo, BrandImage::Dome, BrandImage::Favicon];

    pub fn file_name(&self) -> &'static str {
        match self {
            BrandImage::Logo => "logo.png",
            BrandImage::Dome => "dome-2.png",
            BrandImage::Favicon => "favicon.ico",
        }
    }

    pub fn url(&self) -> String {
        format!("/{}", self.file_name())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "logo" => Some(BrandImage::Logo),
            "dome" => Some(BrandImage::Dome),
            "favicon" => Some(BrandImage::Favicon),
            _ => None,
        }
    }
}

/// Resolves a named brand image, falling back when the name is unknown.
pub fn image_url(name: &str, fallback: Option<&str>) -> String {
    match BrandImage::from_name(name) {
        Some(image) => image.url(),
        None => {
            log::warn!("unknown image: {}", name);
            fallback.unwrap_or_default().to_string()
        }
    }
}
