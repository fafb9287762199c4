use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{assets::BrandImage, error::ClientError};

/// Host config files that must sit next to the built site.
pub const HOST_FILES: [&str; 2] = ["_headers", "_redirects"];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DeployReport {
    pub copied: Vec<String>,
    /// Brand images that already were in `dist/`.
    pub present: Vec<String>,
    /// Brand images missing from `public/`.
    pub missing: Vec<String>,
}

fn copy(from: &Path, to: &Path) -> Result<(), ClientError> {
    fs::copy(from, to).map_err(|e| ClientError::io(to, e))?;
    Ok(())
}

/// Readies `<root>/dist` for static hosting: host config files are copied over,
/// brand images are copied from `public/` when the build left them out.
pub fn prepare_static_deploy(root: &Path) -> Result<DeployReport, ClientError> {
    let dist: PathBuf = root.join("dist");
    let public = root.join("public");
    if !dist.is_dir() {
        return Err(ClientError::io(
            &dist,
            std::io::Error::new(std::io::ErrorKind::NotFound, "build output not found"),
        ));
    }

    let mut report = DeployReport::default();
    for name in HOST_FILES {
        let source = root.join(name);
        if source.exists() {
            copy(&source, &dist.join(name))?;
            log::info!("copied {} to dist/", name);
            report.copied.push(name.to_string());
        }
    }

    for image in BrandImage::ALL {
        let name = image.file_name();
        let source = public.join(name);
        let dest = dist.join(name);
        if !source.exists() {
            log::warn!("{} not found in public/", name);
            report.missing.push(name.to_string());
        } else if dest.exists() {
            report.present.push(name.to_string());
        } else {
            copy(&source, &dest)?;
            log::info!("copied {} to dist/", name);
            report.copied.push(name.to_string());
        }
    }

    Ok(report)
}
