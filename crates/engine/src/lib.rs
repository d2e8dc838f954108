//! Card image resolution and decoding.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cards_core::CardRecord;
use image::DynamicImage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("card has no image")]
    Missing,
    #[error("remote image not supported: {0}")]
    Remote(String),
    #[error("read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
    #[error("decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
}

/// Loads card images from a static asset root.
///
/// Each card is attempted at most once; both successes and failures are
/// cached by card id so a broken image never affects another card.
#[derive(Debug)]
pub struct CardImages {
    root: PathBuf,
    cache: RefCell<HashMap<String, Result<Arc<DynamicImage>, ImageError>>>,
}

impl CardImages {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn image(&self, card: &CardRecord) -> Result<Arc<DynamicImage>, ImageError> {
        if let Some(cached) = self.cache.borrow().get(&card.id) {
            return cached.clone();
        }

        let loaded = self.load(card).map(Arc::new);
        if let Err(err) = &loaded {
            tracing::debug!(card = %card.id, error = %err, "card image unavailable");
        }
        self.cache
            .borrow_mut()
            .insert(card.id.clone(), loaded.clone());
        loaded
    }

    pub fn is_cached(&self, card_id: &str) -> bool {
        self.cache.borrow().contains_key(card_id)
    }

    fn load(&self, card: &CardRecord) -> Result<DynamicImage, ImageError> {
        let url = card
            .image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ImageError::Missing)?;
        let path = resolve_asset_path(&self.root, url)?;

        let reader = image::ImageReader::open(&path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| ImageError::Io {
                path: path.clone(),
                message: err.to_string(),
            })?;
        reader.decode().map_err(|err| ImageError::Decode {
            path,
            message: err.to_string(),
        })
    }
}

/// Maps an authored image url to a file under `root`.
///
/// Absolute web paths (`/images/a.jpg`) are taken relative to the root.
/// Parent-directory components are refused so urls stay inside the root.
pub fn resolve_asset_path(root: &Path, url: &str) -> Result<PathBuf, ImageError> {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//") {
        return Err(ImageError::Remote(url.to_string()));
    }

    let relative = url.trim_start_matches('/');
    let mut path = root.to_path_buf();
    for part in relative.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                return Err(ImageError::Io {
                    path: root.join(relative),
                    message: "path escapes asset root".to_string(),
                });
            }
            part => path.push(part),
        }
    }
    Ok(path)
}
