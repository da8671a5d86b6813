//! Harvest configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Extensions that mark a URL as an image by default.
const DEFAULT_IMAGE_EXTENSIONS: [&str; 8] = [
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp", ".ico",
];

/// Configuration for [`UrlHarvester`](super::UrlHarvester).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HarvestConfig {
    /// Lower-cased extensions, dot included, that classify a URL as an
    /// image once its query string and fragment are stripped.
    pub image_extensions: BTreeSet<String>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            image_extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
        }
    }
}

impl HarvestConfig {
    /// Creates a config with the default image-extension set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the image-extension set.
    #[must_use]
    pub fn image_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Adds one extension to the image set.
    #[must_use]
    pub fn add_image_extension(mut self, extension: impl Into<String>) -> Self {
        self.image_extensions.insert(extension.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_covers_common_formats() {
        let config = HarvestConfig::new();
        assert!(config.image_extensions.contains(".png"));
        assert!(config.image_extensions.contains(".webp"));
        assert!(!config.image_extensions.contains(".pdf"));
    }

    #[test]
    fn extensions_can_be_replaced_and_extended() {
        let config = HarvestConfig::new()
            .image_extensions([".png"])
            .add_image_extension(".avif");
        assert_eq!(config.image_extensions.len(), 2);
        assert!(config.image_extensions.contains(".avif"));
    }
}
