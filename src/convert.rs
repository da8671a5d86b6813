//! Markup-to-text conversion collaborator.
//!
//! URL harvesting always runs against the untouched markup before this
//! conversion, so renderers are free to drop or rewrite references without
//! losing them for the harvest.

use thiserror::Error;

/// Errors raised by [`MarkupConverter`] implementations.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The renderer rejected the markup.
    #[error("markup conversion failed: {0}")]
    Render(String),
}

/// Renders raw markup to plain text for chunking.
pub trait MarkupConverter: Send + Sync {
    /// Converts `markup` to plain text.
    fn to_text(&self, markup: &str) -> Result<String, ConvertError>;
}

/// [`MarkupConverter`] backed by the `html2text` renderer.
#[derive(Debug, Clone, Copy)]
pub struct Html2TextConverter {
    width: usize,
}

impl Html2TextConverter {
    /// Creates a converter that wraps rendered lines at `width` columns.
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Default for Html2TextConverter {
    fn default() -> Self {
        Self::new(100)
    }
}

impl MarkupConverter for Html2TextConverter {
    fn to_text(&self, markup: &str) -> Result<String, ConvertError> {
        Ok(html2text::from_read(markup.as_bytes(), self.width))
    }
}
