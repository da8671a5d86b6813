//! Input and output records for a single parse invocation.
//!
//! Everything here is created fresh per invocation and carries no state
//! beyond the call; the surrounding pipeline owns fetching and persistence.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

// ── PageContent ────────────────────────────────────────────────────────

/// Raw page content handed to the parser.
///
/// Fetchers sometimes deliver a page as an ordered list of fragments (one
/// per frame or streamed segment). Fragments are joined with `\n` before
/// any harvesting or conversion so every pass sees one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageContent {
    /// A single content blob.
    Single(String),
    /// Ordered content fragments.
    Fragments(Vec<String>),
}

impl PageContent {
    /// Returns the content as one contiguous string.
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            Self::Single(content) => Cow::Borrowed(content),
            Self::Fragments(fragments) => Cow::Owned(fragments.join("\n")),
        }
    }
}

impl From<String> for PageContent {
    fn from(content: String) -> Self {
        Self::Single(content)
    }
}

impl From<&str> for PageContent {
    fn from(content: &str) -> Self {
        Self::Single(content.to_string())
    }
}

impl From<Vec<String>> for PageContent {
    fn from(fragments: Vec<String>) -> Self {
        Self::Fragments(fragments)
    }
}

// ── ParseMode ──────────────────────────────────────────────────────────

/// Whether the input is raw markup or already-extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Input is HTML markup. URLs are harvested from the untouched markup
    /// before it is rendered to plain text for chunking.
    Markup,
    /// Input is already plain text or partially converted markdown; it is
    /// chunked as-is under a tighter budget.
    PlainText,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup => write!(f, "markup"),
            Self::PlainText => write!(f, "plain_text"),
        }
    }
}

// ── ParseRequest ───────────────────────────────────────────────────────

/// One parse invocation.
#[derive(Debug, Clone)]
pub struct ParseRequest {
    /// Content to parse.
    pub content: PageContent,
    /// Base URL for resolving relative references.
    pub source: Option<Url>,
    /// Input mode.
    pub mode: ParseMode,
    /// Whether links and images are harvested. Off by default.
    pub harvest_urls: bool,
}

impl ParseRequest {
    /// Creates a request with no source URL and harvesting disabled.
    pub fn new(content: impl Into<PageContent>, mode: ParseMode) -> Self {
        Self {
            content: content.into(),
            source: None,
            mode,
            harvest_urls: false,
        }
    }

    /// Sets the base URL used to resolve relative references.
    #[must_use]
    pub fn with_source(mut self, source: Url) -> Self {
        self.source = Some(source);
        self
    }

    /// Enables or disables URL harvesting.
    #[must_use]
    pub fn harvest_urls(mut self, enabled: bool) -> Self {
        self.harvest_urls = enabled;
        self
    }
}

// ── ParseOutcome ───────────────────────────────────────────────────────

/// Final output of a parse invocation.
///
/// `links` and `images` are always present: when harvesting is disabled
/// they are empty, never absent. Both are sorted ascending, duplicate-free,
/// and disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Ordered, bounded-size text chunks.
    pub chunks: Vec<String>,
    /// Non-image URLs.
    pub links: Vec<String>,
    /// Image URLs.
    pub images: Vec<String>,
}
