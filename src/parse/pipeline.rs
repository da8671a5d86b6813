//! Parse orchestration for one document.

use std::borrow::Cow;

use tracing::debug;

use crate::chunking::{RecursiveSplitter, TextChunker};
use crate::convert::{Html2TextConverter, MarkupConverter};
use crate::document::{ParseMode, ParseOutcome, ParseRequest};
use crate::error::PagemillError;
use crate::harvest::{HarvestConfig, HarvestOutcome, UrlHarvester};

use super::budget::chunk_budget;

// ── PageParser ─────────────────────────────────────────────────────────

/// Orchestrates one parse invocation: URL harvesting, optional markup
/// conversion, and chunking under the mode's budget.
///
/// In markup mode the harvester always runs against the raw, unconverted
/// content first — rendering to text can silently drop image references.
///
/// # Examples
///
/// ```rust
/// use wg_pagemill::prelude::*;
///
/// let parser = PageParser::builder().chunk_size(1000).build();
/// let request = ParseRequest::new(
///     r#"<p>hello</p><a href="/about">About</a>"#,
///     ParseMode::Markup,
/// )
/// .with_source("https://example.com/".parse()?)
/// .harvest_urls(true);
///
/// let outcome = parser.parse(&request)?;
/// assert_eq!(outcome.links, vec!["https://example.com/about"]);
/// assert!(!outcome.chunks.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PageParser {
    chunker: Box<dyn TextChunker>,
    converter: Box<dyn MarkupConverter>,
    harvester: UrlHarvester,
    chunk_size: usize,
}

impl PageParser {
    /// Creates a new builder for constructing a `PageParser`.
    pub fn builder() -> PageParserBuilder {
        PageParserBuilder::default()
    }

    /// Runs the full parse for one request.
    ///
    /// The budget is validated up front, so a misconfigured chunk size
    /// fails before any extraction work. Chunker and converter failures
    /// are propagated unmodified.
    pub fn parse(&self, request: &ParseRequest) -> Result<ParseOutcome, PagemillError> {
        let budget = chunk_budget(request.mode, self.chunk_size)?;
        let content = request.content.joined();

        let harvest = if request.harvest_urls {
            self.harvester.harvest(&content, request.source.as_ref())
        } else {
            HarvestOutcome::default()
        };

        // Markup is rendered to text only after harvesting, so every raw
        // <img>/<a> reference was still visible to the harvester.
        let chunk_input: Cow<'_, str> = match request.mode {
            ParseMode::Markup => Cow::Owned(self.converter.to_text(&content)?),
            ParseMode::PlainText => content,
        };

        let chunks = self.chunker.split(&chunk_input, budget)?;
        debug!(mode = %request.mode, chunks = chunks.len(), "parse complete");

        Ok(ParseOutcome {
            chunks,
            links: harvest.links,
            images: harvest.images,
        })
    }
}

// ── PageParserBuilder ──────────────────────────────────────────────────

/// Builder for [`PageParser`] instances.
///
/// The chunker, converter, and harvest configuration default to
/// [`RecursiveSplitter`], [`Html2TextConverter`], and
/// [`HarvestConfig::default`]; the chunk size has no default.
#[derive(Default)]
pub struct PageParserBuilder {
    chunker: Option<Box<dyn TextChunker>>,
    converter: Option<Box<dyn MarkupConverter>>,
    harvest_config: Option<HarvestConfig>,
    chunk_size: Option<usize>,
}

impl PageParserBuilder {
    /// Sets the configured chunk size the mode budgets derive from.
    ///
    /// This is required before calling [`build()`](Self::build).
    #[must_use]
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    /// Replaces the default chunker.
    #[must_use]
    pub fn chunker(mut self, chunker: impl TextChunker + 'static) -> Self {
        self.chunker = Some(Box::new(chunker));
        self
    }

    /// Replaces the default markup converter.
    #[must_use]
    pub fn converter(mut self, converter: impl MarkupConverter + 'static) -> Self {
        self.converter = Some(Box::new(converter));
        self
    }

    /// Sets the harvest configuration.
    #[must_use]
    pub fn harvest_config(mut self, config: HarvestConfig) -> Self {
        self.harvest_config = Some(config);
        self
    }

    /// Builds the [`PageParser`].
    ///
    /// # Panics
    ///
    /// Panics if [`chunk_size()`](Self::chunk_size) was not called.
    pub fn build(self) -> PageParser {
        PageParser {
            chunker: self
                .chunker
                .unwrap_or_else(|| Box::new(RecursiveSplitter::new())),
            converter: self
                .converter
                .unwrap_or_else(|| Box::new(Html2TextConverter::default())),
            harvester: UrlHarvester::new(self.harvest_config.unwrap_or_default()),
            chunk_size: self
                .chunk_size
                .expect("PageParserBuilder requires a chunk size"),
        }
    }

    /// Builds the [`PageParser`], returning `None` if no chunk size was set.
    pub fn try_build(self) -> Option<PageParser> {
        Some(PageParser {
            chunker: self
                .chunker
                .unwrap_or_else(|| Box::new(RecursiveSplitter::new())),
            converter: self
                .converter
                .unwrap_or_else(|| Box::new(Html2TextConverter::default())),
            harvester: UrlHarvester::new(self.harvest_config.unwrap_or_default()),
            chunk_size: self.chunk_size?,
        })
    }
}
