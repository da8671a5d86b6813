//! ```text
//! Raw page content ──► PageParser ─┬─► UrlHarvester ──► links / images
//! (markup or text)                 │        │
//!                                  │        ├─► structured pass (scraper)
//!                                  │        ├─► absolute-URL pass (regex)
//!                                  │        └─► markdown-target pass (regex)
//!                                  │
//!                                  ├─► MarkupConverter ──► plain text    (markup mode)
//!                                  │
//!                                  └─► chunk budget ──► TextChunker ──► chunks
//! ```
//!
//! # wg-pagemill
//!
//! Page parsing core for scraping pipelines. One invocation turns a fetched
//! page's raw content — HTML markup or already-extracted text — into
//! bounded-size text chunks plus two deduplicated, sorted URL sequences
//! (links and images) harvested by three independent extraction passes over
//! the same content.
//!
//! Everything here is synchronous and in-memory. Fetching, rendering, and
//! pipeline orchestration belong to the surrounding system, not to this
//! crate; each invocation is independent and safe to run concurrently
//! across documents.
//!
//! ## Modules
//!
//! - [`harvest`] – URL extraction, normalization, deduplication, categorization
//! - [`parse`] – mode dispatch, chunk-budget policy, outcome assembly
//! - [`chunking`] – chunker contract and the default recursive splitter
//! - [`convert`] – markup-to-text contract and the html2text backend
//! - [`schema`] – JSON Schema flattening for downstream extraction prompts
//! - [`document`] – request and outcome records
//! - [`error`] – error taxonomy

pub mod chunking;
pub mod convert;
pub mod document;
pub mod error;
pub mod harvest;
pub mod parse;
pub mod schema;

/// Re-exports for convenient access to the core types.
pub mod prelude {
    pub use crate::chunking::{ChunkError, RecursiveSplitter, TextChunker};
    pub use crate::convert::{ConvertError, Html2TextConverter, MarkupConverter};
    pub use crate::document::{PageContent, ParseMode, ParseOutcome, ParseRequest};
    pub use crate::error::PagemillError;
    pub use crate::harvest::{HarvestConfig, HarvestOutcome, UrlHarvester};
    pub use crate::parse::{PageParser, PageParserBuilder, chunk_budget};
}
