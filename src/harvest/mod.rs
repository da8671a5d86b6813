//! URL harvesting: extraction, normalization, deduplication, categorization.
//!
//! [`UrlHarvester`] merges the findings of three extraction passes over one
//! content blob — a structured pass over the parsed markup, a pattern pass
//! for absolute http(s) URLs, and a pattern pass for markdown link targets
//! — through a single normalization step, then emits two sorted, disjoint
//! sequences: links and images.

mod config;
mod harvester;
pub mod patterns;

pub use config::HarvestConfig;
pub use harvester::{HarvestOutcome, UrlHarvester};
pub use patterns::{clean_urls, looks_like_url};
