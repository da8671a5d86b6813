//! Mode dispatch and chunk-budget policy.
//!
//! [`PageParser`] coordinates one parse invocation: URL harvesting, markup
//! conversion when the input is raw HTML, and chunking under the mode's
//! derived budget.

mod budget;
mod pipeline;

pub use budget::{MARKUP_MARGIN, PLAIN_TEXT_MARGIN, PLAIN_TEXT_RATIO, chunk_budget};
pub use pipeline::{PageParser, PageParserBuilder};
