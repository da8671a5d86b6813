//! Chunking contract and the default splitter.
//!
//! The dispatcher depends only on the [`TextChunker`] size contract: every
//! returned chunk stays within the requested maximum and the sequence, in
//! order, covers the input. [`RecursiveSplitter`] is the bundled
//! implementation; callers with their own splitting strategy plug in at
//! this trait.

mod splitter;

pub use splitter::RecursiveSplitter;

use thiserror::Error;

/// Errors raised by [`TextChunker`] implementations.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// The requested maximum chunk size was zero.
    #[error("maximum chunk size must be at least 1")]
    InvalidMaxSize,

    /// Implementation-specific failure.
    #[error("chunking failed: {0}")]
    Failed(String),
}

/// Splits text into an ordered sequence of bounded-size chunks.
///
/// Sizes are measured in Unicode scalar values. The splitting strategy is
/// up to the implementation.
pub trait TextChunker: Send + Sync {
    /// Splits `text` into chunks of at most `max_size` characters each.
    fn split(&self, text: &str, max_size: usize) -> Result<Vec<String>, ChunkError>;
}
