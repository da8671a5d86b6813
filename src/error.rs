//! Error taxonomy for the parsing core.

use thiserror::Error;

use crate::chunking::ChunkError;
use crate::convert::ConvertError;
use crate::document::ParseMode;

/// Errors surfaced by [`PageParser`](crate::parse::PageParser).
///
/// Collaborator failures pass through unmodified; only the chunk-budget
/// check originates here.
#[derive(Debug, Error)]
pub enum PagemillError {
    /// The configured chunk size minus the mode's safety margin left no
    /// room for content. This is a caller configuration error and is never
    /// silently repaired.
    #[error(
        "configured chunk size {configured} leaves a non-positive budget ({derived}) in {mode} mode"
    )]
    InvalidChunkBudget {
        /// Caller-supplied chunk size.
        configured: usize,
        /// Budget left after subtracting the mode's margin.
        derived: i64,
        /// Mode the budget was derived for.
        mode: ParseMode,
    },

    /// The chunking collaborator failed.
    #[error(transparent)]
    Chunk(#[from] ChunkError),

    /// The markup conversion collaborator failed.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}
