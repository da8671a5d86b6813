//! Chunk-budget policy.
//!
//! Downstream consumers append fixed-overhead content to every chunk before
//! use, so the size handed to the chunker is the configured size minus a
//! mode-dependent safety margin. Markup input pays a flat margin; already
//! extracted text has no conversion step to absorb overhead elsewhere and
//! takes the stricter of a flat and a proportional margin.

use tracing::debug;

use crate::document::ParseMode;
use crate::error::PagemillError;

/// Flat margin subtracted in markup mode.
pub const MARKUP_MARGIN: usize = 250;

/// Flat margin subtracted in plain-text mode.
pub const PLAIN_TEXT_MARGIN: usize = 500;

/// Proportional cap applied in plain-text mode.
pub const PLAIN_TEXT_RATIO: f64 = 0.8;

/// Derives the maximum chunk size for `mode` from the configured size.
///
/// A non-positive result is a caller configuration error, surfaced as
/// [`PagemillError::InvalidChunkBudget`] and never silently repaired.
pub fn chunk_budget(mode: ParseMode, configured_size: usize) -> Result<usize, PagemillError> {
    let derived = match mode {
        ParseMode::Markup => configured_size as i64 - MARKUP_MARGIN as i64,
        ParseMode::PlainText => {
            let flat = configured_size as i64 - PLAIN_TEXT_MARGIN as i64;
            let proportional = (configured_size as f64 * PLAIN_TEXT_RATIO) as i64;
            flat.min(proportional)
        }
    };

    if derived <= 0 {
        return Err(PagemillError::InvalidChunkBudget {
            configured: configured_size,
            derived,
            mode,
        });
    }

    debug!(%mode, configured_size, budget = derived, "derived chunk budget");
    Ok(derived as usize)
}
