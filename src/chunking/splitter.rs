//! Default greedy splitter.

use unicode_segmentation::UnicodeSegmentation;

use super::{ChunkError, TextChunker};

/// Greedy splitter that packs whole paragraphs, falling back to sentence,
/// word, and finally character boundaries for pieces that exceed the limit
/// on their own. Chunks carry no overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveSplitter;

impl RecursiveSplitter {
    /// Creates a new splitter.
    pub fn new() -> Self {
        Self
    }
}

impl TextChunker for RecursiveSplitter {
    fn split(&self, text: &str, max_size: usize) -> Result<Vec<String>, ChunkError> {
        if max_size == 0 {
            return Err(ChunkError::InvalidMaxSize);
        }

        let mut chunks = Vec::new();
        let mut current = String::new();

        for paragraph in text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
            if char_len(paragraph) > max_size {
                flush(&mut chunks, &mut current);
                split_oversized(paragraph, max_size, &mut chunks, &mut current);
                continue;
            }
            append_or_flush(paragraph, "\n\n", max_size, &mut chunks, &mut current);
        }

        flush(&mut chunks, &mut current);
        Ok(chunks)
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Appends `piece` to the current chunk, starting a fresh chunk when it
/// would not fit. Callers guarantee `piece` itself fits within `max_size`.
fn append_or_flush(
    piece: &str,
    joiner: &str,
    max_size: usize,
    chunks: &mut Vec<String>,
    current: &mut String,
) {
    let joiner_len = if current.is_empty() {
        0
    } else {
        char_len(joiner)
    };
    if char_len(current) + joiner_len + char_len(piece) > max_size {
        flush(chunks, current);
    }
    if !current.is_empty() {
        current.push_str(joiner);
    }
    current.push_str(piece);
}

/// Sentence pass for a paragraph that exceeds the limit on its own; single
/// sentences that still exceed it drop to words, then raw characters.
fn split_oversized(
    paragraph: &str,
    max_size: usize,
    chunks: &mut Vec<String>,
    current: &mut String,
) {
    for sentence in paragraph.split_sentence_bounds() {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        if char_len(sentence) <= max_size {
            append_or_flush(sentence, " ", max_size, chunks, current);
            continue;
        }
        for word in sentence.split_whitespace() {
            if char_len(word) <= max_size {
                append_or_flush(word, " ", max_size, chunks, current);
            } else {
                flush(chunks, current);
                hard_split(word, max_size, chunks);
            }
        }
    }
}

/// Character-boundary split of a single token longer than the limit.
fn hard_split(token: &str, max_size: usize, chunks: &mut Vec<String>) {
    let chars: Vec<char> = token.chars().collect();
    for window in chars.chunks(max_size) {
        chunks.push(window.iter().collect());
    }
}

fn flush(chunks: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        chunks.push(std::mem::take(current));
    }
}
