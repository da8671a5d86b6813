//! End-to-end coverage of the parse pipeline: mode dispatch, budget
//! derivation, harvest gating, and collaborator failure propagation.

use std::sync::{Arc, Mutex};

use wg_pagemill::prelude::*;

/// Chunker double that records every `(text, max_size)` call it receives.
#[derive(Clone, Default)]
struct RecordingChunker {
    calls: Arc<Mutex<Vec<(String, usize)>>>,
}

impl TextChunker for RecordingChunker {
    fn split(&self, text: &str, max_size: usize) -> Result<Vec<String>, ChunkError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), max_size));
        Ok(vec![text.to_string()])
    }
}

/// Chunker double that always fails.
struct FailingChunker;

impl TextChunker for FailingChunker {
    fn split(&self, _text: &str, _max_size: usize) -> Result<Vec<String>, ChunkError> {
        Err(ChunkError::Failed("boom".to_string()))
    }
}

/// Converter double that passes markup through untouched.
struct IdentityConverter;

impl MarkupConverter for IdentityConverter {
    fn to_text(&self, markup: &str) -> Result<String, ConvertError> {
        Ok(markup.to_string())
    }
}

/// Converter double that drops every reference, standing in for renderers
/// that strip image elements.
struct StrippingConverter;

impl MarkupConverter for StrippingConverter {
    fn to_text(&self, _markup: &str) -> Result<String, ConvertError> {
        Ok("plain text with no references".to_string())
    }
}

/// Converter double that always fails.
struct FailingConverter;

impl MarkupConverter for FailingConverter {
    fn to_text(&self, _markup: &str) -> Result<String, ConvertError> {
        Err(ConvertError::Render("bad markup".to_string()))
    }
}

fn source() -> url::Url {
    "https://ex.com/page".parse().unwrap()
}

/// Route pipeline diagnostics through `RUST_LOG` when debugging a test.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn markup_mode_hands_chunker_the_flat_margin_budget() {
    let chunker = RecordingChunker::default();
    let calls = chunker.calls.clone();
    let parser = PageParser::builder()
        .chunk_size(1000)
        .chunker(chunker)
        .converter(IdentityConverter)
        .build();

    parser
        .parse(&ParseRequest::new("<p>body</p>", ParseMode::Markup))
        .unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, 750);
}

#[test]
fn plain_text_mode_hands_chunker_the_stricter_budget() {
    let chunker = RecordingChunker::default();
    let calls = chunker.calls.clone();
    let parser = PageParser::builder()
        .chunk_size(1000)
        .chunker(chunker)
        .build();

    parser
        .parse(&ParseRequest::new("already extracted", ParseMode::PlainText))
        .unwrap();

    assert_eq!(calls.lock().unwrap()[0].1, 500);
}

#[test]
fn fragments_join_in_order_before_chunking() {
    let chunker = RecordingChunker::default();
    let calls = chunker.calls.clone();
    let parser = PageParser::builder()
        .chunk_size(1000)
        .chunker(chunker)
        .build();

    let content = PageContent::from(vec!["first part".to_string(), "second part".to_string()]);
    parser
        .parse(&ParseRequest::new(content, ParseMode::PlainText))
        .unwrap();

    assert_eq!(calls.lock().unwrap()[0].0, "first part\nsecond part");
}

#[test]
fn fragments_harvest_as_one_document() {
    let parser = PageParser::builder()
        .chunk_size(1000)
        .chunker(RecordingChunker::default())
        .converter(IdentityConverter)
        .build();

    let content = PageContent::from(vec![
        r#"<a href="/first">a</a>"#.to_string(),
        r#"<img src="/second.png">"#.to_string(),
    ]);
    let request = ParseRequest::new(content, ParseMode::Markup)
        .with_source(source())
        .harvest_urls(true);

    let outcome = parser.parse(&request).unwrap();
    assert_eq!(outcome.links, vec!["https://ex.com/first"]);
    assert_eq!(outcome.images, vec!["https://ex.com/second.png"]);
}

#[test]
fn harvest_disabled_returns_empty_sequences() {
    let parser = PageParser::builder()
        .chunk_size(1000)
        .chunker(RecordingChunker::default())
        .converter(IdentityConverter)
        .build();

    let request = ParseRequest::new(
        r#"<a href="https://ex.com/a">a</a><img src="https://ex.com/b.png">"#,
        ParseMode::Markup,
    );

    let outcome = parser.parse(&request).unwrap();
    assert!(outcome.links.is_empty());
    assert!(outcome.images.is_empty());
    assert!(!outcome.chunks.is_empty());
}

#[test]
fn markup_mode_harvests_before_conversion() {
    // The converter drops every reference; harvested URLs must still come
    // from the raw markup.
    let parser = PageParser::builder()
        .chunk_size(1000)
        .chunker(RecordingChunker::default())
        .converter(StrippingConverter)
        .build();

    let request = ParseRequest::new(
        r#"<img src="/kept.png"><a href="/kept">x</a>"#,
        ParseMode::Markup,
    )
    .with_source(source())
    .harvest_urls(true);

    let outcome = parser.parse(&request).unwrap();
    assert_eq!(outcome.images, vec!["https://ex.com/kept.png"]);
    assert_eq!(outcome.links, vec!["https://ex.com/kept"]);
    assert_eq!(outcome.chunks, vec!["plain text with no references"]);
}

#[test]
fn plain_text_mode_harvests_markdown_and_absolute_urls() {
    let parser = PageParser::builder()
        .chunk_size(1000)
        .chunker(RecordingChunker::default())
        .build();

    let request = ParseRequest::new(
        "see [doc](/path/file.pdf) and ![pic](/shot.png) or https://other.org/x",
        ParseMode::PlainText,
    )
    .with_source(source())
    .harvest_urls(true);

    let outcome = parser.parse(&request).unwrap();
    assert_eq!(
        outcome.links,
        vec!["https://ex.com/path/file.pdf", "https://other.org/x"]
    );
    assert_eq!(outcome.images, vec!["https://ex.com/shot.png"]);
}

#[test]
fn chunker_failure_propagates_unmodified() {
    let parser = PageParser::builder()
        .chunk_size(1000)
        .chunker(FailingChunker)
        .build();

    let err = parser
        .parse(&ParseRequest::new("text", ParseMode::PlainText))
        .unwrap_err();

    match err {
        PagemillError::Chunk(ChunkError::Failed(message)) => assert_eq!(message, "boom"),
        other => panic!("expected chunker failure, got {other:?}"),
    }
}

#[test]
fn converter_failure_propagates_unmodified() {
    let parser = PageParser::builder()
        .chunk_size(1000)
        .chunker(RecordingChunker::default())
        .converter(FailingConverter)
        .build();

    let err = parser
        .parse(&ParseRequest::new("<p>x</p>", ParseMode::Markup))
        .unwrap_err();

    assert!(matches!(err, PagemillError::Convert(_)));
}

#[test]
fn exhausted_budget_is_a_configuration_error() {
    let parser = PageParser::builder()
        .chunk_size(100)
        .chunker(RecordingChunker::default())
        .build();

    let err = parser
        .parse(&ParseRequest::new("<p>x</p>", ParseMode::Markup))
        .unwrap_err();

    assert!(matches!(
        err,
        PagemillError::InvalidChunkBudget {
            configured: 100,
            mode: ParseMode::Markup,
            ..
        }
    ));
}

#[test]
fn defaults_parse_real_markup_end_to_end() {
    init_tracing();
    let parser = PageParser::builder().chunk_size(1000).build();

    let html = r#"
        <html><body>
            <h1>Heading</h1>
            <p>Some introductory paragraph with enough words to render.</p>
            <a href="/about">About us</a>
            <img src="/logo.svg">
            <p>Closing remarks.</p>
        </body></html>
    "#;
    let request = ParseRequest::new(html, ParseMode::Markup)
        .with_source(source())
        .harvest_urls(true);

    let outcome = parser.parse(&request).unwrap();
    assert!(!outcome.chunks.is_empty());
    for chunk in &outcome.chunks {
        assert!(chunk.chars().count() <= 750);
    }
    assert_eq!(outcome.links, vec!["https://ex.com/about"]);
    assert_eq!(outcome.images, vec!["https://ex.com/logo.svg"]);
}
