//! Three-pass URL extraction with unified normalization.

use std::borrow::Cow;
use std::collections::BTreeSet;

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use super::HarvestConfig;
use super::patterns::{ABSOLUTE_URL_RE, MARKDOWN_TARGET_RE};

/// Attributes holding image candidates on `<img>` and `<source>` elements.
/// The `*set` variants carry comma-separated candidate lists.
const MEDIA_ATTRIBUTES: [&str; 4] = ["src", "data-src", "data-srcset", "srcset"];

// ── HarvestOutcome ─────────────────────────────────────────────────────

/// Deduplicated, categorized URLs harvested from one content blob.
///
/// Both sequences are sorted ascending and share no member: a URL that
/// qualifies as an image is kept only in `images`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestOutcome {
    /// Non-image URLs.
    pub links: Vec<String>,
    /// Image URLs.
    pub images: Vec<String>,
}

impl HarvestOutcome {
    /// Returns `true` when nothing was harvested.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.images.is_empty()
    }
}

// ── UrlHarvester ───────────────────────────────────────────────────────

/// Extracts, normalizes, deduplicates, and categorizes URLs from content.
///
/// Three passes run unconditionally and feed one normalization step:
///
/// 1. a structured pass over the content parsed as HTML — `<a href>`, plus
///    `src`/`data-src`/`data-srcset`/`srcset` on `<img>` and `<source>`,
/// 2. a pattern pass for absolute http(s) URLs in plain text or markdown,
/// 3. a pattern pass for markdown link targets (`](path)`), which catches
///    references already rewritten by a markup-to-text conversion.
///
/// The harvester never fails: a structured pass that cannot run is logged
/// and skipped while the pattern passes still execute, and on total failure
/// the outcome is simply empty.
#[derive(Debug, Clone, Default)]
pub struct UrlHarvester {
    config: HarvestConfig,
}

impl UrlHarvester {
    /// Creates a harvester with the given configuration.
    pub fn new(config: HarvestConfig) -> Self {
        Self { config }
    }

    /// Creates a harvester with the default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Harvests links and images from `content`.
    ///
    /// Relative references are resolved against `source`; without a source
    /// they are discarded.
    pub fn harvest(&self, content: &str, source: Option<&Url>) -> HarvestOutcome {
        let mut links = BTreeSet::new();
        let mut images = BTreeSet::new();

        match structured_candidates(content) {
            Ok(candidates) => {
                for candidate in candidates {
                    self.categorize(&candidate, source, &mut links, &mut images);
                }
            }
            Err(err) => {
                warn!(error = %err, "structured pass failed; continuing with pattern passes");
            }
        }

        for found in ABSOLUTE_URL_RE.find_iter(content) {
            self.categorize(found.as_str(), source, &mut links, &mut images);
        }

        for captures in MARKDOWN_TARGET_RE.captures_iter(content) {
            // Titles share the parens with the target; only the first token
            // is the candidate.
            if let Some(target) = captures[1].split_whitespace().next() {
                self.categorize(target, source, &mut links, &mut images);
            }
        }

        // Membership is keyed on the resolved string, so a URL seen as both
        // kinds stays an image only. BTreeSet iteration keeps both
        // sequences sorted ascending without a separate sort.
        let links: Vec<String> = links.difference(&images).cloned().collect();
        let images: Vec<String> = images.into_iter().collect();

        debug!(
            links = links.len(),
            images = images.len(),
            "harvest complete"
        );

        HarvestOutcome { links, images }
    }

    /// Normalizes one raw candidate and files it as a link or image.
    fn categorize(
        &self,
        raw: &str,
        source: Option<&Url>,
        links: &mut BTreeSet<String>,
        images: &mut BTreeSet<String>,
    ) {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "#" || trimmed == "/" {
            return;
        }

        // Schemed candidates are stored verbatim; only relative references
        // go through base resolution.
        let resolved: Cow<'_, str> = if Url::parse(trimmed).is_ok() {
            Cow::Borrowed(trimmed)
        } else if let Some(base) = source {
            match base.join(trimmed) {
                Ok(joined) => Cow::Owned(String::from(joined)),
                Err(err) => {
                    debug!(candidate = trimmed, error = %err, "discarding unresolvable candidate");
                    return;
                }
            }
        } else {
            debug!(
                candidate = trimmed,
                "discarding relative candidate without a source"
            );
            return;
        };

        if self.is_image(&resolved) {
            images.insert(resolved.into_owned());
        } else {
            links.insert(resolved.into_owned());
        }
    }

    /// Classifies by extension on the query- and fragment-stripped path.
    /// `data:` URIs take the same rule; their payloads do not end in an
    /// image extension, so they deterministically land in links.
    fn is_image(&self, url: &str) -> bool {
        let stripped = strip_query_and_fragment(url).to_ascii_lowercase();
        self.config
            .image_extensions
            .iter()
            .any(|ext| stripped.ends_with(ext.as_str()))
    }
}

/// Collects raw candidates from the parsed markup. Malformed markup parses
/// leniently; only an invalid selector can fail here.
fn structured_candidates(content: &str) -> Result<Vec<String>, String> {
    let document = Html::parse_document(content);
    let anchors = Selector::parse("a[href]").map_err(|err| err.to_string())?;
    let media = Selector::parse("img, source").map_err(|err| err.to_string())?;

    let mut candidates = Vec::new();

    for anchor in document.select(&anchors) {
        if let Some(href) = anchor.value().attr("href") {
            candidates.push(href.to_string());
        }
    }

    for element in document.select(&media) {
        for attribute in MEDIA_ATTRIBUTES {
            let Some(raw) = element.value().attr(attribute) else {
                continue;
            };
            if attribute.ends_with("set") {
                // Comma-separated entries; the first token of each entry is
                // the candidate, the rest is a width or density hint.
                candidates.extend(
                    raw.split(',')
                        .filter_map(|entry| entry.split_whitespace().next())
                        .map(str::to_string),
                );
            } else {
                candidates.push(raw.to_string());
            }
        }
    }

    Ok(candidates)
}

/// Cuts the URL at its query string, then at its fragment. Classification
/// only; stored candidates keep their full form.
fn strip_query_and_fragment(url: &str) -> &str {
    let url = match url.find('?') {
        Some(idx) => &url[..idx],
        None => url,
    };
    match url.find('#') {
        Some(idx) => &url[..idx],
        None => url,
    }
}
