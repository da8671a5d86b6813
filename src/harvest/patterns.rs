//! Compiled pattern constants and URL cleanup helpers.

use std::sync::LazyLock;

use regex::Regex;

/// Absolute http(s) URLs in markdown or plain text. The scheme match is
/// case-insensitive and the URL runs until whitespace or one of `)"'<>`.
pub(crate) static ABSOLUTE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)https?://[^\s)"'<>]+"#).unwrap());

/// Markdown link and image targets: the text between `](` and the next `)`.
pub(crate) static MARKDOWN_TARGET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\(([^)]+)\)").unwrap());

/// Liberal shape check for something that could be a URL: optional scheme,
/// optional `www.`, a dotted host, then any run of URL characters.
static URL_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*$",
    )
    .unwrap()
});

/// Two-character bracket runs left behind when markdown link syntax is cut
/// mid-way. Everything up to and including the run is dropped.
const MARKDOWN_ARTIFACTS: [&str; 7] = ["](", "[(", "[)", "])", ")[", "(]", ")]"];

/// Returns `true` when `candidate` already matches the liberal URL shape.
pub fn looks_like_url(candidate: &str) -> bool {
    URL_SHAPE_RE.is_match(candidate)
}

/// Salvages URL candidates mangled by markdown conversion.
///
/// Candidates failing [`looks_like_url`] are stripped of leading markdown
/// artifacts; every candidate then loses trailing `)`, `.`, and `-`
/// characters, and candidates left empty are dropped.
pub fn clean_urls<I, S>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    urls.into_iter()
        .filter_map(|url| {
            let mut candidate = url.as_ref();
            if !looks_like_url(candidate) {
                for artifact in MARKDOWN_ARTIFACTS {
                    if let Some(idx) = candidate.find(artifact) {
                        candidate = &candidate[idx + artifact.len()..];
                    }
                }
            }
            let candidate = candidate.trim_end_matches([')', '.', '-']);
            (!candidate.is_empty()).then(|| candidate.to_string())
        })
        .collect()
}
