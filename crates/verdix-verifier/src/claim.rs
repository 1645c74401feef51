//! Claim extraction

use regex::Regex;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http\S+").expect("valid regex"));
static PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

const MIN_CLAIM_WORDS: usize = 6;
const MAX_CLAIM_WORDS: usize = 18;
const FALLBACK_CHARS: usize = 100;

/// Reduce a text to one search-worthy claim
///
/// URLs and punctuation are removed first, then the first sentence of
/// 6 to 18 words wins. Without one, the first 100 characters of the
/// cleaned text are used.
///
/// # Examples
///
/// ```
/// use verdix_verifier::extract_claim;
///
/// let claim = extract_claim("Officials confirmed the bridge will open next week! https://x.com/a");
/// assert_eq!(claim, "Officials confirmed the bridge will open next week");
/// ```
pub fn extract_claim(text: &str) -> String {
    let without_urls = URL_RE.replace_all(text, "");
    let cleaned = PUNCT_RE.replace_all(&without_urls, "");

    cleaned
        .split(['.', '!', '?'])
        .map(str::trim)
        .find(|sentence| {
            let words = sentence.split_whitespace().count();
            (MIN_CLAIM_WORDS..=MAX_CLAIM_WORDS).contains(&words)
        })
        .map(str::to_string)
        .unwrap_or_else(|| cleaned.chars().take(FALLBACK_CHARS).collect())
}
