//! Resume text normalization applied before vectorization.
//!
//! The substitution order is fixed and matches the pipeline the vocabulary
//! was trained on; later steps see the output of earlier ones.

use once_cell::sync::Lazy;
use regex::Regex;

static URLS: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+\s").unwrap());
// Literal, case-sensitive, and deliberately not word-bounded: the training
// pipeline stripped retweet markers and "cc" lines with this exact pattern,
// over-matching included. Changing it would shift tokens out from under the
// trained vocabulary.
static RT_CC: Lazy<Regex> = Lazy::new(|| Regex::new(r"RT|cc").unwrap());
static HASHTAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\S+\s").unwrap());
static MENTIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\S+").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Cleans raw resume text for feature extraction. Pure and deterministic.
///
/// Strips URLs, `RT`/`cc` markers, hashtags, and mentions, blanks ASCII
/// punctuation and non-ASCII characters, then collapses whitespace runs and
/// trims the ends.
pub fn clean(text: &str) -> String {
    let text = URLS.replace_all(text, " ");
    let text = RT_CC.replace_all(&text, " ");
    let text = HASHTAGS.replace_all(&text, " ");
    let text = MENTIONS.replace_all(&text, " ");
    let text: String = text
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();
    let text: String = text
        .chars()
        .map(|c| if c.is_ascii() { c } else { ' ' })
        .collect();
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}
