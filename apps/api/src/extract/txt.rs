/// Decodes plain-text bytes as UTF-8, falling back to Latin-1.
///
/// The fallback is total: every byte value maps to U+0000..U+00FF, so a
/// `.txt` upload always decodes to something rather than erroring.
pub fn extract_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
