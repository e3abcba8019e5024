use crate::errors::AppError;

/// Extracts page text from a PDF, in page order.
///
/// Pages that yield no text (scanned images) are skipped; the remaining
/// page texts are joined by a single space.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| AppError::Extraction(format!("PDF parse failed: {e}")))?;

    Ok(pages
        .iter()
        .filter(|page| !page.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" "))
}
