//! Text extraction from uploaded resume files.
//!
//! Dispatch is a closed mapping over the accepted formats: the file name's
//! suffix selects a [`DocumentKind`], and anything else is an
//! `UnsupportedFormat` error rather than a default branch.

pub mod docx;
pub mod pdf;
pub mod txt;

use crate::errors::AppError;

/// The accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    /// Matches the suffix after the final `.`, case-insensitively.
    /// A file name without a dot is treated as its own extension, so the
    /// error names what the user actually sent.
    pub fn from_file_name(name: &str) -> Result<Self, AppError> {
        let ext = name
            .rsplit('.')
            .next()
            .unwrap_or(name)
            .to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            "txt" => Ok(DocumentKind::Txt),
            _ => Err(AppError::UnsupportedFormat(ext)),
        }
    }
}

/// Produces the raw text of an uploaded file.
///
/// No caching and no side effects beyond reading `bytes`; parser failures
/// surface as [`AppError::Extraction`].
pub fn extract(file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    match DocumentKind::from_file_name(file_name)? {
        DocumentKind::Pdf => pdf::extract_text(bytes),
        DocumentKind::Docx => docx::extract_text(bytes),
        DocumentKind::Txt => Ok(txt::extract_text(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extension_is_recognized() {
        assert_eq!(
            DocumentKind::from_file_name("resume.pdf").unwrap(),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(
            DocumentKind::from_file_name("Resume.DOCX").unwrap(),
            DocumentKind::Docx
        );
        assert_eq!(
            DocumentKind::from_file_name("notes.TXT").unwrap(),
            DocumentKind::Txt
        );
    }

    #[test]
    fn test_only_final_suffix_counts() {
        assert_eq!(
            DocumentKind::from_file_name("resume.backup.pdf").unwrap(),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_unsupported_extension_names_the_extension() {
        let err = DocumentKind::from_file_name("data.csv").unwrap_err();
        match err {
            AppError::UnsupportedFormat(ext) => assert_eq!(ext, "csv"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_rtf_is_rejected() {
        assert!(matches!(
            DocumentKind::from_file_name("resume.rtf"),
            Err(AppError::UnsupportedFormat(ext)) if ext == "rtf"
        ));
    }

    #[test]
    fn test_extract_dispatches_txt() {
        let text = extract("resume.txt", "hello world".as_bytes()).unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_extract_rejects_unsupported_before_parsing() {
        let err = extract("resume.csv", b"a,b,c").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_malformed_pdf_is_an_extraction_error() {
        let err = extract("resume.pdf", b"not a pdf at all").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_malformed_docx_is_an_extraction_error() {
        let err = extract("resume.docx", b"not a zip archive").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
