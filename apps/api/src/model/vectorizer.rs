use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Word tokens of two or more word characters, the pattern the vocabulary
/// was built with. Single-character tokens never enter the vocabulary.
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Fitted TF-IDF vectorizer: a trained vocabulary (term -> column index)
/// and one inverse-document-frequency weight per column.
///
/// Only the inference side lives here; fitting happens in the external
/// training pipeline that exports `tfidf.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Self {
        Self { vocabulary, idf }
    }

    /// Dimensionality of the output rows, fixed at training time.
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// All vocabulary indices must address a column; checked once at load.
    pub(super) fn check_consistency(&self) -> Result<(), String> {
        for (term, &idx) in &self.vocabulary {
            if idx >= self.idf.len() {
                return Err(format!(
                    "vocabulary term '{term}' has index {idx}, but there are only {} idf weights",
                    self.idf.len()
                ));
            }
        }
        Ok(())
    }

    /// Maps a cleaned document to a single L2-normalized TF-IDF row.
    ///
    /// Tokens outside the trained vocabulary are silently ignored.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let lowered = document.to_lowercase();
        let mut row = vec![0.0; self.idf.len()];

        for token in TOKEN.find_iter(&lowered) {
            if let Some(&idx) = self.vocabulary.get(token.as_str()) {
                row[idx] += 1.0;
            }
        }

        for (value, idf) in row.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut row {
                *value /= norm;
            }
        }

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_vectorizer() -> TfidfVectorizer {
        let vocabulary = HashMap::from([
            ("java".to_string(), 0),
            ("python".to_string(), 1),
            ("spring".to_string(), 2),
        ]);
        TfidfVectorizer::new(vocabulary, vec![1.0, 2.0, 1.5])
    }

    #[test]
    fn test_row_length_matches_vocabulary() {
        let row = make_vectorizer().transform("java java spring");
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_unknown_tokens_are_ignored() {
        let v = make_vectorizer();
        assert_eq!(v.transform("cobol fortran"), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_tokenization_is_lowercased() {
        let v = make_vectorizer();
        let upper = v.transform("JAVA Spring");
        let lower = v.transform("java spring");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_single_character_tokens_are_dropped() {
        let v = make_vectorizer();
        // "j" is below the two-character token floor
        assert_eq!(v.transform("j a v a"), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_output_is_l2_normalized() {
        let row = make_vectorizer().transform("java python spring java");
        let norm: f64 = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_document_gives_zero_row() {
        let row = make_vectorizer().transform("");
        assert!(row.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_idf_reweights_counts() {
        let v = make_vectorizer();
        // One occurrence each; python carries twice the idf weight of java.
        let row = v.transform("java python");
        assert!(row[1] > row[0]);
    }

    #[test]
    fn test_consistency_check_catches_out_of_range_index() {
        let vocabulary = HashMap::from([("java".to_string(), 5)]);
        let v = TfidfVectorizer::new(vocabulary, vec![1.0]);
        assert!(v.check_consistency().is_err());
    }
}
