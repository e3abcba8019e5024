//! Pre-trained model artifacts: a TF-IDF vectorizer, a linear classifier,
//! and a label encoder, deserialized once at startup and shared read-only
//! by every request.
//!
//! The artifacts are exported by an external training pipeline; this
//! module only loads and invokes them. There is no retry and no reload
//! path — a missing or corrupt file is a deployment error and the process
//! refuses to start.

mod classifier;
mod encoder;
mod vectorizer;

pub use classifier::LinearClassifier;
pub use encoder::LabelEncoder;
pub use vectorizer::TfidfVectorizer;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;

pub const VECTORIZER_FILE: &str = "tfidf.json";
pub const CLASSIFIER_FILE: &str = "classifier.json";
pub const ENCODER_FILE: &str = "encoder.json";

#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub vectorizer: TfidfVectorizer,
    pub classifier: LinearClassifier,
    pub encoder: LabelEncoder,
}

impl ModelBundle {
    /// Deserializes the three artifacts from `dir` and cross-checks their
    /// dimensions. Every failure mode names the expected directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let bundle = Self {
            vectorizer: read_artifact(dir, VECTORIZER_FILE)?,
            classifier: read_artifact(dir, CLASSIFIER_FILE)?,
            encoder: read_artifact(dir, ENCODER_FILE)?,
        };
        bundle
            .validate()
            .with_context(|| format!("inconsistent model artifacts in '{}'", dir.display()))?;
        Ok(bundle)
    }

    fn validate(&self) -> Result<()> {
        if let Err(msg) = self.vectorizer.check_consistency() {
            bail!("vectorizer: {msg}");
        }
        if let Err(msg) = self.classifier.check_consistency() {
            bail!("classifier: {msg}");
        }
        if self.classifier.n_features() != self.vectorizer.n_features() {
            bail!(
                "classifier expects {} features but the vectorizer produces {}",
                self.classifier.n_features(),
                self.vectorizer.n_features()
            );
        }
        if self.encoder.len() != self.classifier.n_classes() {
            bail!(
                "encoder knows {} categories but the classifier has {} classes",
                self.encoder.len(),
                self.classifier.n_classes()
            );
        }
        Ok(())
    }
}

fn read_artifact<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<T> {
    let path = dir.join(file_name);
    let file = File::open(&path).with_context(|| {
        format!(
            "missing model artifact '{}' (expected model directory: '{}')",
            path.display(),
            dir.display()
        )
    })?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("corrupt model artifact '{}'", path.display()))
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use std::collections::HashMap;
    use std::path::Path;

    use super::*;

    /// Tiny pinned bundle: two features ("java", "python"), two categories.
    /// "java" votes for "Java Developer", "python" for "Data Science".
    pub fn fixture_bundle() -> ModelBundle {
        let vocabulary = HashMap::from([("java".to_string(), 0), ("python".to_string(), 1)]);
        ModelBundle {
            vectorizer: TfidfVectorizer::new(vocabulary, vec![1.0, 1.0]),
            classifier: LinearClassifier::new(
                vec![vec![1.0, 0.0], vec![0.0, 1.0]],
                vec![0.0, 0.0],
            ),
            encoder: LabelEncoder::new(vec![
                "Java Developer".to_string(),
                "Data Science".to_string(),
            ]),
        }
    }

    pub fn write_fixture_artifacts(dir: &Path) {
        let bundle = fixture_bundle();
        std::fs::write(
            dir.join(VECTORIZER_FILE),
            serde_json::to_string(&bundle.vectorizer).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.join(CLASSIFIER_FILE),
            serde_json::to_string(&bundle.classifier).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.join(ENCODER_FILE),
            serde_json::to_string(&bundle.encoder).unwrap(),
        )
        .unwrap();
    }
}
