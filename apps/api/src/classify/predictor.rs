//! The prediction pipeline: normalize, vectorize, classify, decode.

use anyhow::{Context, Result};

use crate::classify::normalize;
use crate::model::ModelBundle;

/// Predicts the job category for raw resume text.
///
/// Deterministic for a fixed bundle and input, and safe to call from
/// concurrent requests: every stage is a pure read of the shared bundle.
pub fn predict_category(models: &ModelBundle, raw_text: &str) -> Result<String> {
    let cleaned = normalize::clean(raw_text);
    let features = models.vectorizer.transform(&cleaned);
    let class_index = models.classifier.predict(&features);
    let category = models.encoder.decode(class_index).with_context(|| {
        format!("predicted class index {class_index} is outside the label encoder's range")
    })?;
    Ok(category.to_string())
}
