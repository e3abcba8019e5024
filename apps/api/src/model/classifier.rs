use serde::{Deserialize, Serialize};

/// Fitted linear multi-class classifier: one weight row and one intercept
/// per class, scored one-vs-rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LinearClassifier {
    pub fn new(weights: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Self {
        Self {
            weights,
            intercepts,
        }
    }

    pub fn n_classes(&self) -> usize {
        self.weights.len()
    }

    pub fn n_features(&self) -> usize {
        self.weights.first().map(Vec::len).unwrap_or(0)
    }

    /// Weight rows must be rectangular and paired one-to-one with
    /// intercepts; checked once at load.
    pub(super) fn check_consistency(&self) -> Result<(), String> {
        if self.weights.is_empty() {
            return Err("classifier has no classes".to_string());
        }
        if self.weights.len() != self.intercepts.len() {
            return Err(format!(
                "{} weight rows but {} intercepts",
                self.weights.len(),
                self.intercepts.len()
            ));
        }
        let n_features = self.n_features();
        for (class, row) in self.weights.iter().enumerate() {
            if row.len() != n_features {
                return Err(format!(
                    "weight row for class {class} has {} features, expected {n_features}",
                    row.len()
                ));
            }
        }
        Ok(())
    }

    /// Per-class decision scores `w_c . x + b_c`.
    fn decision(&self, features: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter()
                    .zip(features)
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + intercept
            })
            .collect()
    }

    /// Returns exactly one class index: the highest-scoring class, with
    /// ties broken toward the lower index.
    pub fn predict(&self, features: &[f64]) -> usize {
        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (index, score) in self.decision(features).into_iter().enumerate() {
            if score > best_score {
                best = index;
                best_score = score;
            }
        }
        best
    }
}
