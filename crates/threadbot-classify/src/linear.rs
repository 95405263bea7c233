//! Linear classifier over sparse features (logistic regression / one-vs-rest).
//!
//! Two classes with a single coefficient row predict `classes[1]` when the
//! decision value is positive. Otherwise each class owns one row and the
//! first class with the highest decision value wins.

use std::path::Path;

use serde::{Deserialize, Serialize};
use threadbot_core::errors::{ModelError, ThreadbotResult};
use threadbot_core::models::FeatureVector;
use threadbot_core::traits::IPredictor;
use tracing::{debug, info};

use crate::loader::{invalid, read_params};

/// On-disk parameter layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearParams {
    pub classes: Vec<String>,
    pub coef: Vec<Vec<f32>>,
    pub intercept: Vec<f32>,
}

/// A fitted linear classifier.
#[derive(Debug, Clone)]
pub struct LinearPredictor {
    name: String,
    classes: Vec<String>,
    coef: Vec<Vec<f32>>,
    intercept: Vec<f32>,
    n_features: usize,
}

impl LinearPredictor {
    /// Load and validate a parameter file. `name` labels logs and errors
    /// (e.g. "intent classifier").
    pub fn load(path: impl AsRef<Path>, name: &str) -> ThreadbotResult<Self> {
        let path = path.as_ref();
        let params: LinearParams = read_params(path, name)?;
        let predictor = Self::from_params(name, params)?;
        info!(
            path = %path.display(),
            model = name,
            classes = predictor.classes.len(),
            features = predictor.n_features,
            "linear classifier loaded"
        );
        Ok(predictor)
    }

    /// Validate the parameter shapes.
    pub fn from_params(name: &str, params: LinearParams) -> ThreadbotResult<Self> {
        let LinearParams {
            classes,
            coef,
            intercept,
        } = params;

        if classes.len() < 2 {
            return Err(invalid(
                name,
                format!("need at least 2 classes, got {}", classes.len()),
            ));
        }
        let binary = classes.len() == 2 && coef.len() == 1;
        if !binary && coef.len() != classes.len() {
            return Err(invalid(
                name,
                format!("{} coefficient rows for {} classes", coef.len(), classes.len()),
            ));
        }
        if intercept.len() != coef.len() {
            return Err(invalid(
                name,
                format!(
                    "{} intercepts for {} coefficient rows",
                    intercept.len(),
                    coef.len()
                ),
            ));
        }
        let n_features = coef[0].len();
        if let Some(row) = coef.iter().position(|r| r.len() != n_features) {
            return Err(invalid(
                name,
                format!(
                    "coefficient row {row} has {} features, row 0 has {n_features}",
                    coef[row].len()
                ),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            classes,
            coef,
            intercept,
            n_features,
        })
    }

    /// Number of features each input must have.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Raw decision values, one per coefficient row.
    pub fn decision_function(&self, features: &FeatureVector) -> ThreadbotResult<Vec<f64>> {
        if features.dim() != self.n_features {
            return Err(ModelError::FeatureMismatch {
                expected: self.n_features,
                actual: features.dim(),
            }
            .into());
        }
        Ok(self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| features.dot(row) + f64::from(*b))
            .collect())
    }

    fn choose(&self, scores: &[f64]) -> usize {
        if self.coef.len() == 1 {
            return usize::from(scores[0] > 0.0);
        }
        let mut best = 0;
        for (i, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = i;
            }
        }
        best
    }
}

impl IPredictor for LinearPredictor {
    fn predict(&self, features: &FeatureVector) -> ThreadbotResult<String> {
        let scores = self.decision_function(features)?;
        let label = &self.classes[self.choose(&scores)];
        debug!(model = %self.name, label = %label, "predicted");
        Ok(label.clone())
    }

    fn labels(&self) -> &[String] {
        &self.classes
    }
}
