//! Fitted-model results consumed by the table builders.
//!
//! Estimation happens elsewhere; this module only holds what a table needs:
//! per-variable estimates, standard errors and p-values, plus a couple of
//! model-level statistics for the bottom rows.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OutregError;
use crate::Result;

/// One estimated coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    /// Variable name
    pub name: String,
    /// Point estimate
    pub estimate: f64,
    /// Standard error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_error: Option<f64>,
    /// p-value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p_value: Option<f64>,
}

impl Coefficient {
    /// Create a new coefficient
    pub fn new(name: impl Into<String>, estimate: f64) -> Self {
        Self {
            name: name.into(),
            estimate,
            std_error: None,
            p_value: None,
        }
    }

    /// Set standard error
    pub fn with_std_error(mut self, se: f64) -> Self {
        self.std_error = Some(se);
        self
    }

    /// Set p-value
    pub fn with_p_value(mut self, p: f64) -> Self {
        self.p_value = Some(p);
        self
    }
}

/// Results of one fitted model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegressionResults {
    /// Optional model name (e.g. "OLS", "(1)")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Coefficients in declaration order
    #[serde(default)]
    pub coefficients: Vec<Coefficient>,
    /// Number of observations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nobs: Option<u64>,
    /// R-squared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r_squared: Option<f64>,
}

impl RegressionResults {
    /// Create empty results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a coefficient.
    pub fn with_coefficient(mut self, coefficient: Coefficient) -> Self {
        self.coefficients.push(coefficient);
        self
    }

    /// Set the number of observations.
    pub fn with_nobs(mut self, nobs: u64) -> Self {
        self.nobs = Some(nobs);
        self
    }

    /// Set R-squared.
    pub fn with_r_squared(mut self, r_squared: f64) -> Self {
        self.r_squared = Some(r_squared);
        self
    }

    /// Look up a coefficient by variable name.
    pub fn coefficient(&self, name: &str) -> Option<&Coefficient> {
        self.coefficients.iter().find(|c| c.name == name)
    }

    /// Whether `name` was estimated in this model
    pub fn contains(&self, name: &str) -> bool {
        self.coefficient(name).is_some()
    }

    /// Point estimate for `name`
    pub fn estimate(&self, name: &str) -> Option<f64> {
        self.coefficient(name).map(|c| c.estimate)
    }

    /// Standard error for `name`, if reported
    pub fn std_error(&self, name: &str) -> Option<f64> {
        self.coefficient(name).and_then(|c| c.std_error)
    }

    /// p-value for `name`, if reported
    pub fn p_value(&self, name: &str) -> Option<f64> {
        self.coefficient(name).and_then(|c| c.p_value)
    }

    /// Variable names in declaration order.
    pub fn var_names(&self) -> Vec<&str> {
        self.coefficients.iter().map(|c| c.name.as_str()).collect()
    }

    /// Decode results from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| OutregError::ResultsParse {
            path: "<string>".into(),
            message: e.to_string(),
        })
    }

    /// Read results from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| OutregError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| OutregError::ResultsParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
