//! Significance stars from p-values.

use serde::{Deserialize, Serialize};

/// Default tiers as `(lower_exclusive_bound, label)`, checked top-down.
const DEFAULT_TIERS: [(f64, &str); 3] = [(0.1, ""), (0.05, "*"), (0.01, "**")];

/// Label for p-values that clear none of the default tiers.
const DEFAULT_FLOOR: &str = "***";

/// Ordered partition of p-value space into star labels.
///
/// A p-value takes the label of the first tier whose bound it strictly
/// exceeds; anything at or below every bound takes the floor label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificanceTiers {
    tiers: Vec<(f64, String)>,
    floor: String,
}

impl Default for SignificanceTiers {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS
                .iter()
                .map(|(bound, label)| (*bound, label.to_string()))
                .collect(),
            floor: DEFAULT_FLOOR.to_string(),
        }
    }
}

impl SignificanceTiers {
    /// Create custom tiers.
    ///
    /// `tiers` must be ordered by descending bound for the top-down check to
    /// make sense.
    pub fn new(tiers: Vec<(f64, String)>, floor: impl Into<String>) -> Self {
        Self {
            tiers,
            floor: floor.into(),
        }
    }

    /// Star label for `p`.
    pub fn label(&self, p: f64) -> &str {
        self.tiers
            .iter()
            .find(|(bound, _)| p > *bound)
            .map(|(_, label)| label.as_str())
            .unwrap_or(self.floor.as_str())
    }
}

/// Star label for `p` using the conventional 10%/5%/1% tiers.
///
/// Out-of-range p-values are not validated. NaN compares false against every
/// bound and gets `"***"`.
pub fn sig_level(p: f64) -> &'static str {
    DEFAULT_TIERS
        .iter()
        .find(|(bound, _)| p > *bound)
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_FLOOR)
}
