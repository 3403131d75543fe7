//! Regression table bodies.
//!
//! The data flow is:
//! 1. Fitted results (`RegressionResults`, one per column)
//! 2. Main rows: per variable, an estimate row with stars and a wrapped
//!    standard error row underneath
//! 3. `outreg`: one main-row block per variable, concatenated
//!
//! Only the body of a `tabular` environment is produced; headers, rules and
//! the environment itself are left to the document.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cell::{format_cell, Cell};
use crate::error::OutregError;
use crate::results::RegressionResults;
use crate::row::{table_statrow, StatRowOptions};
use crate::significance::SignificanceTiers;
use crate::style::SeStyle;
use crate::Result;

/// Digits, leading zero, decimal point and sign
const NUMBER_OVERHEAD: usize = 3;
/// Room for up to three stars
const STARS_WIDTH: usize = 3;
/// Extra buffer between columns
const COLUMN_BUFFER: usize = 4;

/// Formatting options shared by every row of one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOptions {
    /// Width of the row label column
    pub name_just: usize,
    /// Width of each value column
    pub stat_just: usize,
    /// Digits after the decimal point
    pub digits: usize,
    /// Whether to append significance stars to estimates
    pub stars: bool,
    /// How to wrap standard errors
    pub se: SeStyle,
    /// p-value cutoffs and their star labels
    #[serde(default)]
    pub tiers: SignificanceTiers,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            name_just: 24,
            stat_just: 12,
            digits: 3,
            stars: true,
            se: SeStyle::Parens,
            tiers: SignificanceTiers::default(),
        }
    }
}

impl TableOptions {
    /// Derive column widths from the row labels.
    ///
    /// The label column fits the longest label plus two spaces; value columns
    /// fit a signed number with `digits` decimals, three stars and a buffer.
    pub fn from_labels<S: AsRef<str>>(
        labels: &[S],
        digits: usize,
        stars: bool,
        se: SeStyle,
    ) -> Self {
        let longest = labels
            .iter()
            .map(|label| label.as_ref().chars().count())
            .max()
            .unwrap_or(0);

        Self {
            name_just: longest + 2,
            stat_just: digits + NUMBER_OVERHEAD + STARS_WIDTH + COLUMN_BUFFER,
            digits,
            stars,
            se,
            tiers: SignificanceTiers::default(),
        }
    }

    /// Use custom significance tiers.
    pub fn with_tiers(mut self, tiers: SignificanceTiers) -> Self {
        self.tiers = tiers;
        self
    }

    fn row_options(&self) -> StatRowOptions {
        StatRowOptions::new()
            .name_just(self.name_just)
            .stat_just(self.stat_just)
    }
}

/// Build the estimate row and standard error row for one variable.
///
/// Each entry of `regs` is one column. `None` entries, and results that did
/// not estimate `varname`, leave both cells of their column blank.
pub fn table_mainrow(
    rowname: &str,
    varname: &str,
    regs: &[Option<&RegressionResults>],
    opts: &TableOptions,
) -> Result<String> {
    let mut beta_vals = Vec::with_capacity(regs.len());
    let mut se_vals = Vec::with_capacity(regs.len());

    for reg in regs {
        match reg.and_then(|r| r.coefficient(varname)) {
            Some(coef) => {
                let beta = format_cell(&Cell::from(coef.estimate), opts.digits);
                let sig = match coef.p_value {
                    Some(p) if opts.stars => opts.tiers.label(p),
                    _ => "",
                };
                beta_vals.push(Cell::Text(format!("{}{}", beta, sig)));
                se_vals.push(coef.std_error.map(Cell::from).unwrap_or_default());
            }
            None => {
                beta_vals.push(Cell::empty());
                se_vals.push(Cell::empty());
            }
        }
    }

    let beta_row = table_statrow(rowname, &beta_vals, &opts.row_options())?;
    let se_row = table_statrow(
        "",
        &se_vals,
        &opts.row_options().se(opts.se).digits(opts.digits),
    )?;

    Ok(beta_row + &se_row)
}

/// Model-level statistics that can fill a row under the coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitStatistic {
    /// Number of observations, printed as an integer
    Nobs,
    /// R-squared, printed with the table's digits
    RSquared,
}

impl FitStatistic {
    /// Conventional LaTeX row label
    pub fn default_label(&self) -> &'static str {
        match self {
            FitStatistic::Nobs => "$N$",
            FitStatistic::RSquared => "$R^2$",
        }
    }

    fn cell(&self, reg: &RegressionResults, digits: usize) -> Cell {
        match self {
            FitStatistic::Nobs => reg.nobs.map(Cell::from).unwrap_or_default(),
            FitStatistic::RSquared => reg
                .r_squared
                .map(|r2| Cell::Text(format_cell(&Cell::from(r2), digits)))
                .unwrap_or_default(),
        }
    }
}

/// Build a row of one model-level statistic per column.
pub fn table_fitrow(
    rowname: &str,
    stat: FitStatistic,
    regs: &[Option<&RegressionResults>],
    opts: &TableOptions,
) -> Result<String> {
    let vals: Vec<Cell> = regs
        .iter()
        .map(|reg| reg.map(|r| stat.cell(r, opts.digits)).unwrap_or_default())
        .collect();

    table_statrow(rowname, &vals, &opts.row_options())
}

/// Options for `outreg`.
#[derive(Debug, Clone)]
pub struct OutregOptions {
    /// Variables to pull from the results (`None` = every estimated variable)
    pub var_names: Option<Vec<String>>,
    /// Row labels for the variables (`None` = the variable names)
    pub var_labels: Option<Vec<String>>,
    /// Digits after the decimal point
    pub digits: usize,
    /// Whether to add significance stars
    pub stars: bool,
    /// How to wrap standard errors
    pub se: SeStyle,
    /// p-value cutoffs and their star labels
    pub tiers: SignificanceTiers,
}

impl Default for OutregOptions {
    fn default() -> Self {
        Self {
            var_names: None,
            var_labels: None,
            digits: 4,
            stars: true,
            se: SeStyle::Parens,
            tiers: SignificanceTiers::default(),
        }
    }
}

impl OutregOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the table to these variables, in this order.
    pub fn var_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.var_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Use these row labels instead of the variable names.
    pub fn var_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.var_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Set digits after the decimal point.
    pub fn digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    /// Enable or disable significance stars.
    pub fn stars(mut self, stars: bool) -> Self {
        self.stars = stars;
        self
    }

    /// Set the standard error style.
    pub fn se(mut self, style: SeStyle) -> Self {
        self.se = style;
        self
    }

    /// Use custom significance tiers instead of 10%/5%/1%.
    pub fn tiers(mut self, tiers: SignificanceTiers) -> Self {
        self.tiers = tiers;
        self
    }
}

/// Every variable estimated in any of `regs`, in order of first appearance.
pub fn union_var_names(regs: &[Option<&RegressionResults>]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in regs.iter().flatten().flat_map(|r| r.var_names()) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Render the body of a regression table.
///
/// # Example
///
/// ```rust
/// use outreglib::{outreg, Coefficient, OutregOptions, RegressionResults};
///
/// let ols = RegressionResults::new().with_coefficient(
///     Coefficient::new("x1", 2.0).with_std_error(0.5).with_p_value(0.03),
/// );
/// let body = outreg(&[Some(&ols)], &OutregOptions::new().digits(2)).unwrap();
/// assert!(body.contains("2.00**"));
/// assert!(body.contains("(0.50)"));
/// ```
pub fn outreg(regs: &[Option<&RegressionResults>], options: &OutregOptions) -> Result<String> {
    outreg_with_options(regs, options).map(|(body, _)| body)
}

/// Render the body of a regression table and return the derived options.
///
/// The returned `TableOptions` can be passed to `table_mainrow` and
/// `table_fitrow` to add rows that line up with the body.
pub fn outreg_with_options(
    regs: &[Option<&RegressionResults>],
    options: &OutregOptions,
) -> Result<(String, TableOptions)> {
    let var_names = match &options.var_names {
        Some(names) => names.clone(),
        None => union_var_names(regs),
    };
    let var_labels = match &options.var_labels {
        Some(labels) => labels.clone(),
        None => var_names.clone(),
    };

    if var_labels.len() != var_names.len() {
        return Err(OutregError::LabelMismatch {
            names: var_names.len(),
            labels: var_labels.len(),
        });
    }

    let opts = TableOptions::from_labels(
        var_labels.as_slice(),
        options.digits,
        options.stars,
        options.se,
    )
    .with_tiers(options.tiers.clone());
    debug!(
        "outreg: {} variables across {} columns, {:?}",
        var_names.len(),
        regs.len(),
        opts
    );

    let mut body = String::new();
    for (varname, label) in var_names.iter().zip(&var_labels) {
        body.push_str(&table_mainrow(label, varname, regs, &opts)?);
    }

    Ok((body, opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::Coefficient;
    use crate::row::{CELL_SEP, EOL};

    fn first_model() -> RegressionResults {
        RegressionResults::new()
            .with_coefficient(
                Coefficient::new("x1", 2.0)
                    .with_std_error(0.5)
                    .with_p_value(0.03),
            )
            .with_coefficient(
                Coefficient::new("cons", 1.0)
                    .with_std_error(0.1)
                    .with_p_value(0.2),
            )
            .with_nobs(100)
            .with_r_squared(0.25)
    }

    fn second_model() -> RegressionResults {
        RegressionResults::new()
            .with_coefficient(
                Coefficient::new("x1", 1.5)
                    .with_std_error(0.25)
                    .with_p_value(0.005),
            )
            .with_coefficient(
                Coefficient::new("x2", -0.3)
                    .with_std_error(0.2)
                    .with_p_value(0.08),
            )
            .with_nobs(250)
    }

    fn narrow() -> TableOptions {
        TableOptions {
            name_just: 4,
            stat_just: 10,
            digits: 2,
            stars: true,
            se: SeStyle::Parens,
            tiers: SignificanceTiers::default(),
        }
    }

    #[test]
    fn test_mainrow_single_result() {
        let model = first_model();
        let block = table_mainrow("x1", "x1", &[Some(&model)], &narrow()).unwrap();
        assert_eq!(block, "x1  & 2.00**   \\\\ \n    & (0.50)   \\\\ \n");
    }

    #[test]
    fn test_mainrow_default_options() {
        let model = first_model();
        let block = table_mainrow("x1", "x1", &[Some(&model)], &TableOptions::default()).unwrap();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("2.000**"));
        assert!(lines[1].contains("(0.500)"));
    }

    #[test]
    fn test_mainrow_missing_variable_is_blank() {
        let first = first_model();
        let second = second_model();
        let block =
            table_mainrow("cons", "cons", &[Some(&first), Some(&second)], &narrow()).unwrap();
        let lines: Vec<&str> = block.lines().collect();

        assert!(lines[0].contains("1.00"));
        assert!(lines[1].contains("(0.10)"));
        assert!(!block.contains("()"));
        // Both rows keep one cell per column
        assert_eq!(lines[0].matches(CELL_SEP).count(), 2);
        assert_eq!(lines[1].matches(CELL_SEP).count(), 2);
        let blank = format!("{:<10}", CELL_SEP);
        assert!(lines[1].ends_with(&format!("{}{}", blank, EOL.trim_end_matches('\n'))));
    }

    #[test]
    fn test_mainrow_none_entry_is_blank() {
        let model = first_model();
        let block = table_mainrow("x1", "x1", &[None, Some(&model)], &narrow()).unwrap();
        let blank = format!("{:<10}", CELL_SEP);
        assert!(block.starts_with(&format!("x1  {}& 2.00**", blank)));
        assert!(block.contains(&format!("    {}& (0.50)", blank)));
    }

    #[test]
    fn test_mainrow_without_stars() {
        let model = first_model();
        let opts = TableOptions {
            stars: false,
            ..narrow()
        };
        let block = table_mainrow("x1", "x1", &[Some(&model)], &opts).unwrap();
        assert!(block.contains("2.00 "));
        assert!(!block.contains('*'));
    }

    #[test]
    fn test_mainrow_brackets() {
        let model = first_model();
        let opts = TableOptions {
            se: SeStyle::Brackets,
            ..narrow()
        };
        let block = table_mainrow("x1", "x1", &[Some(&model)], &opts).unwrap();
        assert!(block.contains("[0.50]"));
    }

    fn plus_tiers() -> SignificanceTiers {
        SignificanceTiers::new(vec![(0.05, String::new()), (0.001, "+".to_string())], "++")
    }

    #[test]
    fn test_mainrow_custom_tiers() {
        let model = first_model();
        let opts = narrow().with_tiers(plus_tiers());
        let block = table_mainrow("x1", "x1", &[Some(&model)], &opts).unwrap();
        assert_eq!(block, "x1  & 2.00+    \\\\ \n    & (0.50)   \\\\ \n");
        assert!(!block.contains('*'));
    }

    #[test]
    fn test_mainrow_missing_se_and_p() {
        let model = RegressionResults::new().with_coefficient(Coefficient::new("z", 0.75));
        let block = table_mainrow("z", "z", &[Some(&model)], &narrow()).unwrap();
        let lines: Vec<&str> = block.lines().collect();
        assert!(lines[0].contains("& 0.75 "));
        assert!(!lines[0].contains('*'));
        assert!(!block.contains("()"));
    }

    #[test]
    fn test_options_from_labels() {
        let opts = TableOptions::from_labels(&["x1", "Education"], 4, true, SeStyle::Parens);
        assert_eq!(opts.name_just, 11);
        assert_eq!(opts.stat_just, 14);
        assert_eq!(opts.digits, 4);
    }

    #[test]
    fn test_options_from_no_labels() {
        let labels: [&str; 0] = [];
        let opts = TableOptions::from_labels(&labels, 2, true, SeStyle::None);
        assert_eq!(opts.name_just, 2);
    }

    #[test]
    fn test_union_var_names_first_appearance() {
        let first = first_model();
        let second = second_model();
        let names = union_var_names(&[Some(&first), None, Some(&second)]);
        assert_eq!(names, vec!["x1", "cons", "x2"]);
    }

    #[test]
    fn test_outreg_default_names() {
        let first = first_model();
        let second = second_model();
        let (body, opts) =
            outreg_with_options(&[Some(&first), Some(&second)], &OutregOptions::new()).unwrap();

        assert_eq!(opts.name_just, 6);
        assert_eq!(opts.stat_just, 14);
        assert_eq!(opts.se, SeStyle::Parens);

        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("x1    & 2.0000**"));
        assert!(lines[0].contains("& 1.5000***"));
        assert!(lines[1].contains("(0.5000)"));
        assert!(lines[1].contains("(0.2500)"));
        assert!(lines[2].starts_with("cons  & 1.0000 "));
        assert!(lines[4].starts_with("x2    "));
        assert!(lines[4].contains("-0.3000*"));
    }

    #[test]
    fn test_outreg_selected_names_and_labels() {
        let first = first_model();
        let options = OutregOptions::new()
            .var_names(["cons", "x1"])
            .var_labels(["Constant", "Treatment"])
            .digits(2)
            .se(SeStyle::Brackets);
        let body = outreg(&[Some(&first)], &options).unwrap();
        let lines: Vec<&str> = body.lines().collect();

        assert!(lines[0].starts_with("Constant   & 1.00"));
        assert!(lines[1].contains("[0.10]"));
        assert!(lines[2].starts_with("Treatment  & 2.00**"));
        assert!(lines[3].contains("[0.50]"));
    }

    #[test]
    fn test_outreg_custom_tiers() {
        let first = first_model();
        let second = second_model();
        let options = OutregOptions::new()
            .var_names(["x1"])
            .digits(2)
            .tiers(plus_tiers());
        let (body, opts) = outreg_with_options(&[Some(&first), Some(&second)], &options).unwrap();

        assert_eq!(opts.tiers, plus_tiers());
        let lines: Vec<&str> = body.lines().collect();
        assert!(lines[0].contains("& 2.00+ "));
        assert!(lines[0].contains("& 1.50+ "));
        assert!(!body.contains('*'));
    }

    #[test]
    fn test_outreg_label_mismatch() {
        let first = first_model();
        let options = OutregOptions::new()
            .var_names(["x1", "cons"])
            .var_labels(["Only one"]);
        let err = outreg(&[Some(&first)], &options).unwrap_err();
        assert!(matches!(
            err,
            OutregError::LabelMismatch {
                names: 2,
                labels: 1
            }
        ));
    }

    #[test]
    fn test_outreg_no_results() {
        assert_eq!(outreg(&[], &OutregOptions::new()).unwrap(), "");
    }

    #[test]
    fn test_fitrow_nobs() {
        let first = first_model();
        let row =
            table_fitrow("$N$", FitStatistic::Nobs, &[Some(&first), None], &narrow()).unwrap();
        assert!(row.starts_with("$N$ & 100"));
        assert_eq!(row.matches(CELL_SEP).count(), 2);
    }

    #[test]
    fn test_fitrow_r_squared_uses_digits() {
        let first = first_model();
        let second = second_model();
        let row = table_fitrow(
            FitStatistic::RSquared.default_label(),
            FitStatistic::RSquared,
            &[Some(&first), Some(&second)],
            &narrow(),
        )
        .unwrap();
        assert!(row.contains("& 0.25"));
        // second model has no R-squared
        assert_eq!(row.matches(CELL_SEP).count(), 2);
    }
}
