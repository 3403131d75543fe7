//! Single LaTeX table rows.
//!
//! `table_statrow` is the building block for everything else: a padded row
//! label followed by `& `-separated, padded value cells and the LaTeX row
//! terminator. It is also useful on its own for the bottom rows of a
//! regression table (sample size, estimator names) or for summary tables.
//!
//! ## Example
//!
//! ```rust
//! use outreglib::{table_statrow, Cell, StatRowOptions};
//!
//! let opts = StatRowOptions::new().name_just(12).stat_just(8);
//! let vals: Vec<Cell> = vec!["OLS".into(), "2SLS".into()];
//! let row = table_statrow("Method", &vals, &opts).unwrap();
//! assert_eq!(row, "Method      & OLS   & 2SLS   \\\\ \n");
//! ```

use std::collections::BTreeSet;

use crate::cell::{format_cell, Cell};
use crate::error::OutregError;
use crate::style::{CellTemplate, SeStyle};
use crate::Result;

/// Separator placed before every value cell
pub const CELL_SEP: &str = "& ";

/// LaTeX row terminator
pub const EOL: &str = " \\\\ \n";

/// Options for building a single row.
#[derive(Debug, Clone)]
pub struct StatRowOptions {
    /// Width of the row label column
    pub name_just: usize,
    /// Width of each value column, separator included
    pub stat_just: usize,
    /// Wrap values in `\num{}`
    pub wrapnum: bool,
    /// Parenthesis style for values
    pub se: SeStyle,
    /// Digits after the decimal point (`None` prints values as-is)
    pub digits: Option<usize>,
    /// Blank cells to add on the left
    pub empty_left: usize,
    /// Blank cells to add on the right
    pub empty_right: usize,
    /// Zero-indexed positions of blank cells in the final row
    pub empty_slots: Vec<usize>,
}

impl Default for StatRowOptions {
    fn default() -> Self {
        Self {
            name_just: 24,
            stat_just: 12,
            wrapnum: false,
            se: SeStyle::None,
            digits: None,
            empty_left: 0,
            empty_right: 0,
            empty_slots: Vec::new(),
        }
    }
}

impl StatRowOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label column width.
    pub fn name_just(mut self, width: usize) -> Self {
        self.name_just = width;
        self
    }

    /// Set the value column width.
    pub fn stat_just(mut self, width: usize) -> Self {
        self.stat_just = width;
        self
    }

    /// Wrap values in `\num{}`.
    pub fn wrapnum(mut self, wrap: bool) -> Self {
        self.wrapnum = wrap;
        self
    }

    /// Set the parenthesis style.
    pub fn se(mut self, style: SeStyle) -> Self {
        self.se = style;
        self
    }

    /// Format numbers with a fixed number of digits.
    pub fn digits(mut self, digits: usize) -> Self {
        self.digits = Some(digits);
        self
    }

    /// Add blank cells on the left and right.
    pub fn empty_edges(mut self, left: usize, right: usize) -> Self {
        self.empty_left = left;
        self.empty_right = right;
        self
    }

    /// Put blank cells at the given positions.
    pub fn empty_slots(mut self, slots: Vec<usize>) -> Self {
        self.empty_slots = slots;
        self
    }
}

/// Insert blank cells into `vals`.
///
/// Either `empty_left`/`empty_right` or `empty_slots` may be used, not both.
/// With `empty_slots`, passing `[1, 2, 3]` and slots `[1, 3, 5]` gives
/// `[1, "", 2, "", 3, ""]`.
pub fn expand_empty_cells(
    vals: &[Cell],
    empty_left: usize,
    empty_right: usize,
    empty_slots: &[usize],
) -> Result<Vec<Cell>> {
    let has_edges = empty_left > 0 || empty_right > 0;

    if !has_edges && empty_slots.is_empty() {
        return Ok(vals.to_vec());
    }
    if has_edges && !empty_slots.is_empty() {
        return Err(OutregError::ConflictingArguments);
    }

    let slots: BTreeSet<usize> = if has_edges {
        let right_start = empty_left + vals.len();
        (0..empty_left)
            .chain(right_start..right_start + empty_right)
            .collect()
    } else {
        empty_slots.iter().copied().collect()
    };

    let len = vals.len() + slots.len();
    if let Some(&slot) = slots.iter().find(|&&slot| slot >= len) {
        return Err(OutregError::SlotOutOfRange { slot, len });
    }

    let mut filled = vals.iter();
    let expanded = (0..len)
        .map(|i| {
            if slots.contains(&i) {
                Cell::empty()
            } else {
                filled.next().cloned().unwrap_or_default()
            }
        })
        .collect();

    Ok(expanded)
}

/// Build one table row.
///
/// The label is left-justified to `name_just`; every value cell starts with
/// `& ` and is left-justified to `stat_just`. Blank cells skip formatting
/// and wrapping entirely so they never render as `()`.
pub fn table_statrow(rowname: &str, vals: &[Cell], opts: &StatRowOptions) -> Result<String> {
    let template = if opts.wrapnum {
        CellTemplate::num()
    } else {
        CellTemplate::plain()
    }
    .wrapped(opts.se);

    let vals = expand_empty_cells(vals, opts.empty_left, opts.empty_right, &opts.empty_slots)?;

    let mut out = format!("{:<width$}", rowname, width = opts.name_just);

    for val in &vals {
        let cell = if val.is_empty() {
            CELL_SEP.to_string()
        } else {
            let text = match opts.digits {
                Some(digits) => format_cell(val, digits),
                None => val.to_string(),
            };
            format!("{}{}", CELL_SEP, template.fill(&text))
        };
        out.push_str(&format!("{:<width$}", cell, width = opts.stat_just));
    }

    out.push_str(EOL);

    Ok(out)
}
