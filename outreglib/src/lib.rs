//! # outreglib
//!
//! Render fitted regression results as the body of a LaTeX `tabular`.
//!
//! ## Overview
//!
//! Regression tables in papers follow a fixed layout: one row per variable
//! with the point estimate and its significance stars, a row underneath with
//! the standard error in parentheses, and one column per model. This library
//! produces exactly those rows, aligned so the generated `.tex` is readable
//! on its own:
//!
//! - **Cells**: numbers with a fixed number of decimals, or text passed through
//! - **Stars**: `*`, `**`, `***` at the 10%, 5% and 1% levels
//! - **Standard errors**: wrapped in `( )` or `[ ]`
//! - **Blank cells**: for models that did not estimate a variable, or for
//!   padding rows with explicit empty positions
//! - **Notes**: written to a `_notes` file next to the table
//!
//! Estimation itself is out of scope: results come in as
//! [`RegressionResults`], built in code or loaded from JSON.
//!
//! ## Example
//!
//! ```rust
//! use outreglib::{outreg_with_options, table_fitrow, Coefficient, FitStatistic,
//!     OutregOptions, RegressionResults};
//!
//! let ols = RegressionResults::new()
//!     .with_coefficient(Coefficient::new("x1", 2.0).with_std_error(0.5).with_p_value(0.03))
//!     .with_nobs(100);
//! let iv = RegressionResults::new()
//!     .with_coefficient(Coefficient::new("x1", 1.5).with_std_error(0.25).with_p_value(0.005))
//!     .with_nobs(250);
//!
//! let regs = [Some(&ols), Some(&iv)];
//! let (mut body, opts) = outreg_with_options(&regs, &OutregOptions::new().digits(2)).unwrap();
//! body += &table_fitrow("$N$", FitStatistic::Nobs, &regs, &opts).unwrap();
//!
//! assert!(body.contains("2.00**"));
//! assert!(body.contains("1.50***"));
//! assert!(body.contains("(0.25)"));
//! assert!(body.contains("& 250"));
//! ```

pub mod cell;
pub mod error;
pub mod notes;
pub mod results;
pub mod row;
pub mod significance;
pub mod style;
pub mod table;

pub use cell::{format_cell, Cell};
pub use error::OutregError;
pub use notes::{notes_path, write_notes};
pub use results::{Coefficient, RegressionResults};
pub use row::{expand_empty_cells, table_statrow, StatRowOptions, CELL_SEP, EOL};
pub use significance::{sig_level, SignificanceTiers};
pub use style::{CellTemplate, SeStyle};
pub use table::{
    outreg, outreg_with_options, table_fitrow, table_mainrow, union_var_names, FitStatistic,
    OutregOptions, TableOptions,
};

/// Result type for outreglib operations
pub type Result<T> = std::result::Result<T, OutregError>;
