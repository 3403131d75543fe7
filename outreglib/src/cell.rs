//! Table cell values and their fixed-precision formatting.

/// A single value destined for a table cell.
///
/// Numbers get fixed-point formatting when a row asks for a digit count;
/// text is always passed through untouched, which is how pre-formatted
/// values (e.g. `"2.00**"`) and blank cells travel through a row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A numeric value
    Number(f64),
    /// A pre-formatted or placeholder value
    Text(String),
}

impl Cell {
    /// Create the blank cell
    pub fn empty() -> Self {
        Cell::Text(String::new())
    }

    /// Check if this is the blank cell
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Text(s) if s.is_empty())
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::empty()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{}", v),
            Cell::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

/// Format a cell with exactly `digits` digits after the decimal point.
///
/// Text cells are returned unchanged.
pub fn format_cell(cell: &Cell, digits: usize) -> String {
    match cell {
        Cell::Number(v) => format!("{:.*}", digits, v),
        Cell::Text(s) => s.clone(),
    }
}
