//! Row and column configuration for the table engine.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// Columns are static configuration, not engine state: a key rows are
/// asked to provide sort values for, header text, display hints, and
/// whether the column responds to sort clicks.
///
/// # Example
///
/// ```ignore
/// let columns = vec![
///     Column::new("id", "ID").width(8),
///     Column::new("name", "Name").sortable(),
///     Column::new("status", "Status").align(Alignment::Center),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Key used to look up sort values on rows.
    pub key: String,
    /// Column header text.
    pub header: String,
    /// Display width hint in columns (0 lets the renderer decide).
    pub width: u16,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Whether this column responds to sort clicks.
    pub sortable: bool,
}

impl Column {
    /// Create a new column.
    ///
    /// # Arguments
    /// * `key` - The key rows resolve sort values for
    /// * `header` - The column header text
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: 0,
            align: Alignment::Left,
            sortable: false,
        }
    }

    /// Set the display width hint.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    ///
    /// Sortable columns respond to header clicks by toggling the sort
    /// state; clicks on other columns are ignored.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Errors produced by [`validate_columns`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnConfigError {
    /// A column was configured with an empty key.
    #[error("column {index} has an empty key")]
    EmptyKey { index: usize },
    /// Two columns share the same key.
    #[error("duplicate column key `{key}`")]
    DuplicateKey { key: String },
}

/// Validate column configuration once at startup.
///
/// Duplicate or empty column keys make sort clicks ambiguous, and the
/// engine itself never checks for them. Call this when wiring up a table
/// to fail fast on misconfiguration instead.
pub fn validate_columns(columns: &[Column]) -> Result<(), ColumnConfigError> {
    let mut seen = HashSet::new();
    for (index, column) in columns.iter().enumerate() {
        if column.key.is_empty() {
            return Err(ColumnConfigError::EmptyKey { index });
        }
        if !seen.insert(column.key.as_str()) {
            return Err(ColumnConfigError::DuplicateKey {
                key: column.key.clone(),
            });
        }
    }
    Ok(())
}

/// A sortable cell value.
///
/// Rows expose one of these per column so the engine can order rows
/// without knowing their concrete type. Comparison is total: values of
/// different kinds order by a fixed kind rank instead of falling into
/// unspecified behavior, and `Empty` sorts before everything else.
///
/// # Example
///
/// ```
/// use joist::components::table::CellValue;
///
/// let name = CellValue::from("Contoso");
/// let count = CellValue::from(42i64);
/// let missing = CellValue::Empty;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    /// No value for this column.
    #[default]
    Empty,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Text value.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
}

impl CellValue {
    /// Returns `true` if this is an empty value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns the kind name of this value.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Text(_) => "text",
            CellValue::Date(_) => "date",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) | CellValue::Float(_) => 2,
            CellValue::Text(_) => 3,
            CellValue::Date(_) => 4,
        }
    }

    /// Compare two cell values with a total order.
    ///
    /// Same-kind values use their natural order (`total_cmp` for floats,
    /// so even NaN is ordered). Integers and floats compare numerically
    /// with each other, without rounding the integer through a float
    /// cast; any other cross-kind pair orders by kind rank, `Empty`
    /// first.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Float(a), CellValue::Float(b)) => a.total_cmp(b),
            (CellValue::Int(a), CellValue::Float(b)) => compare_int_float(*a, *b),
            (CellValue::Float(a), CellValue::Int(b)) => compare_int_float(*b, *a).reverse(),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Exact numeric order of an integer against a float.
///
/// Casting i64 to f64 rounds above 2^53 and collapses distinct integers
/// onto one float, so the float is split into whole and fractional parts
/// instead. NaN keeps its `total_cmp` placement: below every number when
/// the sign bit is set, above otherwise.
fn compare_int_float(int: i64, float: f64) -> Ordering {
    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    // 2^63 is exact as f64. Every i64 is below it and none is below
    // -2^63, so past these guards the truncated float fits in i64.
    if float >= 9_223_372_036_854_775_808.0 {
        return Ordering::Less;
    }
    if float < -9_223_372_036_854_775_808.0 {
        return Ordering::Greater;
    }
    let whole = float.trunc();
    let fraction = float - whole;
    match int.cmp(&(whole as i64)) {
        Ordering::Equal if fraction > 0.0 => Ordering::Less,
        Ordering::Equal if fraction < 0.0 => Ordering::Greater,
        // `total_cmp` puts -0.0 below 0.0; 0 lands above -0.0 to match.
        Ordering::Equal if whole == 0.0 && whole.is_sign_negative() => Ordering::Greater,
        ordering => ordering,
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(i64::from(v))
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<NaiveDate> for CellValue {
    fn from(v: NaiveDate) -> Self {
        CellValue::Date(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => CellValue::Empty,
        }
    }
}

/// Trait for rows the table engine can sort and select.
///
/// # Example
///
/// ```ignore
/// impl TableRow for User {
///     fn key(&self) -> String {
///         self.id.clone()
///     }
///
///     fn sort_value(&self, column: &str) -> CellValue {
///         match column {
///             "name" => self.name.as_str().into(),
///             "age" => self.age.into(),
///             _ => CellValue::Empty,
///         }
///     }
/// }
/// ```
pub trait TableRow: Send + Sync + Clone + 'static {
    /// Stable unique identifier for this row.
    ///
    /// Selection tracks rows by this key so it survives re-sorting and
    /// re-paging. There is no fallback derivation from row content; every
    /// implementation supplies its own key, and callers must keep keys
    /// unique. Duplicate keys silently collapse distinct rows under
    /// selection.
    fn key(&self) -> String;

    /// The sortable value for the given column key.
    ///
    /// Return [`CellValue::Empty`] for columns this row has no value for;
    /// empty values order before every non-empty value.
    fn sort_value(&self, column: &str) -> CellValue;
}
