//! Shared data types for tables, schemas and aggregated series.
//!
//! These types are deliberately plain data: the loader produces them, the
//! resolver and aggregator read them, and nothing mutates them afterwards.

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use crate::error::AppError;

/// A single raw cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    /// Empty cell (or `NaN`).
    Missing,
}

/// An in-memory CSV table.
///
/// Header and row order follow the source file. Every row has exactly
/// `headers.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTable {
    pub source: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl BenchmarkTable {
    /// Index of a physical column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn require_column(&self, name: &str) -> Result<usize, AppError> {
        self.column_index(name).ok_or_else(|| AppError::SchemaResolution {
            semantic: name.to_string(),
            candidates: vec![name.to_string()],
            headers: self.headers.clone(),
        })
    }

    /// Rows whose `column` cell equals `value`, in source order.
    ///
    /// Line numbers in later errors refer to the filtered table.
    pub fn filter_eq(&self, column: &str, value: &Value) -> Result<BenchmarkTable, AppError> {
        let idx = self.require_column(column)?;
        Ok(BenchmarkTable {
            source: self.source.clone(),
            headers: self.headers.clone(),
            rows: self.rows.iter().filter(|row| row[idx] == *value).cloned().collect(),
        })
    }

    /// Raw `(x, y)` points in row order.
    ///
    /// Rows where either cell is missing are skipped; a text cell is an error.
    pub fn numeric_pairs(&self, x_column: &str, y_column: &str) -> Result<Vec<(f64, f64)>, AppError> {
        let x_idx = self.require_column(x_column)?;
        let y_idx = self.require_column(y_column)?;

        let mut out = Vec::with_capacity(self.rows.len());
        for (idx, row) in self.rows.iter().enumerate() {
            let line = idx + 2;
            let x = numeric_cell(&row[x_idx], x_column, line)?;
            let y = numeric_cell(&row[y_idx], y_column, line)?;
            if let (Some(x), Some(y)) = (x, y) {
                out.push((x, y));
            }
        }
        Ok(out)
    }
}

/// A numeric cell, `None` when missing, `NonNumeric` when text.
pub(crate) fn numeric_cell(value: &Value, column: &str, line: usize) -> Result<Option<f64>, AppError> {
    match value {
        Value::Number(v) => Ok(Some(*v)),
        Value::Missing => Ok(None),
        Value::Text(s) => Err(AppError::NonNumeric {
            column: column.to_string(),
            line,
            value: s.clone(),
        }),
    }
}

/// A semantic column role plus the substrings that identify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub semantic: String,
    /// Tried in order; earlier candidates win.
    pub candidates: Vec<String>,
}

impl ColumnSpec {
    pub fn new(semantic: &str, candidates: &[&str]) -> Self {
        Self {
            semantic: semantic.to_string(),
            candidates: candidates.iter().map(|c| c.to_lowercase()).collect(),
        }
    }
}

/// Semantic name -> physical column, in the order the specs were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSchema {
    entries: Vec<(String, String)>,
}

impl ResolvedSchema {
    pub(crate) fn insert(&mut self, semantic: String, column: String) {
        match self.entries.iter_mut().find(|(s, _)| *s == semantic) {
            Some(entry) => entry.1 = column,
            None => self.entries.push((semantic, column)),
        }
    }

    /// Physical column resolved for `semantic`.
    pub fn get(&self, semantic: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| s == semantic)
            .map(|(_, c)| c.as_str())
    }

    /// Like `get`, but an unresolved name is a schema error.
    pub fn column(&self, semantic: &str) -> Result<&str, AppError> {
        self.get(semantic).ok_or_else(|| AppError::SchemaResolution {
            semantic: semantic.to_string(),
            candidates: Vec::new(),
            headers: Vec::new(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, c)| (s.as_str(), c.as_str()))
    }
}

/// Grouping key.
///
/// Numeric keys compare numerically, text keys lexicographically. A column is
/// either fully numeric or fully text, so mixed comparisons only need to be
/// consistent (numbers sort first).
#[derive(Debug, Clone)]
pub enum GroupKey {
    Number(f64),
    Text(String),
}

impl GroupKey {
    /// Build a key from a cell; missing cells have no key.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            // Normalise -0.0 so it groups with 0.0.
            Value::Number(v) if *v == 0.0 => Some(GroupKey::Number(0.0)),
            Value::Number(v) => Some(GroupKey::Number(*v)),
            Value::Text(s) => Some(GroupKey::Text(s.clone())),
            Value::Missing => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            GroupKey::Number(v) => Some(*v),
            GroupKey::Text(_) => None,
        }
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (GroupKey::Number(a), GroupKey::Number(b)) => a.total_cmp(b),
            (GroupKey::Text(a), GroupKey::Text(b)) => a.cmp(b),
            (GroupKey::Number(_), GroupKey::Text(_)) => Ordering::Less,
            (GroupKey::Text(_), GroupKey::Number(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Number(v) => write!(f, "{v}"),
            GroupKey::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Per-group means, keys unique and ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedSeries {
    /// Name of the grouping column (for messages).
    pub key_column: String,
    pub points: Vec<(GroupKey, f64)>,
}

impl AggregatedSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Plot-ready points; text keys cannot be placed on a numeric axis.
    pub fn numeric_points(&self) -> Result<Vec<(f64, f64)>, AppError> {
        self.points
            .iter()
            .enumerate()
            .map(|(idx, (key, mean))| match key.as_number() {
                Some(x) => Ok((x, *mean)),
                None => Err(AppError::NonNumeric {
                    column: self.key_column.clone(),
                    line: idx + 1,
                    value: key.to_string(),
                }),
            })
            .collect()
    }
}
