use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Value – a single table cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => write!(f, "<null>"),
        }
    }
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Column – the table's native column type
// ---------------------------------------------------------------------------

/// A named sequence of cells, one per table row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: Option<String>,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(values: Vec<Value>) -> Self {
        Self { name: None, values }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Interpret the column as booleans. `None` if any cell is not a bool.
    pub fn as_bools(&self) -> Option<Vec<bool>> {
        self.values.iter().map(Value::as_bool).collect()
    }

    /// Indices of rows holding `true`.
    pub fn true_indices(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.as_bool() == Some(true))
            .map(|(i, _)| i)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Table – row-oriented table
// ---------------------------------------------------------------------------

/// One table row: column name → value.
pub type Row = BTreeMap<String, Value>;

/// A row-oriented table with an ordered set of column names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column names in first-seen order.
    pub column_names: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Build a table from rows, collecting the column names they use.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut column_names = Vec::new();

        for row in &rows {
            for col in row.keys() {
                if seen.insert(col.clone()) {
                    column_names.push(col.clone());
                }
            }
        }
        Table { column_names, rows }
    }

    /// Build a single-column table.
    pub fn from_column(name: &str, values: Vec<Value>) -> Self {
        let rows = values
            .into_iter()
            .map(|v| Row::from([(name.to_string(), v)]))
            .collect();
        Table {
            column_names: vec![name.to_string()],
            rows,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extract a column; rows lacking it contribute `Null`.
    pub fn column(&self, name: &str) -> Option<Column> {
        if !self.column_names.iter().any(|c| c == name) {
            return None;
        }
        let values = self
            .rows
            .iter()
            .map(|row| row.get(name).cloned().unwrap_or(Value::Null))
            .collect();
        Some(Column::new(values).with_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(vec![
            Row::from([("a".to_string(), Value::from(1i64))]),
            Row::from([
                ("a".to_string(), Value::from(2i64)),
                ("b".to_string(), Value::from("x")),
            ]),
        ])
    }

    #[test]
    fn collects_column_names() {
        let table = sample();
        assert_eq!(table.column_names, vec!["a", "b"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_cells_are_null() {
        let col = sample().column("b").unwrap();
        assert_eq!(col.values, vec![Value::Null, Value::from("x")]);
        assert_eq!(col.name.as_deref(), Some("b"));
        assert!(sample().column("zzz").is_none());
    }

    #[test]
    fn boolean_column_helpers() {
        let col = Column::new(vec![true.into(), false.into(), true.into()]);
        assert_eq!(col.as_bools(), Some(vec![true, false, true]));
        assert_eq!(col.true_indices(), vec![0, 2]);
        assert_eq!(Column::new(vec![Value::Null]).as_bools(), None);
    }
}
