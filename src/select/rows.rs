//! The `rows` option accepted by styling calls, resolved to row indices.

use super::mask::evaluate;
use super::selector::{EveryNthRow, FirstNRows, LastNRows, Selector};
use super::source::TabularSource;
use crate::error::{Result, SelectError};

/// Which rows a styling call targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Rows {
    /// Every row.
    #[default]
    All,
    /// Explicit 0-based row indices.
    Indices(Vec<usize>),
    /// Rows picked by a selector.
    Select(Selector),
}

impl From<Selector> for Rows {
    fn from(s: Selector) -> Self {
        Rows::Select(s)
    }
}

impl From<EveryNthRow> for Rows {
    fn from(s: EveryNthRow) -> Self {
        Rows::Select(s.into())
    }
}

impl From<FirstNRows> for Rows {
    fn from(s: FirstNRows) -> Self {
        Rows::Select(s.into())
    }
}

impl From<LastNRows> for Rows {
    fn from(s: LastNRows) -> Self {
        Rows::Select(s.into())
    }
}

impl From<Vec<usize>> for Rows {
    fn from(indices: Vec<usize>) -> Self {
        Rows::Indices(indices)
    }
}

/// Resolve `rows` against `data` into sorted, de-duplicated row indices.
pub fn resolve_rows<S>(rows: &Rows, data: &S) -> Result<Vec<usize>>
where
    S: TabularSource + ?Sized,
{
    let row_count = data.row_count();
    match rows {
        Rows::All => Ok((0..row_count).collect()),
        Rows::Indices(indices) => {
            if let Some(bad) = indices.iter().find(|&&i| i >= row_count) {
                return Err(SelectError::invalid(format!(
                    "row index {bad} is out of bounds for {row_count} rows."
                )));
            }
            let mut out = indices.clone();
            out.sort_unstable();
            out.dedup();
            Ok(out)
        }
        Rows::Select(selector) => Ok(evaluate(*selector, row_count)?.selected_indices()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Table, Value};
    use crate::select::selector::{every_n_row, every_n_row_with_offset, last_n_row};

    fn table() -> Table {
        Table::from_column("col1", (0..5i64).map(Value::from).collect())
    }

    #[test]
    fn all_rows_by_default() {
        assert_eq!(resolve_rows(&Rows::default(), &table()).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn explicit_indices_are_sorted_and_checked() {
        let rows = Rows::from(vec![3, 1, 3]);
        assert_eq!(resolve_rows(&rows, &table()).unwrap(), vec![1, 3]);

        let err = resolve_rows(&Rows::from(vec![5]), &table()).unwrap_err();
        assert_eq!(err.to_string(), "row index 5 is out of bounds for 5 rows.");
    }

    #[test]
    fn selectors_resolve_to_indices() {
        let rows = Rows::from(every_n_row_with_offset(3, 1).unwrap());
        assert_eq!(resolve_rows(&rows, &table()).unwrap(), vec![1, 4]);

        let rows = Rows::from(last_n_row(2).unwrap());
        assert_eq!(resolve_rows(&rows, &table()).unwrap(), vec![3, 4]);
    }

    #[test]
    fn selector_errors_propagate() {
        let rows = Rows::from(every_n_row(5).unwrap());
        assert!(resolve_rows(&rows, &table()).is_err());
    }
}
