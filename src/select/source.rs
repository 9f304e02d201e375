//! Adapting selectors to concrete table representations.
//!
//! Every supported representation implements [`TabularSource`]: it reports
//! its row count and knows how to wrap a [`Mask`] in its own boolean column
//! type. Selection logic itself never looks past that trait.

use std::any::Any;

use arrow::array::BooleanArray;
use arrow::record_batch::RecordBatch;

use super::mask::{evaluate, Mask};
use super::selector::{EveryNthRow, FirstNRows, LastNRows, Selector};
use crate::data::{Column, Table, Value};
use crate::error::{Result, SelectError};

/// A table a selector can run against.
pub trait TabularSource {
    /// The representation's boolean column type.
    type Column;

    fn row_count(&self) -> usize;

    /// Wrap `mask` so it lines up with this table's rows.
    fn attach_boolean_column(&self, mask: &Mask) -> Self::Column;
}

impl TabularSource for Table {
    type Column = Column;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn attach_boolean_column(&self, mask: &Mask) -> Column {
        Column::new(mask.iter().copied().map(Value::Bool).collect())
    }
}

impl TabularSource for RecordBatch {
    type Column = BooleanArray;

    fn row_count(&self) -> usize {
        self.num_rows()
    }

    fn attach_boolean_column(&self, mask: &Mask) -> BooleanArray {
        BooleanArray::from(mask.to_vec())
    }
}

/// Chunked batches (e.g. a Parquet read) act as one table; the mask spans
/// all of them in order.
impl TabularSource for [RecordBatch] {
    type Column = BooleanArray;

    fn row_count(&self) -> usize {
        self.iter().map(RecordBatch::num_rows).sum()
    }

    fn attach_boolean_column(&self, mask: &Mask) -> BooleanArray {
        BooleanArray::from(mask.to_vec())
    }
}

impl TabularSource for Vec<RecordBatch> {
    type Column = BooleanArray;

    fn row_count(&self) -> usize {
        self.as_slice().row_count()
    }

    fn attach_boolean_column(&self, mask: &Mask) -> BooleanArray {
        self.as_slice().attach_boolean_column(mask)
    }
}

/// Run `selector` against `data` and return the mask in `data`'s own
/// boolean column type.
pub fn apply<S>(selector: impl Into<Selector>, data: &S) -> Result<S::Column>
where
    S: TabularSource + ?Sized,
{
    let mask = evaluate(selector, data.row_count())?;
    Ok(data.attach_boolean_column(&mask))
}

// ---------------------------------------------------------------------------
// Runtime dispatch
// ---------------------------------------------------------------------------

/// Boolean column produced by [`apply_any`].
#[derive(Debug, Clone, PartialEq)]
pub enum NativeMask {
    Table(Column),
    Arrow(BooleanArray),
}

impl NativeMask {
    pub fn len(&self) -> usize {
        match self {
            NativeMask::Table(col) => col.len(),
            NativeMask::Arrow(arr) => arr.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Plain booleans, whatever the representation.
    pub fn to_bools(&self) -> Vec<bool> {
        match self {
            NativeMask::Table(col) => col
                .values
                .iter()
                .map(|v| v.as_bool().unwrap_or(false))
                .collect(),
            NativeMask::Arrow(arr) => arr.iter().map(|v| v.unwrap_or(false)).collect(),
        }
    }
}

/// Like [`apply`], but picks the representation at runtime.
///
/// Data whose type has no [`TabularSource`] adaptation fails with
/// [`SelectError::UnsupportedRepresentation`].
pub fn apply_any<T: Any>(selector: impl Into<Selector>, data: &T) -> Result<NativeMask> {
    let any = data as &dyn Any;

    if let Some(table) = any.downcast_ref::<Table>() {
        return apply(selector, table).map(NativeMask::Table);
    }
    if let Some(batch) = any.downcast_ref::<RecordBatch>() {
        return apply(selector, batch).map(NativeMask::Arrow);
    }
    if let Some(batches) = any.downcast_ref::<Vec<RecordBatch>>() {
        return apply(selector, batches).map(NativeMask::Arrow);
    }

    Err(SelectError::UnsupportedRepresentation {
        type_name: std::any::type_name::<T>(),
    })
}

// -- callable-value style: `selector.apply(&data)` --

impl Selector {
    pub fn apply<S: TabularSource + ?Sized>(&self, data: &S) -> Result<S::Column> {
        apply(*self, data)
    }
}

impl EveryNthRow {
    pub fn apply<S: TabularSource + ?Sized>(&self, data: &S) -> Result<S::Column> {
        apply(*self, data)
    }
}

impl FirstNRows {
    pub fn apply<S: TabularSource + ?Sized>(&self, data: &S) -> Result<S::Column> {
        apply(*self, data)
    }
}

impl LastNRows {
    pub fn apply<S: TabularSource + ?Sized>(&self, data: &S) -> Result<S::Column> {
        apply(*self, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use arrow::array::{Array, Int64Array};
    use arrow::datatypes::{DataType, Field, Schema};

    use crate::select::selector::{every_n_row, first_n_row, last_n_row};

    fn batch(values: Vec<i64>) -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![Field::new("col1", DataType::Int64, false)]));
        RecordBatch::try_new(schema, vec![Arc::new(Int64Array::from(values))]).unwrap()
    }

    fn table(n: i64) -> Table {
        Table::from_column("col1", (0..n).map(Value::from).collect())
    }

    #[test]
    fn table_gets_a_bool_column() {
        let col = every_n_row(2).unwrap().apply(&table(5)).unwrap();
        assert_eq!(col.as_bools(), Some(vec![true, false, true, false, true]));
        assert_eq!(col.true_indices(), vec![0, 2, 4]);
    }

    #[test]
    fn record_batch_gets_a_boolean_array() {
        let arr = last_n_row(2).unwrap().apply(&batch(vec![0, 1, 2, 3, 4])).unwrap();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr.null_count(), 0);
        assert_eq!(
            arr.iter().collect::<Vec<_>>(),
            vec![Some(false), Some(false), Some(false), Some(true), Some(true)]
        );
    }

    #[test]
    fn chunked_batches_span_all_rows() {
        let batches = vec![batch(vec![0, 1, 2]), batch(vec![3, 4])];
        assert_eq!(batches.row_count(), 5);
        let arr = apply(every_n_row(3).unwrap(), batches.as_slice()).unwrap();
        assert_eq!(arr.true_count(), 2);
        assert!(arr.value(0) && arr.value(3));
    }

    #[test]
    fn size_errors_pass_through() {
        let err = first_n_row(6).unwrap().apply(&table(5)).unwrap_err();
        assert!(matches!(err, SelectError::InvalidArgument(_)));
    }

    #[test]
    fn apply_any_dispatches() {
        let sel = every_n_row(2).unwrap();
        let from_table = apply_any(sel, &table(5)).unwrap();
        let from_batch = apply_any(sel, &batch(vec![0, 1, 2, 3, 4])).unwrap();
        assert!(matches!(from_table, NativeMask::Table(_)));
        assert!(matches!(from_batch, NativeMask::Arrow(_)));
        assert_eq!(from_table.to_bools(), from_batch.to_bools());
    }

    #[test]
    fn apply_any_rejects_unknown_types() {
        let err = apply_any(every_n_row(2).unwrap(), &vec![1, 2, 3]).unwrap_err();
        match err {
            SelectError::UnsupportedRepresentation { type_name } => {
                assert!(type_name.contains("Vec<i32>"), "{type_name}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
