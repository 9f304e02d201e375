//! Row selectors for table styling.
//!
//! A selector describes which rows of a table a formatting or styling step
//! should touch. Applying it to a table yields a boolean mask in the table's
//! own column type.
//!
//! ```rust
//! use rowsel::{every_n_row, Table, Value};
//!
//! let table = Table::from_column("col1", (0..5i64).map(Value::from).collect());
//! let column = every_n_row(2)?.apply(&table)?;
//! assert_eq!(column.true_indices(), vec![0, 2, 4]);
//! # Ok::<(), rowsel::SelectError>(())
//! ```

pub mod data;
mod error;
pub mod select;

pub use data::{Column, Row, Table, Value};
pub use error::{Result, SelectError};
pub use select::{
    apply, apply_any, evaluate, every_n_row, every_n_row_with_offset, first_n_row, last_n_row,
    resolve_rows, CacheConfig, EveryNthRow, FirstNRows, LastNRows, Mask, MaskCache, NativeMask,
    Rows, Selector, TabularSource,
};
