//! Row selectors.
//!
//! ```text
//!   every_n_row / first_n_row / last_n_row   (validated on construction)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │   mask    │  evaluate(selector, row_count) → Mask, memoized
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  source   │  TabularSource: row count in, native bool column out
//!   └──────────┘
//! ```

pub mod mask;
pub mod rows;
pub mod selector;
pub mod source;

pub use mask::{evaluate, CacheConfig, Mask, MaskCache};
pub use rows::{resolve_rows, Rows};
pub use selector::{
    every_n_row, every_n_row_with_offset, first_n_row, last_n_row, EveryNthRow, FirstNRows,
    LastNRows, Selector,
};
pub use source::{apply, apply_any, NativeMask, TabularSource};
