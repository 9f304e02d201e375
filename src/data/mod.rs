//! Data layer: the row table representation and its loaders.
//!
//! ```text
//!  .json / .csv          .parquet
//!        │                   │
//!        ▼                   ▼
//!   ┌──────────┐       ┌──────────────┐
//!   │  loader   │       │ read_parquet │
//!   └──────────┘       └──────────────┘
//!        │                   │
//!        ▼                   ▼
//!     Table            Vec<RecordBatch>
//! ```

pub mod loader;
pub mod model;

pub use model::{Column, Row, Table, Value};
