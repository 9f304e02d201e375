use std::fmt;
use std::ops::Not;

use crate::error::{Result, SelectError};

pub(crate) const MSG_N_POSITIVE: &str = "n must be a positive integer greater than 0.";
pub(crate) const MSG_OFFSET_NEGATIVE: &str = "offset must not be a negative integer.";
// Bounds the offset against `n`; the wording is kept stable for callers
// matching on it.
pub(crate) const MSG_OFFSET_TOO_LARGE: &str = "offset must be less than n_rows.";

fn check_n(n: i64) -> Result<usize> {
    if n <= 0 {
        return Err(SelectError::invalid(MSG_N_POSITIVE));
    }
    usize::try_from(n).map_err(|_| SelectError::invalid(MSG_N_POSITIVE))
}

// ---------------------------------------------------------------------------
// EveryNthRow
// ---------------------------------------------------------------------------

/// Selects every `n`-th row, starting at `offset`.
///
/// Row `i` (0-based) is included when `i % n == offset`, or when it is not,
/// for an inverted selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EveryNthRow {
    n: usize,
    offset: usize,
    invert: bool,
}

impl EveryNthRow {
    /// Build a selector, failing fast on a non-positive `n` or an offset
    /// outside `0..n`.
    pub fn new(n: i64, offset: i64) -> Result<Self> {
        let n_checked = check_n(n)?;
        if offset < 0 {
            return Err(SelectError::invalid(MSG_OFFSET_NEGATIVE));
        }
        if offset > n - 1 {
            return Err(SelectError::invalid(MSG_OFFSET_TOO_LARGE));
        }
        Ok(Self {
            n: n_checked,
            // 0 <= offset < n, so this fits.
            offset: offset as usize,
            invert: false,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    /// The complementary selector. Applying it twice gives back `self`.
    pub fn invert(self) -> Self {
        Self {
            invert: !self.invert,
            ..self
        }
    }
}

impl Not for EveryNthRow {
    type Output = EveryNthRow;

    fn not(self) -> Self::Output {
        self.invert()
    }
}

impl fmt::Display for EveryNthRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.invert {
            write!(f, "~")?;
        }
        write!(f, "every_n_row(n={}, offset={})", self.n, self.offset)
    }
}

// ---------------------------------------------------------------------------
// FirstNRows / LastNRows
// ---------------------------------------------------------------------------

/// Selects the first `n` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FirstNRows {
    n: usize,
}

impl FirstNRows {
    pub fn new(n: i64) -> Result<Self> {
        Ok(Self { n: check_n(n)? })
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

impl fmt::Display for FirstNRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "first_n_row(n={})", self.n)
    }
}

/// Selects the last `n` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastNRows {
    n: usize,
}

impl LastNRows {
    pub fn new(n: i64) -> Result<Self> {
        Ok(Self { n: check_n(n)? })
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

impl fmt::Display for LastNRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "last_n_row(n={})", self.n)
    }
}

// ---------------------------------------------------------------------------
// Selector – the closed family
// ---------------------------------------------------------------------------

/// Any row selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    EveryNth(EveryNthRow),
    First(FirstNRows),
    Last(LastNRows),
}

impl From<EveryNthRow> for Selector {
    fn from(s: EveryNthRow) -> Self {
        Selector::EveryNth(s)
    }
}

impl From<FirstNRows> for Selector {
    fn from(s: FirstNRows) -> Self {
        Selector::First(s)
    }
}

impl From<LastNRows> for Selector {
    fn from(s: LastNRows) -> Self {
        Selector::Last(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::EveryNth(s) => s.fmt(f),
            Selector::First(s) => s.fmt(f),
            Selector::Last(s) => s.fmt(f),
        }
    }
}

/// `every_n_row(n)` with a zero offset.
pub fn every_n_row(n: i64) -> Result<EveryNthRow> {
    EveryNthRow::new(n, 0)
}

pub fn every_n_row_with_offset(n: i64, offset: i64) -> Result<EveryNthRow> {
    EveryNthRow::new(n, offset)
}

pub fn first_n_row(n: i64) -> Result<FirstNRows> {
    FirstNRows::new(n)
}

pub fn last_n_row(n: i64) -> Result<LastNRows> {
    LastNRows::new(n)
}
