//! Mask computation and the memo table behind it.
//!
//! A mask is a pure function of the selector and the row count, so masks are
//! memoized per `(variant, row_count, n, offset, invert)`. The cache never
//! changes what a caller observes, only how often a mask is rebuilt.

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use super::selector::Selector;
use crate::error::{Result, SelectError};

pub(crate) const MSG_N_NOT_LESS: &str = "n must be less than n_rows.";
pub(crate) const MSG_N_NOT_LESS_OR_EQUAL: &str = "n must be less than or equal to n_rows.";

// ---------------------------------------------------------------------------
// Mask
// ---------------------------------------------------------------------------

/// One boolean per row; `true` means the row is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask(Arc<[bool]>);

impl Mask {
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// 0-based indices of the selected rows, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, keep)| **keep)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn count_selected(&self) -> usize {
        self.0.iter().filter(|keep| **keep).count()
    }

    pub fn to_vec(&self) -> Vec<bool> {
        self.0.to_vec()
    }
}

impl Deref for Mask {
    type Target = [bool];

    fn deref(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for Mask {
    fn from(values: Vec<bool>) -> Self {
        Mask(values.into())
    }
}

// ---------------------------------------------------------------------------
// Cache configuration
// ---------------------------------------------------------------------------

/// Sizing for a [`MaskCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of masks held at once. `0` turns caching off.
    pub capacity: usize,
}

impl CacheConfig {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn unbounded() -> Self {
        Self {
            capacity: usize::MAX,
        }
    }

    pub fn disabled() -> Self {
        Self { capacity: 0 }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
        }
    }
}

// ---------------------------------------------------------------------------
// MaskCache
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum MaskKey {
    EveryNth {
        row_count: usize,
        n: usize,
        offset: usize,
        invert: bool,
    },
    First {
        row_count: usize,
        n: usize,
    },
    Last {
        row_count: usize,
        n: usize,
    },
}

/// Memo table of computed masks, safe to share between threads.
///
/// Lookups take a read lock, so concurrent readers never block each other.
/// When the table reaches capacity it is cleared wholesale before the next
/// insert.
#[derive(Debug, Default)]
pub struct MaskCache {
    config: CacheConfig,
    entries: RwLock<HashMap<MaskKey, Mask>>,
}

static GLOBAL_CACHE: Lazy<MaskCache> = Lazy::new(MaskCache::default);

impl MaskCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide cache used by [`evaluate`].
    pub fn global() -> &'static MaskCache {
        &GLOBAL_CACHE
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Compute the mask for `selector` over `row_count` rows, reusing a
    /// previously computed one when available.
    pub fn evaluate(&self, selector: impl Into<Selector>, row_count: usize) -> Result<Mask> {
        let selector = selector.into();
        check_row_count(&selector, row_count)?;
        let key = mask_key(&selector, row_count);

        if self.config.capacity == 0 {
            return Ok(build_mask(key));
        }

        // Entries are pure derived data, so a poisoned lock is still usable.
        if let Some(mask) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            log::trace!("mask cache hit for {selector} over {row_count} rows");
            return Ok(mask.clone());
        }

        let mask = build_mask(key);
        log::debug!("computed mask for {selector} over {row_count} rows");

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.config.capacity && !entries.contains_key(&key) {
            log::debug!(
                "mask cache reached capacity ({}), clearing",
                self.config.capacity
            );
            entries.clear();
        }
        Ok(entries.entry(key).or_insert(mask).clone())
    }
}

/// Evaluate `selector` against `row_count` rows using the global cache.
pub fn evaluate(selector: impl Into<Selector>, row_count: usize) -> Result<Mask> {
    MaskCache::global().evaluate(selector, row_count)
}

// -- helpers --

fn check_row_count(selector: &Selector, row_count: usize) -> Result<()> {
    match selector {
        Selector::EveryNth(s) if s.n() >= row_count => Err(SelectError::invalid(MSG_N_NOT_LESS)),
        Selector::First(s) if s.n() > row_count => {
            Err(SelectError::invalid(MSG_N_NOT_LESS_OR_EQUAL))
        }
        Selector::Last(s) if s.n() > row_count => {
            Err(SelectError::invalid(MSG_N_NOT_LESS_OR_EQUAL))
        }
        _ => Ok(()),
    }
}

fn mask_key(selector: &Selector, row_count: usize) -> MaskKey {
    match *selector {
        Selector::EveryNth(s) => MaskKey::EveryNth {
            row_count,
            n: s.n(),
            offset: s.offset(),
            invert: s.is_inverted(),
        },
        Selector::First(s) => MaskKey::First { row_count, n: s.n() },
        Selector::Last(s) => MaskKey::Last { row_count, n: s.n() },
    }
}

fn build_mask(key: MaskKey) -> Mask {
    let values: Vec<bool> = match key {
        MaskKey::EveryNth {
            row_count,
            n,
            offset,
            invert,
        } => (0..row_count).map(|i| (i % n == offset) != invert).collect(),
        MaskKey::First { row_count, n } => (0..row_count).map(|i| i < n).collect(),
        MaskKey::Last { row_count, n } => (0..row_count).map(|i| i >= row_count - n).collect(),
    };
    Mask::from(values)
}
