//! Lazily resolved value backed by one key in a [`KeyValueStore`].

use tracing::{debug, warn};

use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::store::KeyValueStore;

/// A scalar that can live under a single store key as a string.
/// `Default` is the value used when the key is absent or unreadable.
pub trait Persisted: Copy + Default + PartialEq + std::fmt::Debug {
    const KEY: &'static str;

    fn to_stored(&self) -> &str;
    fn from_stored(value: &str) -> Option<Self>;
}

/// Cached view of a persisted scalar.
///
/// The store is read at most once, on first `get`. Reads never write back,
/// so an absent key stays absent until `set` is called.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersistedValue<T: Persisted> {
    cached: Option<T>,
}

impl<T: Persisted> PersistedValue<T> {
    pub fn new() -> Self {
        Self { cached: None }
    }

    pub fn cached(&self) -> Option<T> {
        self.cached
    }

    pub fn get<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> Result<T> {
        if let Some(value) = self.cached {
            return Ok(value);
        }

        let value = match store.get(T::KEY)? {
            Some(raw) => T::from_stored(&raw).unwrap_or_else(|| {
                warn!(key = T::KEY, value = %raw, "ignoring unrecognised stored value");
                T::default()
            }),
            None => T::default(),
        };
        debug!(key = T::KEY, ?value, "resolved persisted value");

        self.cached = Some(value);
        Ok(value)
    }

    /// Write `value` to the store, then cache it. A failed write leaves the
    /// cache untouched.
    pub fn set<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, value: T) -> Result<()> {
        store.set(T::KEY, value.to_stored())?;
        self.cached = Some(value);
        Ok(())
    }
}
