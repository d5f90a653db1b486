use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::warn;
use shared::models::{Record, RecordId};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(RecordId),
}

#[derive(Debug)]
struct Inner<R> {
    records: HashMap<RecordId, R>,
    last_id: RecordId,
}

/// In-memory records keyed by a server-assigned id.
///
/// The map and the id counter share one lock, so every operation is
/// serialized against every other. Ids come from a counter that only moves
/// forward and are never handed out twice, even after a delete.
#[derive(Debug)]
pub struct RecordStore<R: Record> {
    inner: Mutex<Inner<R>>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: HashMap::new(),
                last_id: 0,
            }),
        }
    }

    // No operation panics between mutating the map and the counter, so a
    // poisoned guard still protects consistent data.
    fn lock(&self) -> MutexGuard<'_, Inner<R>> {
        self.inner.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("{} store lock was poisoned, recovering", R::KIND);
            poisoned.into_inner()
        })
    }

    /// Copies every record out of the store, in no particular order.
    pub fn list(&self) -> Vec<R> {
        self.lock().records.values().cloned().collect()
    }

    pub fn get(&self, id: RecordId) -> Result<R, StoreError> {
        self.lock()
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Stores `record` under the next id, discarding whatever id it carried.
    pub fn create(&self, mut record: R) -> R {
        let mut inner = self.lock();
        inner.last_id += 1;
        let id = inner.last_id;
        record.set_id(id);
        inner.records.insert(id, record.clone());
        record
    }

    /// Replaces the record at `id` wholesale. Nothing is merged from the
    /// previous value.
    pub fn update(&self, id: RecordId, mut record: R) -> Result<R, StoreError> {
        let mut inner = self.lock();
        let slot = inner.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        record.set_id(id);
        *slot = record.clone();
        Ok(record)
    }

    pub fn delete(&self, id: RecordId) -> Result<(), StoreError> {
        self.lock()
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
