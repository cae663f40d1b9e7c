//! Repository layer: the in-memory entity store

pub mod authors;
pub mod books;
pub mod seed;

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Author, Book, Entity};

/// Records of one kind, kept in insertion order.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn find(&self, id: i32) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn find_index(&self, id: i32) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    pub fn replace_at(&mut self, index: usize, record: T) -> T {
        std::mem::replace(&mut self.records[index], record)
    }

    pub fn remove_at(&mut self, index: usize) -> T {
        self.records.remove(index)
    }

    /// `max(id) + 1`, or 1 when empty. Deleting the highest id frees it for reuse.
    pub fn next_id(&self) -> i32 {
        self.records.iter().map(Entity::id).max().map_or(1, |max| max + 1)
    }
}

/// Both collections; the single source of truth for the service.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub authors: Collection<Author>,
    pub books: Collection<Book>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the sample catalog
    pub fn seeded() -> Self {
        Self {
            authors: Collection::from_records(seed::authors()),
            books: Collection::from_records(seed::books()),
        }
    }
}

/// Shared handle to the store. Each request holds one guard for its whole
/// read pipeline or mutation, so it works against a stable snapshot.
#[derive(Clone, Default)]
pub struct Repository {
    store: Arc<RwLock<Store>>,
}

impl Repository {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().await
    }
}
