use std::collections::HashMap;

use crate::core::aliases::EntryId;
use crate::core::models::BaseEntity;
use crate::errors::{Error, Result};

/// Id-keyed collection. Ids are allocated monotonically and never reused, so
/// ascending id order is insertion order.
#[derive(Debug)]
pub struct Repository<T: BaseEntity> {
    items: HashMap<EntryId, T>,
    next_id: EntryId,
}

impl<T: BaseEntity> Default for Repository<T> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1,
        }
    }
}

impl<T: BaseEntity> Repository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn insert(&mut self, mut entity: T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        entity.set_id(id);
        self.items.entry(id).or_insert(entity)
    }

    /// Inserts an entity that already carries its id (used when restoring).
    pub fn insert_with_id(&mut self, entity: T) -> Result<()> {
        let id = entity.id();
        if id <= 0 {
            return Err(Error::Parse("ID must be positive.".into()));
        }
        if self.items.contains_key(&id) {
            return Err(Error::Parse(format!(
                "Entity with id {} already exists.",
                id
            )));
        }
        self.next_id = self.next_id.max(id + 1);
        self.items.insert(id, entity);
        Ok(())
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.items.get(&id)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        self.items.get_mut(&id)
    }

    pub fn delete(&mut self, id: EntryId) -> Option<T> {
        self.items.remove(&id)
    }

    /// Drops every entity. Id allocation continues where it was.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Every entity in ascending id order.
    pub fn values(&self) -> Vec<&T> {
        let mut v: Vec<&T> = self.items.values().collect();
        v.sort_by_key(|e| e.id());
        v
    }

    pub fn query(&self) -> Query<'_, T> {
        Query::new(self)
    }
}

pub struct Query<'a, T: BaseEntity> {
    repo: &'a Repository<T>,
    filters: Vec<Box<dyn Fn(&T) -> bool + 'a>>,
}

impl<'a, T: BaseEntity> Query<'a, T> {
    fn new(repo: &'a Repository<T>) -> Self {
        Self {
            repo,
            filters: Vec::new(),
        }
    }

    pub fn r#where(mut self, pred: impl Fn(&T) -> bool + 'a) -> Self {
        self.filters.push(Box::new(pred));
        self
    }

    fn matches(&self, entity: &T) -> bool {
        self.filters.iter().all(|f| f(entity))
    }

    pub fn exists(self) -> bool {
        self.repo.items.values().any(|e| self.matches(e))
    }
}
