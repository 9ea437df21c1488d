//! Insertion-ordered keyed table

use std::collections::HashMap;

use murmur_core::EntityId;

/// Rows keyed by id, iterated in insertion order
#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: HashMap<EntityId, T>,
    order: Vec<EntityId>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    /// Insert a new row; returns false (and leaves the table untouched) on duplicate id
    pub(crate) fn insert(&mut self, id: EntityId, row: T) -> bool {
        if self.rows.contains_key(&id) {
            return false;
        }
        self.rows.insert(id, row);
        self.order.push(id);
        true
    }

    pub(crate) fn get(&self, id: EntityId) -> Option<&T> {
        self.rows.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub(crate) fn contains(&self, id: EntityId) -> bool {
        self.rows.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Rows in insertion order
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.rows.get(id))
    }
}
