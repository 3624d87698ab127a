//! Keyed model collections
//!
//! `GenericCollection` stores any [`EntityModel`] by id. Specialized
//! collections wrap it with domain queries, such as the client roster.

pub mod roster;

pub use roster::CaseRoster;

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::models::EntityModel;

/// Core trait for model collections
pub trait ModelCollection<T: EntityModel>: Send + Sync + std::fmt::Debug {
    /// Add a model to the collection, replacing any model with the same id
    fn add(&mut self, model: T);

    /// Get a model by its identifier
    fn get(&self, id: &T::Id) -> Option<Arc<T>>;

    /// Get all models in the collection
    fn all(&self) -> Vec<Arc<T>>;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool;

    /// Check if the collection contains a model with the given ID
    fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Add multiple models to the collection
    fn add_all(&mut self, models: Vec<T>) {
        for model in models {
            self.add(model);
        }
    }
}

/// Generic model collection implementation
///
/// Models are stored behind `Arc` in a map indexed by their ID.
#[derive(Debug)]
pub struct GenericCollection<T: EntityModel> {
    items: FxHashMap<T::Id, Arc<T>>,
}

impl<T: EntityModel> GenericCollection<T> {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: FxHashMap::default(),
        }
    }

    /// Create a collection from a vector of models
    #[must_use]
    pub fn from_models(models: Vec<T>) -> Self {
        let mut collection = Self::new();
        collection.add_all(models);
        collection
    }

    /// Get all model IDs in the collection
    #[must_use]
    pub fn ids(&self) -> Vec<T::Id> {
        self.items.keys().cloned().collect()
    }

    /// Remove a model from the collection
    pub fn remove(&mut self, id: &T::Id) -> Option<Arc<T>> {
        self.items.remove(id)
    }

    /// Clear all models from the collection
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: EntityModel> Default for GenericCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EntityModel> ModelCollection<T> for GenericCollection<T> {
    fn add(&mut self, model: T) {
        let id = model.id().clone();
        self.items.insert(id, Arc::new(model));
    }

    fn get(&self, id: &T::Id) -> Option<Arc<T>> {
        self.items.get(id).cloned()
    }

    fn all(&self) -> Vec<Arc<T>> {
        self.items.values().cloned().collect()
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.items
            .values()
            .filter(|model| predicate(model))
            .cloned()
            .collect()
    }
}
