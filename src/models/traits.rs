//! Trait definitions for domain models

use std::hash::Hash;

/// A trait that all identifiable domain models implement.
///
/// The `EntityModel` trait provides identifier access so models can be
/// stored in keyed collections and referenced from view state.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> &Self::Id;

    /// Create a unique key string representation of the identifier
    fn key(&self) -> String;
}

/// Implement [`EntityModel`] for a model with a `String` `id` field
macro_rules! string_entity {
    ($($ty:ty => $prefix:literal),+ $(,)?) => {
        $(
            impl $crate::models::traits::EntityModel for $ty {
                type Id = String;

                fn id(&self) -> &Self::Id {
                    &self.id
                }

                fn key(&self) -> String {
                    format!("{}:{}", $prefix, self.id)
                }
            }
        )+
    };
}

pub(crate) use string_entity;
