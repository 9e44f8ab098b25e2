//! Selectable places. Position in the catalog is both display order and the
//! index the selection state refers to.

use crate::types::{CatalogError, Place};

const BUILTIN_PLACES: [&str; 6] = [
    "Seattle, WA",
    "San Francisco, CA",
    "New York, NY",
    "London, UK",
    "Paris, France",
    "Tokyo, Japan",
];

/// Immutable, ordered, non-empty list of places
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl PlaceCatalog {
    /// Build a catalog, rejecting an empty list or a blank name.
    pub fn new(places: Vec<Place>) -> Result<Self, CatalogError> {
        if places.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(pos) = places
            .iter()
            .position(|p| p.display_name.trim().is_empty())
        {
            return Err(CatalogError::BlankName(pos));
        }
        Ok(Self { places })
    }

    pub fn from_names<I, S>(names: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Place::new).collect())
    }

    /// The compiled-in catalog
    pub fn builtin() -> Self {
        Self {
            places: BUILTIN_PLACES.iter().copied().map(Place::new).collect(),
        }
    }

    pub fn list(&self) -> &[Place] {
        &self.places
    }

    pub fn get(&self, index: usize) -> Option<&Place> {
        self.places.get(index)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
