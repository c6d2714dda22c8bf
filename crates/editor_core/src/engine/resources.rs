//! Geometry resource store
//!
//! Tracks every engine-side geometry allocation behind a generational
//! handle. Disposal of a game object releases its geometry here; the store
//! enforces the configured budget so allocation failures surface as errors
//! instead of unbounded growth.

use crate::foundation::collections::{new_key_type, HandleMap};
use super::mesh::Mesh;
use thiserror::Error;

new_key_type! {
    /// Stable handle to a geometry resource
    pub struct GeometryHandle;
}

/// Allocation errors from the engine-side stores
#[derive(Debug, Error)]
pub enum AllocationError {
    /// The geometry store is at its configured capacity
    #[error("geometry budget exceeded: {capacity} resources in use")]
    GeometryBudgetExceeded {
        /// Configured maximum number of geometry resources
        capacity: usize,
    },

    /// The object arena is at its configured capacity
    #[error("object budget exceeded: {capacity} objects in scene")]
    ObjectBudgetExceeded {
        /// Configured maximum number of game objects
        capacity: usize,
    },
}

/// A single engine-side geometry allocation
#[derive(Debug, Clone)]
pub struct GeometryResource {
    /// Mesh data owned by this resource
    pub mesh: Mesh,
}

/// Owning store of geometry resources
#[derive(Debug)]
pub struct ResourceStore {
    geometries: HandleMap<GeometryHandle, GeometryResource>,
    capacity: usize,
}

impl ResourceStore {
    /// Create an empty store with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            geometries: HandleMap::with_key(),
            capacity,
        }
    }

    /// Allocate a geometry resource for `mesh`
    ///
    /// # Errors
    /// Returns [`AllocationError::GeometryBudgetExceeded`] when the store
    /// is full. Allocation failures are not transient; callers should not
    /// retry.
    pub fn allocate(&mut self, mesh: Mesh) -> Result<GeometryHandle, AllocationError> {
        if self.geometries.len() >= self.capacity {
            return Err(AllocationError::GeometryBudgetExceeded {
                capacity: self.capacity,
            });
        }

        let handle = self.geometries.insert(GeometryResource { mesh });
        log::debug!("Allocated geometry resource {handle:?}");
        Ok(handle)
    }

    /// Release the resource behind `handle`, returning it if it was live
    ///
    /// Releasing an already-released handle is a no-op; the caller that
    /// owned the handle has already given it up.
    pub fn release(&mut self, handle: GeometryHandle) -> Option<GeometryResource> {
        let released = self.geometries.remove(handle);
        if released.is_some() {
            log::debug!("Released geometry resource {handle:?}");
        }
        released
    }

    /// Get the resource behind `handle`
    pub fn get(&self, handle: GeometryHandle) -> Option<&GeometryResource> {
        self.geometries.get(handle)
    }

    /// Whether `handle` refers to a live resource
    pub fn contains(&self, handle: GeometryHandle) -> bool {
        self.geometries.contains_key(handle)
    }

    /// Number of live resources
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    /// Whether the store holds no resources
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}
