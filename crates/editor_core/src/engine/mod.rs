//! Engine-side state: the owning scene graph and its resources
//!
//! This module is the single source of truth for graph membership. It owns
//! the game-object arena, the geometry resource store, and the active scene.
//! Higher-level policy (selection, lifecycle orchestration, error taxonomy)
//! lives in [`crate::editor`]; this layer only provides the owning storage
//! and the low-level graph surgery that keeps the forest invariants intact.

mod mesh;
mod resources;
mod game_object;
mod state;

pub use mesh::{Mesh, Vertex};
pub use resources::{AllocationError, GeometryHandle, GeometryResource, ResourceStore};
pub use game_object::{GameObject, GameObjectId};
pub use state::{EngineState, Scene};
