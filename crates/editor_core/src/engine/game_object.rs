//! Game object nodes in the scene graph

use crate::foundation::collections::new_key_type;
use crate::foundation::math::Transform;
use super::resources::GeometryHandle;

new_key_type! {
    /// Generational identity of a game object
    ///
    /// Ids are never reused: once the object behind an id is disposed, the
    /// id stays stale forever. This is what lets stale selections be
    /// detected with a plain membership check.
    pub struct GameObjectId;
}

/// A node in the scene graph
///
/// Parent and child links form a forest: every non-root node has exactly
/// one parent and a node appears in exactly one parent's child list. Those
/// invariants are maintained by [`super::EngineState`], which owns all
/// nodes; this type is the stored data.
#[derive(Debug, Clone)]
pub struct GameObject {
    /// Display name for editor UI
    pub name: String,

    /// Local transform relative to the parent
    pub transform: Transform,

    pub(crate) parent: Option<GameObjectId>,
    pub(crate) children: Vec<GameObjectId>,
    pub(crate) geometry: Option<GeometryHandle>,
}

impl GameObject {
    /// Create a detached node with no geometry
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            parent: None,
            children: Vec::new(),
            geometry: None,
        }
    }

    /// Id of the parent node, if attached
    pub fn parent(&self) -> Option<GameObjectId> {
        self.parent
    }

    /// Child ids in attachment order
    pub fn children(&self) -> &[GameObjectId] {
        &self.children
    }

    /// Geometry resource bound to this node, if any
    pub fn geometry(&self) -> Option<GeometryHandle> {
        self.geometry
    }
}
