//! Owning engine state: object arena, resource store, active scene

use crate::config::EditorConfig;
use crate::foundation::collections::HandleMap;
use super::game_object::{GameObject, GameObjectId};
use super::mesh::Mesh;
use super::resources::{AllocationError, GeometryHandle, ResourceStore};

/// The active scene: a handle to the root of the object forest
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    root: GameObjectId,
}

impl Scene {
    /// Id of the scene's root game object
    pub fn root(&self) -> GameObjectId {
        self.root
    }
}

/// Owning store of the live scene graph and engine resources
///
/// `EngineState` is the single source of truth for graph membership. It is
/// threaded through editor operations by exclusive ownership; no aliasing
/// across sessions. Mutating entry points are `pub(crate)`: callers go
/// through [`crate::editor`], which enforces the lifecycle policy (missing
/// ids fail loud, children are disposed before their parent).
#[derive(Debug)]
pub struct EngineState {
    objects: HandleMap<GameObjectId, GameObject>,
    resources: ResourceStore,
    scene: Option<Scene>,
    max_objects: usize,
}

impl EngineState {
    /// Create engine state with an active scene and its root object
    pub fn new(config: &EditorConfig) -> Self {
        let mut objects: HandleMap<GameObjectId, GameObject> = HandleMap::with_key();
        let root = objects.insert(GameObject::new("Scene Root"));
        log::info!("Created engine state, scene root {root:?}");

        Self {
            objects,
            resources: ResourceStore::new(config.max_geometries),
            scene: Some(Scene { root }),
            max_objects: config.max_objects,
        }
    }

    /// Create engine state with no active scene
    ///
    /// Normal operation always has a scene; this exists so the no-scene
    /// failure path stays testable.
    pub fn without_scene(config: &EditorConfig) -> Self {
        Self {
            objects: HandleMap::with_key(),
            resources: ResourceStore::new(config.max_geometries),
            scene: None,
            max_objects: config.max_objects,
        }
    }

    /// The active scene, if any
    pub fn scene(&self) -> Option<Scene> {
        self.scene
    }

    /// Whether `id` refers to a live game object
    pub fn contains(&self, id: GameObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// The game object behind `id`
    pub fn object(&self, id: GameObjectId) -> Option<&GameObject> {
        self.objects.get(id)
    }

    /// Child ids of `id` in attachment order
    pub fn children(&self, id: GameObjectId) -> Option<&[GameObjectId]> {
        self.objects.get(id).map(GameObject::children)
    }

    /// Number of live game objects (including the scene root)
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// The geometry resource store
    pub fn resources(&self) -> &ResourceStore {
        &self.resources
    }

    /// Whether `ancestor` lies on `id`'s parent chain (or is `id` itself)
    pub fn is_ancestor_of(&self, ancestor: GameObjectId, id: GameObjectId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.objects.get(current).and_then(GameObject::parent);
        }
        false
    }

    /// Insert a fresh detached node into the arena
    pub(crate) fn spawn_object(
        &mut self,
        name: impl Into<String>,
    ) -> Result<GameObjectId, AllocationError> {
        if self.objects.len() >= self.max_objects {
            return Err(AllocationError::ObjectBudgetExceeded {
                capacity: self.max_objects,
            });
        }
        Ok(self.objects.insert(GameObject::new(name)))
    }

    /// Allocate geometry in the resource store
    pub(crate) fn allocate_geometry(
        &mut self,
        mesh: Mesh,
    ) -> Result<GeometryHandle, AllocationError> {
        self.resources.allocate(mesh)
    }

    /// Release a geometry resource that is not bound to any node
    pub(crate) fn release_geometry(&mut self, geometry: GeometryHandle) {
        self.resources.release(geometry);
    }

    /// Bind a geometry resource to a live node
    pub(crate) fn bind_geometry(&mut self, id: GameObjectId, geometry: GeometryHandle) {
        debug_assert!(self.resources.contains(geometry));
        if let Some(node) = self.objects.get_mut(id) {
            node.geometry = Some(geometry);
        }
    }

    /// Link `child` under `parent`
    ///
    /// Preconditions (checked by the lifecycle layer, asserted here): both
    /// nodes are live, `child` is detached, and `parent` is not in
    /// `child`'s subtree.
    pub(crate) fn attach(&mut self, parent: GameObjectId, child: GameObjectId) {
        debug_assert!(self.contains(parent));
        debug_assert!(self.contains(child));
        debug_assert!(self.objects[child].parent.is_none());
        debug_assert!(!self.is_ancestor_of(child, parent));

        self.objects[child].parent = Some(parent);
        self.objects[parent].children.push(child);
    }

    /// Unlink `id` from its parent's child list
    pub(crate) fn detach(&mut self, id: GameObjectId) {
        let Some(parent) = self.objects.get(id).and_then(GameObject::parent) else {
            return;
        };
        self.objects[id].parent = None;
        self.objects[parent].children.retain(|&child| child != id);
    }

    /// Remove a childless node from the arena, releasing its geometry
    pub(crate) fn remove_object(&mut self, id: GameObjectId) -> Option<GameObject> {
        debug_assert!(self
            .objects
            .get(id)
            .map_or(true, |node| node.children.is_empty()));

        self.detach(id);
        let node = self.objects.remove(id)?;
        if let Some(geometry) = node.geometry {
            self.resources.release(geometry);
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> EngineState {
        EngineState::new(&EditorConfig::default())
    }

    #[test]
    fn test_new_state_has_scene_root() {
        let engine = engine();
        let scene = engine.scene().unwrap();

        assert!(engine.contains(scene.root()));
        assert_eq!(engine.object_count(), 1);
    }

    #[test]
    fn test_attach_records_order_and_parent() {
        let mut engine = engine();
        let root = engine.scene().unwrap().root();

        let a = engine.spawn_object("A").unwrap();
        let b = engine.spawn_object("B").unwrap();
        engine.attach(root, a);
        engine.attach(root, b);

        assert_eq!(engine.children(root).unwrap(), &[a, b]);
        assert_eq!(engine.object(a).unwrap().parent(), Some(root));
    }

    #[test]
    fn test_remove_object_releases_geometry() {
        let mut engine = engine();
        let id = engine.spawn_object("Box").unwrap();
        let geometry = engine.allocate_geometry(Mesh::box_geometry(1.0)).unwrap();
        engine.bind_geometry(id, geometry);

        assert_eq!(engine.resources().len(), 1);
        engine.remove_object(id);

        assert!(!engine.contains(id));
        assert!(engine.resources().is_empty());
    }

    #[test]
    fn test_object_budget_is_enforced() {
        let config = EditorConfig {
            max_objects: 2,
            ..EditorConfig::default()
        };
        let mut engine = EngineState::new(&config);

        engine.spawn_object("A").unwrap();
        let err = engine.spawn_object("B").unwrap_err();
        assert!(matches!(
            err,
            AllocationError::ObjectBudgetExceeded { capacity: 2 }
        ));
    }

    #[test]
    fn test_is_ancestor_of_walks_parent_chain() {
        let mut engine = engine();
        let root = engine.scene().unwrap().root();
        let a = engine.spawn_object("A").unwrap();
        let b = engine.spawn_object("B").unwrap();
        engine.attach(root, a);
        engine.attach(a, b);

        assert!(engine.is_ancestor_of(root, b));
        assert!(engine.is_ancestor_of(a, b));
        assert!(!engine.is_ancestor_of(b, a));
    }
}
