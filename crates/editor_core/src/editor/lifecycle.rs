//! Game-object lifecycle: creation, attachment, disposal
//!
//! These operations are the only way game objects enter or leave the
//! graph. They enforce the lifecycle policy on top of
//! [`EngineState`]'s raw surgery: missing ids fail loud with
//! [`EditorError::ObjectNotFound`], attachment rejects duplicates and
//! cycles, and disposal always removes a whole subtree children-first so
//! no dangling graph entries or leaked geometry can remain.

use crate::engine::{EngineState, GameObjectId, GeometryHandle, Mesh};
use super::EditorError;

/// Kinds of primitive geometry the editor can create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Unit box centered at the origin
    Box,
}

impl PrimitiveKind {
    /// Display name used for the created game object
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Box => "Box",
        }
    }

    fn mesh(self) -> Mesh {
        match self {
            Self::Box => Mesh::box_geometry(0.5),
        }
    }
}

/// Binding of a created geometry resource to its game object, produced by
/// [`init_game_object`] and consumed by [`add_child`]
#[derive(Debug, Clone, Copy)]
pub struct ObjectInitData {
    object: GameObjectId,
    geometry: GeometryHandle,
}

impl ObjectInitData {
    /// The game object being initialized
    pub fn object(&self) -> GameObjectId {
        self.object
    }
}

/// Allocate geometry for `kind` and a fresh detached game object
///
/// The new object is not attached to any parent; callers follow up with
/// [`init_game_object`] and [`add_child`].
///
/// # Errors
/// Propagates [`crate::engine::AllocationError`] unchanged when an engine
/// budget is exhausted.
pub fn create_primitive(
    kind: PrimitiveKind,
    engine: &mut EngineState,
) -> Result<(GeometryHandle, GameObjectId), EditorError> {
    let geometry = engine.allocate_geometry(kind.mesh())?;
    let object = match engine.spawn_object(kind.display_name()) {
        Ok(object) => object,
        Err(err) => {
            // the handle never escapes, so the geometry must go with the error
            engine.release_geometry(geometry);
            return Err(err.into());
        }
    };
    log::debug!("Created {} primitive {object:?}", kind.display_name());
    Ok((geometry, object))
}

/// Bind a created geometry resource to the object identity prior to
/// attachment
pub fn init_game_object(object: GameObjectId, geometry: GeometryHandle) -> ObjectInitData {
    ObjectInitData { object, geometry }
}

/// Attach an initialized game object as the last child of `parent`
///
/// # Errors
/// - [`EditorError::ObjectNotFound`] if `parent` or the object is not live.
/// - [`EditorError::InvalidAttachment`] if the object already has a parent
///   or the link would close a cycle.
pub fn add_child(
    parent: GameObjectId,
    init: ObjectInitData,
    engine: &mut EngineState,
) -> Result<(), EditorError> {
    let child = init.object;
    if !engine.contains(parent) {
        return Err(EditorError::ObjectNotFound(parent));
    }
    let child_node = engine.object(child).ok_or(EditorError::ObjectNotFound(child))?;

    if child_node.parent().is_some() || engine.is_ancestor_of(child, parent) {
        return Err(EditorError::InvalidAttachment { parent, child });
    }

    engine.bind_geometry(child, init.geometry);
    engine.attach(parent, child);
    log::debug!("Attached {child:?} under {parent:?}");
    Ok(())
}

/// Dispose `id` and its entire subtree, children first
///
/// Each removed node's geometry resource is released with it.
///
/// # Errors
/// [`EditorError::ObjectNotFound`] if `id` is not in the graph; disposal
/// of an already-disposed object is a bug in the caller, not a no-op.
pub fn dispose_game_object(id: GameObjectId, engine: &mut EngineState) -> Result<(), EditorError> {
    if !engine.contains(id) {
        return Err(EditorError::ObjectNotFound(id));
    }

    let children: Vec<GameObjectId> = get_children(id, engine)?.collect();
    for child in children {
        dispose_game_object(child, engine)?;
    }

    engine.remove_object(id);
    log::debug!("Disposed game object {id:?}");
    Ok(())
}

/// Iterate the children of `id` in attachment order
///
/// The iterator is lazy and restartable; call again for a fresh pass.
///
/// # Errors
/// [`EditorError::ObjectNotFound`] if `id` is not in the graph.
pub fn get_children(
    id: GameObjectId,
    engine: &EngineState,
) -> Result<impl Iterator<Item = GameObjectId> + '_, EditorError> {
    engine
        .children(id)
        .ok_or(EditorError::ObjectNotFound(id))
        .map(|children| children.iter().copied())
}

/// Dispose all children of `id`, left to right; `id` itself survives
///
/// # Errors
/// [`EditorError::ObjectNotFound`] if `id` is not in the graph.
pub fn dispose_children(id: GameObjectId, engine: &mut EngineState) -> Result<(), EditorError> {
    let children: Vec<GameObjectId> = get_children(id, engine)?.collect();
    children
        .into_iter()
        .try_fold((), |(), child| dispose_game_object(child, engine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;

    fn engine_with_root() -> (EngineState, GameObjectId) {
        let engine = EngineState::new(&EditorConfig::default());
        let root = engine.scene().unwrap().root();
        (engine, root)
    }

    fn add_box(parent: GameObjectId, engine: &mut EngineState) -> GameObjectId {
        let (geometry, object) = create_primitive(PrimitiveKind::Box, engine).unwrap();
        add_child(parent, init_game_object(object, geometry), engine).unwrap();
        object
    }

    #[test]
    fn test_create_primitive_is_detached() {
        let (mut engine, _) = engine_with_root();
        let (geometry, object) = create_primitive(PrimitiveKind::Box, &mut engine).unwrap();

        assert!(engine.contains(object));
        assert!(engine.resources().contains(geometry));
        assert!(engine.object(object).unwrap().parent().is_none());
    }

    #[test]
    fn test_failed_create_releases_geometry() {
        // Root object fills the whole budget, so the spawn inside
        // create_primitive fails after geometry was already allocated.
        let config = EditorConfig {
            max_objects: 1,
            ..EditorConfig::default()
        };
        let mut engine = EngineState::new(&config);

        let err = create_primitive(PrimitiveKind::Box, &mut engine).unwrap_err();

        assert!(matches!(err, EditorError::Allocation(_)));
        assert!(engine.resources().is_empty());
    }

    #[test]
    fn test_add_child_binds_geometry() {
        let (mut engine, root) = engine_with_root();
        let object = add_box(root, &mut engine);

        let node = engine.object(object).unwrap();
        assert_eq!(node.parent(), Some(root));
        assert!(node.geometry().is_some());
    }

    #[test]
    fn test_duplicate_attachment_is_rejected() {
        let (mut engine, root) = engine_with_root();
        let (geometry, object) = create_primitive(PrimitiveKind::Box, &mut engine).unwrap();
        let init = init_game_object(object, geometry);

        add_child(root, init, &mut engine).unwrap();
        let err = add_child(root, init, &mut engine).unwrap_err();
        assert!(matches!(err, EditorError::InvalidAttachment { .. }));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let (mut engine, root) = engine_with_root();
        let a = add_box(root, &mut engine);
        let b = add_box(a, &mut engine);

        // Attaching an ancestor under its own descendant must fail
        let (geometry, c) = create_primitive(PrimitiveKind::Box, &mut engine).unwrap();
        add_child(b, init_game_object(c, geometry), &mut engine).unwrap();

        let err = add_child(c, init_game_object(root, geometry), &mut engine).unwrap_err();
        assert!(matches!(err, EditorError::InvalidAttachment { .. }));
    }

    #[test]
    fn test_dispose_missing_object_fails_loud() {
        let (mut engine, root) = engine_with_root();
        let object = add_box(root, &mut engine);

        dispose_game_object(object, &mut engine).unwrap();
        let err = dispose_game_object(object, &mut engine).unwrap_err();
        assert!(matches!(err, EditorError::ObjectNotFound(id) if id == object));
    }

    #[test]
    fn test_dispose_subtree_releases_all_geometry() {
        let (mut engine, root) = engine_with_root();

        // Depth-3 chain under the root: a -> b -> c
        let a = add_box(root, &mut engine);
        let b = add_box(a, &mut engine);
        let _c = add_box(b, &mut engine);
        assert_eq!(engine.resources().len(), 3);

        dispose_game_object(a, &mut engine).unwrap();

        assert!(engine.resources().is_empty());
        assert!(!engine.contains(a));
        assert!(!engine.contains(b));
        assert!(engine.contains(root));
        let err = get_children(a, &engine).map(Iterator::count).unwrap_err();
        assert!(matches!(err, EditorError::ObjectNotFound(_)));
    }

    #[test]
    fn test_dispose_children_keeps_parent() {
        for child_count in [0usize, 1, 3] {
            let (mut engine, root) = engine_with_root();
            let parent = add_box(root, &mut engine);
            for _ in 0..child_count {
                add_box(parent, &mut engine);
            }

            dispose_children(parent, &mut engine).unwrap();

            assert!(engine.contains(parent));
            assert_eq!(get_children(parent, &engine).unwrap().count(), 0);
            // parent's own geometry survives
            assert_eq!(engine.resources().len(), 1);
        }
    }

    #[test]
    fn test_get_children_is_restartable() {
        let (mut engine, root) = engine_with_root();
        let a = add_box(root, &mut engine);
        let b = add_box(root, &mut engine);

        let first: Vec<_> = get_children(root, &engine).unwrap().collect();
        let second: Vec<_> = get_children(root, &engine).unwrap().collect();

        assert_eq!(first, vec![a, b]);
        assert_eq!(first, second);
    }
}
