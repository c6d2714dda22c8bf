//! Editor session: the state pair threaded through every editor action

use crate::config::EditorConfig;
use crate::engine::{EngineState, GameObjectId};
use super::lifecycle::{self, PrimitiveKind};
use super::state::EditorState;
use super::EditorError;

/// Result of a session action
///
/// Errors carry the surviving session alongside the failure: a rejected
/// action must not cost the caller the scene graph. The single-writer
/// discipline is preserved either way — exactly one session comes back.
pub type SessionResult<T> = Result<T, (EditorSession, EditorError)>;

/// The composed (editor state, engine state) pair
///
/// A session is threaded by value: every action consumes `self` and
/// returns the updated session, so callers can never observe two live
/// sessions over the same engine graph. Internally the graph lives in a
/// generational arena, which makes the hand-off a move rather than a copy.
#[derive(Debug)]
pub struct EditorSession {
    pub(super) editor: EditorState,
    pub(super) engine: EngineState,
}

impl EditorSession {
    /// Create a session with a fresh scene and empty selection
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            editor: EditorState::new(),
            engine: EngineState::new(config),
        }
    }

    /// Compose a session from existing state halves
    pub fn from_parts(editor: EditorState, engine: EngineState) -> Self {
        Self { editor, engine }
    }

    /// Split the session back into its state halves
    pub fn into_parts(self) -> (EditorState, EngineState) {
        (self.editor, self.engine)
    }

    /// Read access to the editor state
    pub fn editor_state(&self) -> &EditorState {
        &self.editor
    }

    /// Read access to the engine state
    pub fn engine_state(&self) -> &EngineState {
        &self.engine
    }

    /// Create a box primitive and attach it under the active scene's root
    ///
    /// Returns the new object's id along with the updated session. The
    /// current selection is not changed.
    ///
    /// # Errors
    /// [`EditorError::NoScene`] without an active scene; allocation errors
    /// propagate unchanged. The session survives in the error value.
    pub fn add_box_game_object(mut self) -> SessionResult<(GameObjectId, Self)> {
        let root = match self.scene() {
            Ok(scene) => scene.root(),
            Err(err) => return Err((self, err)),
        };
        let (geometry, object) =
            match lifecycle::create_primitive(PrimitiveKind::Box, &mut self.engine) {
                Ok(created) => created,
                Err(err) => return Err((self, err)),
            };
        if let Err(err) = lifecycle::add_child(
            root,
            lifecycle::init_game_object(object, geometry),
            &mut self.engine,
        ) {
            return Err((self, err));
        }
        log::info!("Added box game object {object:?} under scene root");
        Ok((object, self))
    }

    /// Dispose `id` and its subtree from the engine graph
    ///
    /// The editor state is left untouched: if `id` was the current
    /// selection, the selection reads back as empty from now on because
    /// reads revalidate against the live graph.
    ///
    /// # Errors
    /// [`EditorError::ObjectNotFound`] if `id` is not in the graph; the
    /// session survives in the error value with the graph unchanged.
    pub fn dispose_current_game_object(mut self, id: GameObjectId) -> SessionResult<Self> {
        match lifecycle::dispose_game_object(id, &mut self.engine) {
            Ok(()) => Ok(self),
            Err(err) => Err((self, err)),
        }
    }

    /// Dispose all children of `id`; `id` itself stays in the graph
    ///
    /// The editor state is left untouched.
    ///
    /// # Errors
    /// [`EditorError::ObjectNotFound`] if `id` is not in the graph; the
    /// session survives in the error value with the graph unchanged.
    pub fn dispose_game_object_children(mut self, id: GameObjectId) -> SessionResult<Self> {
        match lifecycle::dispose_children(id, &mut self.engine) {
            Ok(()) => Ok(self),
            Err(err) => Err((self, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditorSession {
        EditorSession::new(&EditorConfig::default())
    }

    #[test]
    fn test_add_box_attaches_exactly_one_child() {
        let s = session();
        let root = s.scene().unwrap().root();
        assert_eq!(s.engine_state().children(root).unwrap().len(), 0);

        let (object, s) = s.add_box_game_object().unwrap();

        assert_eq!(s.engine_state().children(root).unwrap(), &[object]);
        assert_eq!(s.engine_state().object(object).unwrap().parent(), Some(root));
        assert!(!s.has_current_game_object());
    }

    #[test]
    fn test_dispose_children_keeps_target() {
        let s = session();
        let (object, s) = s.add_box_game_object().unwrap();

        let s = s.dispose_game_object_children(object).unwrap();
        assert!(s.engine_state().contains(object));
    }

    #[test]
    fn test_end_to_end_scenario() {
        // Empty scene; add two boxes; both are distinct children of root;
        // select the first; dispose it; selection reads back as empty.
        let s = session();
        let root = s.scene().unwrap().root();

        let (b1, s) = s.add_box_game_object().unwrap();
        let (b2, s) = s.add_box_game_object().unwrap();
        assert_ne!(b1, b2);
        assert_eq!(s.engine_state().children(root).unwrap(), &[b1, b2]);

        let s = s.set_current_game_object(b1);
        assert_eq!(s.current_game_object(), Some(b1));

        let s = s.dispose_current_game_object(b1).unwrap();
        assert!(!s.engine_state().contains(b1));
        assert!(s.engine_state().contains(b2));
        assert!(!s.has_current_game_object());
        assert!(s.current_game_object().is_none());
    }

    #[test]
    fn test_no_scene_fails_loud() {
        let s = EditorSession::from_parts(
            EditorState::new(),
            EngineState::without_scene(&EditorConfig::default()),
        );

        let (s, err) = s.add_box_game_object().unwrap_err();
        assert!(matches!(err, EditorError::NoScene));
        assert!(s.engine_state().scene().is_none());
    }

    #[test]
    fn test_failed_dispose_preserves_session() {
        let (b1, s) = session().add_box_game_object().unwrap();
        let (b2, s) = s.add_box_game_object().unwrap();
        let s = s.set_current_game_object(b2);
        let s = s.dispose_current_game_object(b1).unwrap();

        // Double dispose fails loud but must not cost the caller the scene
        let (s, err) = s.dispose_current_game_object(b1).unwrap_err();

        assert!(matches!(err, EditorError::ObjectNotFound(id) if id == b1));
        assert!(s.engine_state().contains(b2));
        assert_eq!(s.current_game_object(), Some(b2));
        assert!(s.scene().is_ok());
    }

    #[test]
    fn test_failed_add_preserves_session() {
        // Budget of two: scene root plus one box. The second add fails.
        let config = EditorConfig {
            max_objects: 2,
            ..EditorConfig::default()
        };
        let s = EditorSession::new(&config);
        let (b1, s) = s.add_box_game_object().unwrap();

        let (s, err) = s.add_box_game_object().unwrap_err();

        assert!(matches!(err, EditorError::Allocation(_)));
        assert!(s.engine_state().contains(b1));
        assert_eq!(s.engine_state().resources().len(), 1);
    }

    #[test]
    fn test_session_round_trips_through_parts() {
        let (object, s) = session().add_box_game_object().unwrap();
        let s = s.set_current_game_object(object);

        let (editor, engine) = s.into_parts();
        let s = EditorSession::from_parts(editor, engine);

        assert_eq!(s.current_game_object(), Some(object));
    }
}
