//! Scene and selection access on the editor session
//!
//! Selection reads revalidate the stored id against the live graph, so a
//! selection whose target has been disposed reads back as empty instead of
//! dangling. Writes do not validate membership; that contract belongs to
//! the caller and is pinned by tests.

use crate::engine::{GameObjectId, Scene};
use super::session::EditorSession;
use super::EditorError;

impl EditorSession {
    /// The active scene
    ///
    /// # Errors
    /// [`EditorError::NoScene`] if the engine state holds no scene or the
    /// scene's root object is gone. Either indicates an invariant
    /// violation upstream; the error is surfaced, not recovered.
    pub fn scene(&self) -> Result<Scene, EditorError> {
        let scene = self.engine.scene().ok_or(EditorError::NoScene)?;
        if !self.engine.contains(scene.root()) {
            log::error!("Scene root {:?} is not in the graph", scene.root());
            return Err(EditorError::NoScene);
        }
        Ok(scene)
    }

    /// The currently selected game object, revalidated against the live
    /// graph
    ///
    /// Returns `None` when nothing is selected or the selected object has
    /// since been disposed.
    pub fn current_game_object(&self) -> Option<GameObjectId> {
        self.editor
            .selected()
            .filter(|&id| self.engine.contains(id))
    }

    /// Whether a current selection is set and still valid
    pub fn has_current_game_object(&self) -> bool {
        self.current_game_object().is_some()
    }

    /// Record `id` as the current selection
    ///
    /// Membership is not validated at call time; callers are responsible
    /// for passing a live id. A stale id is harmless: it reads back as no
    /// selection.
    pub fn set_current_game_object(mut self, id: GameObjectId) -> Self {
        self.editor.select(id);
        self
    }

    /// Clear the current selection; idempotent
    pub fn clear_current_game_object(mut self) -> Self {
        self.editor.clear_selection();
        self
    }
}
