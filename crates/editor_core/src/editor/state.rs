//! Editor-only metadata: the current selection

use crate::engine::GameObjectId;

/// Editor state tracking the currently selected game object
///
/// The stored id is not revalidated here; [`super::EditorSession`] checks
/// it against the live graph on every read, so a selection whose target
/// has been disposed simply reads back as empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorState {
    selected: Option<GameObjectId>,
}

impl EditorState {
    /// Create editor state with no selection
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw selection, without graph validation
    pub fn selected(&self) -> Option<GameObjectId> {
        self.selected
    }

    /// Record `id` as the current selection
    pub fn select(&mut self, id: GameObjectId) {
        self.selected = Some(id);
    }

    /// Clear the selection; idempotent
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
