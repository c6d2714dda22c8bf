//! Editor-side policy: selection state, scene access, lifecycle, sessions
//!
//! ## Architecture
//!
//! ```text
//! EditorSession actions (add box, dispose, dispose children)
//!      ↓
//! SceneAccess (selection + scene queries)   ObjectLifecycle (graph mutation)
//!      ↓                                         ↓
//! EditorState (selection)                   EngineState (owning graph)
//! ```
//!
//! Every action consumes the session and returns the updated one, so a
//! caller can never observe or mutate a superseded state pair.

mod state;
mod scene_access;
pub mod lifecycle;
mod session;

pub use state::EditorState;
pub use session::{EditorSession, SessionResult};

use crate::engine::{AllocationError, GameObjectId};
use thiserror::Error;

/// Editor operation errors
///
/// All errors propagate unchanged to the caller; there are no retries and
/// no silent recovery at this layer. Disposal of an id that is not in the
/// graph fails loud with [`EditorError::ObjectNotFound`] rather than
/// no-opping, so double-dispose bugs surface where they happen.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The session holds no active scene; an editor invariant was violated
    /// upstream
    #[error("session has no active scene")]
    NoScene,

    /// The referenced game object is not in the live graph (stale id or
    /// double dispose)
    #[error("game object not found: {0:?}")]
    ObjectNotFound(GameObjectId),

    /// Attaching `child` under `parent` would break the forest invariant
    /// (already attached elsewhere, or the link would close a cycle)
    #[error("cannot attach {child:?} under {parent:?}: forest invariant would break")]
    InvalidAttachment {
        /// Intended parent node
        parent: GameObjectId,
        /// Node being attached
        child: GameObjectId,
    },

    /// Engine-side allocation failed; not transient, not retried
    #[error(transparent)]
    Allocation(#[from] AllocationError),
}
