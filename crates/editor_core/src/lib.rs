//! # Editor Core
//!
//! Scene-editing core for a game-engine editor: ownership-consistent state
//! threading and game-object lifecycle management over a mutable scene graph.
//!
//! ## Architecture
//!
//! ```text
//! EditorSession (EditorState + EngineState)
//!      ↓
//! SceneAccess / ObjectLifecycle (queries + graph mutation)
//!      ↓
//! EngineState (owning arena of game objects + geometry resources)
//! ```
//!
//! Every editor action consumes the session and returns a new one. The
//! engine graph lives in a generational arena, so a "new session" is a
//! move, never a deep copy, and a stale object id can never be confused
//! with a live one. Failed actions hand the session back alongside the
//! error, so propagation never drops the scene graph.
//!
//! ## Quick Start
//!
//! ```rust
//! use editor_core::editor::EditorSession;
//! use editor_core::config::EditorConfig;
//!
//! fn main() -> Result<(), editor_core::editor::EditorError> {
//!     let session = EditorSession::new(&EditorConfig::default());
//!     let (box_id, session) = session.add_box_game_object().map_err(|(_, err)| err)?;
//!     let session = session.set_current_game_object(box_id);
//!     assert!(session.has_current_game_object());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod engine;
pub mod editor;

// Re-export the main API surface
pub use editor::{EditorError, EditorSession, EditorState, SessionResult};
pub use engine::{EngineState, GameObjectId, GeometryHandle, Scene};
