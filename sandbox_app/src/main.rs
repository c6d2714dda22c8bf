//! Scene sandbox demo application
//!
//! Drives the editor core through a scripted add/select/dispose scenario
//! and logs the resulting graph state, standing in for the UI layer that
//! would normally invoke these actions from user gestures.

use editor_core::config::EditorConfig;
use editor_core::editor::{EditorError, EditorSession};

fn main() -> Result<(), EditorError> {
    editor_core::foundation::logging::init();

    let config = EditorConfig::default();
    log::info!("Starting scene sandbox (budgets: {} objects, {} geometries)",
        config.max_objects, config.max_geometries);

    let session = EditorSession::new(&config);
    let root = session.scene()?.root();

    // Build a small scene: two boxes under the root
    let (first_box, session) = session.add_box_game_object().map_err(|(_, err)| err)?;
    let (second_box, session) = session.add_box_game_object().map_err(|(_, err)| err)?;
    log::info!("Scene now has {} objects", session.engine_state().object_count());

    // Select the first box, then delete it as a user would
    let session = session.set_current_game_object(first_box);
    log::info!("Selected {:?}", session.current_game_object());

    let session = session
        .dispose_current_game_object(first_box)
        .map_err(|(_, err)| err)?;
    log::info!(
        "Disposed {first_box:?}; selection valid: {}",
        session.has_current_game_object()
    );

    // Clear out everything under the root, leaving an empty scene
    let session = session
        .dispose_game_object_children(root)
        .map_err(|(_, err)| err)?;
    let remaining = session.engine_state().children(root).map_or(0, <[_]>::len);
    log::info!(
        "Cleared scene root; {remaining} children remain, {} geometry resources live",
        session.engine_state().resources().len()
    );

    debug_assert!(!session.engine_state().contains(second_box));
    Ok(())
}
