use dioxus::prelude::*;
use services::{SessionAction, SessionController, SessionEvent};

/// Shared handle to the session reducer, provided once by [`crate::App`].
pub type SessionStore = Signal<SessionController>;

#[must_use]
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}

/// Apply `action` from an event handler.
///
/// Buttons are gated on the same preconditions the controller checks, so a
/// rejection here is logged and otherwise ignored.
pub fn dispatch(mut store: SessionStore, action: SessionAction) -> Option<SessionEvent> {
    let name = action.name();
    let result = store.write().dispatch(action);
    match result {
        Ok(event) => Some(event),
        Err(err) => {
            tracing::warn!(action = name, error = %err, "session action rejected");
            None
        }
    }
}
