use std::sync::Arc;

use quiz_core::Content;

pub trait UiApp: Send + Sync {
    fn content(&self) -> Arc<Content>;
    fn window_title(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    content: Arc<Content>,
    window_title: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            content: app.content(),
            window_title: app.window_title(),
        }
    }

    #[must_use]
    pub fn content(&self) -> Arc<Content> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
