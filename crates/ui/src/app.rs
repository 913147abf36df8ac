use dioxus::prelude::*;
use services::SessionController;

use crate::context::AppContext;
use crate::views::SessionShell;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();
    use_context_provider(move || Signal::new(SessionController::new(content)));
    let title = ctx.window_title().to_string();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Etwas ist schiefgelaufen" }
                        pre { "{errors:?}" }
                    }
                },
                SessionShell {}
            }
        }
    }
}
