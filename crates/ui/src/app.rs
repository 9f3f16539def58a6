use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::study::StudySession;

#[component]
pub fn App() -> Element {
    // One shared study-session value for the whole screen flow; views replace
    // it wholesale on each transition.
    use_context_provider(|| Signal::new(StudySession::default()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Lingo" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
