use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::strings;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{strings::APP_TITLE}" }

        // The curriculum is Persian; the whole tree is right-to-left.
        div { class: "app-root", dir: "rtl", lang: "fa",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "{strings::GENERIC_ERROR}" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
