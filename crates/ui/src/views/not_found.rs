use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::strings;

/// Shown for ids that do not resolve to curriculum content.
#[component]
pub fn NotFoundMessage(message: &'static str) -> Element {
    rsx! {
        div { class: "page not-found",
            p { class: "not-found__message", "{message}" }
            Link { class: "back-link", to: Route::Home {}, "{strings::BACK_HOME}" }
        }
    }
}

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page not-found",
            h1 { class: "not-found__code", "404" }
            p { class: "not-found__message", "{strings::PAGE_NOT_FOUND}" }
            p { class: "muted", dir: "ltr", "/{path}" }
            Link { class: "back-link", to: Route::Home {}, "{strings::BACK_HOME}" }
        }
    }
}
