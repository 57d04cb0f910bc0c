use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::strings;
use crate::views::{ChapterView, HomeView, LessonView, NotFoundView, ProgressView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/chapter/:chapter_id", ChapterView)] Chapter { chapter_id: String },
        #[route("/chapter/:chapter_id/lesson/:lesson_id", LessonView)] Lesson { chapter_id: String, lesson_id: String },
        #[route("/chapter/:chapter_id/quiz", QuizView)] Quiz { chapter_id: String },
        #[route("/progress", ProgressView)] Progress {},
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            Link { class: "navbar__title", to: Route::Home {}, "{strings::APP_TITLE}" }
            ul { class: "navbar__links",
                li { Link { to: Route::Home {}, "{strings::CHAPTERS}" } }
                li { Link { to: Route::Progress {}, "{strings::PROGRESS}" } }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { "{strings::APP_TITLE}. {strings::FOOTER_RIGHTS}" }
            p { class: "footer__note", "{strings::FOOTER_NOTE}" }
        }
    }
}
