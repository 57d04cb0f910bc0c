use dioxus::prelude::*;
use dioxus_router::Link;

use mathbook_core::model::ChapterId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::strings;
use crate::views::NotFoundMessage;
use crate::vm::{LessonItemVm, map_chapter_detail};

#[component]
pub fn ChapterView(chapter_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress().snapshot();
    let Some(detail) = map_chapter_detail(&ctx.catalog(), &ChapterId::new(chapter_id), &progress)
    else {
        return rsx! { NotFoundMessage { message: strings::CHAPTER_NOT_FOUND } };
    };

    rsx! {
        div { class: "page chapter-page",
            header { class: "chapter-hero",
                if let Some(icon) = detail.icon.clone() {
                    div { class: "chapter-hero__icon", "{icon}" }
                }
                div {
                    h1 { "{detail.title}" }
                    p { "{detail.description}" }
                }
            }

            div { class: "chapter-columns",
                section {
                    h2 { "{strings::LESSONS}" }
                    if detail.lessons.is_empty() {
                        p { class: "empty", "{strings::NO_LESSONS}" }
                    } else {
                        ul { class: "lesson-list",
                            for lesson in detail.lessons.clone() {
                                LessonItem { key: "{lesson.id}", chapter_id: detail.id.clone(), lesson }
                            }
                        }
                    }
                }

                if let Some(quiz) = detail.quiz.clone() {
                    section {
                        h2 { "{strings::QUIZ}" }
                        div { class: "card quiz-card",
                            h3 { "{quiz.title}" }
                            p { "{strings::QUIZ_PROMPT}" }
                            Link {
                                class: "btn btn-success",
                                to: Route::Quiz { chapter_id: detail.id.clone() },
                                "{strings::START_QUIZ} ({quiz.question_count} {strings::QUESTION})"
                            }
                        }
                    }
                }
            }

            div { class: "page__footer",
                Link { class: "btn btn-secondary", to: Route::Home {}, "{strings::BACK_TO_CHAPTERS}" }
            }
        }
    }
}

#[component]
fn LessonItem(chapter_id: String, lesson: LessonItemVm) -> Element {
    rsx! {
        li {
            Link {
                class: "card lesson-item",
                to: Route::Lesson { chapter_id, lesson_id: lesson.id.clone() },
                h4 { "{lesson.title}" }
                if lesson.completed {
                    span { class: "status status--done", "{strings::COMPLETED} ✅" }
                } else {
                    span { class: "status status--idle", "{strings::START_LESSON} ⬅️" }
                }
            }
        }
    }
}
