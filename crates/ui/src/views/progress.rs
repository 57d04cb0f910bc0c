use dioxus::prelude::*;

use crate::context::AppContext;
use crate::strings;
use crate::vm::ProgressVm;

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let mut revision = use_signal(|| 0_u32);
    let mut confirm_open = use_signal(|| false);

    // Re-read the service state after a reset.
    let _ = revision();
    let vm = ProgressVm::from(&progress.overview(&ctx.catalog()));

    let on_reset = move |_| {
        let progress = progress.clone();
        let mut confirm_open = confirm_open;
        let mut revision = revision;
        spawn(async move {
            progress.reset_progress().await;
            confirm_open.set(false);
            *revision.write() += 1;
        });
    };

    rsx! {
        div { class: "page progress-page",
            h1 { class: "page__title", "{strings::YOUR_PROGRESS}" }

            if vm.is_empty {
                p { class: "empty", "{strings::NO_PROGRESS}" }
            } else {
                div { class: "stats",
                    div { class: "card stat",
                        h3 { "{strings::LESSONS_COMPLETED}" }
                        p { class: "stat__value", "{vm.lessons_completed} / {vm.total_lessons}" }
                        div { class: "bar",
                            div { class: "bar__fill", style: "{vm.lessons_bar_width}" }
                        }
                        p { class: "muted", "{vm.lessons_percent_label}" }
                    }
                    div { class: "card stat",
                        h3 { "{strings::EXERCISES_ATTEMPTED}" }
                        p { class: "stat__value", "{vm.exercises_attempted}" }
                        p { class: "muted", "{vm.exercises_correct} {strings::CORRECT_SUFFIX}" }
                    }
                    div { class: "card stat",
                        h3 { "{strings::QUIZZES_TAKEN}" }
                        p { class: "stat__value", "{vm.quizzes_taken}" }
                        if let Some(average) = vm.average_score_label.clone() {
                            p { class: "muted", "{strings::AVERAGE_SCORE}: {average}" }
                        }
                    }
                }
            }

            div { class: "page__footer",
                button {
                    class: "btn btn-danger",
                    onclick: move |_| confirm_open.set(true),
                    "{strings::RESET_ALL}"
                }
            }

            if confirm_open() {
                div { class: "modal-backdrop",
                    div { class: "modal", role: "dialog", aria_modal: "true",
                        h3 { "{strings::RESET_CONFIRM_TITLE}" }
                        p { "{strings::RESET_CONFIRM_BODY}" }
                        div { class: "modal__actions",
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| confirm_open.set(false),
                                "{strings::CANCEL}"
                            }
                            button { class: "btn btn-danger", onclick: on_reset, "{strings::CLEAR}" }
                        }
                    }
                }
            }
        }
    }
}
