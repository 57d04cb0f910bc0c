use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use mathbook_core::model::{ChapterId, Lesson, LessonId};
use services::{LessonSession, LessonStep, ProgressService, ProgressWrite};

use crate::context::AppContext;
use crate::routes::Route;
use crate::strings;
use crate::views::{ExerciseCard, NotFoundMessage, ViewError, ViewState, view_state_from_resource};
use crate::vm::{map_exercise, map_lesson};

#[component]
pub fn LessonView(chapter_id: String, lesson_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let chapter_id = ChapterId::new(chapter_id);
    let lesson_id = LessonId::new(lesson_id);

    let Some(lesson) = catalog.find_lesson(&chapter_id, &lesson_id).cloned() else {
        return rsx! { NotFoundMessage { message: strings::LESSON_NOT_FOUND } };
    };
    let chapter_title = catalog
        .find_chapter(&chapter_id)
        .map(|chapter| chapter.title.clone())
        .unwrap_or_default();

    // Keyed so a route change to another lesson starts a fresh session.
    rsx! {
        LessonPage { key: "{chapter_id}/{lesson_id}", chapter_id, chapter_title, lesson }
    }
}

#[component]
fn LessonPage(chapter_id: ChapterId, chapter_title: String, lesson: Lesson) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let navigator = use_navigator();

    let vm = use_hook(|| map_lesson(&lesson));
    let mut session = use_signal(|| LessonSession::new(chapter_id.clone(), lesson.clone()));
    let mut error = use_signal(|| None::<ViewError>);
    let busy = use_signal(|| false);

    let viewed = {
        let progress = progress.clone();
        use_resource(move || {
            let progress = progress.clone();
            async move {
                let current = session.peek().clone();
                current.on_view(&progress).await;
                Ok::<_, ViewError>(())
            }
        })
    };
    let view_state = view_state_from_resource(&viewed);

    let on_submit = {
        let progress = progress.clone();
        move |_| {
            if *busy.peek() {
                return;
            }
            let result = session.write().grade();
            match result {
                Ok((_, write)) => {
                    error.set(None);
                    spawn_write(progress.clone(), write, busy, || {});
                }
                Err(err) => error.set(Some(ViewError::from_session(&err))),
            }
        }
    };

    let on_reveal = {
        let progress = progress.clone();
        move |_| {
            if *busy.peek() {
                return;
            }
            let result = session.write().open_solution(&progress);
            match result {
                Ok((_, write)) => {
                    error.set(None);
                    spawn_write(progress.clone(), write, busy, || {});
                }
                Err(err) => error.set(Some(ViewError::from_session(&err))),
            }
        }
    };

    let on_next = {
        let progress = progress.clone();
        let chapter_id = chapter_id.to_string();
        move |_| {
            if *busy.peek() {
                return;
            }
            let result = session.write().advance(&progress);
            match result {
                Ok((LessonStep::Finished, write)) => {
                    let chapter_id = chapter_id.clone();
                    spawn_write(progress.clone(), write, busy, move || {
                        let _ = navigator.push(Route::Chapter { chapter_id });
                    });
                }
                Ok((LessonStep::Exercise(_), write)) => {
                    error.set(None);
                    spawn_write(progress.clone(), write, busy, || {});
                }
                Err(err) => error.set(Some(ViewError::from_session(&err))),
            }
        }
    };

    let current = session.read();
    let interaction = current.interaction();
    let exercise_vm = current
        .current_exercise()
        .map(|exercise| map_exercise(exercise, interaction.selection(), interaction.verdict()));
    let counter = format!(
        "{} ({} {} {})",
        strings::EXERCISES,
        current.index() + 1,
        strings::OF,
        current.exercise_count()
    );
    let next_label = if current.is_last() {
        strings::BACK_TO_LESSONS
    } else {
        strings::NEXT
    };
    let can_advance = current.can_advance(&progress);
    let submitted = interaction.is_submitted();
    let has_selection = interaction.selection().is_some();
    let already_correct = current
        .current_exercise()
        .and_then(|exercise| progress.exercise_status(&exercise.id))
        .is_some_and(|attempt| attempt.is_correct());
    let busy_now = busy();
    let reveal_disabled = busy_now || interaction.solution_revealed() || already_correct;
    drop(current);
    let completed = progress.lesson_status(&lesson.id);

    rsx! {
        div { class: "page lesson-page",
            article { class: "card lesson",
                div { class: "lesson__header",
                    h1 { "{vm.title}" }
                    if completed {
                        span { class: "status status--done", "{strings::COMPLETED} ✅" }
                    }
                }
                Link {
                    class: "back-link",
                    to: Route::Chapter { chapter_id: chapter_id.to_string() },
                    "{strings::BACK_TO_CHAPTER} {chapter_title}"
                }
                if let Some(url) = vm.video_url.clone() {
                    div { class: "lesson__media",
                        img { src: "{url}", alt: "{strings::VIDEO_ALT}" }
                    }
                }
                h2 { "{strings::LESSON_CONTENT}" }
                div { class: "lesson__content", dangerous_inner_html: "{vm.content_html}" }
                if !vm.examples.is_empty() {
                    h2 { "{strings::SOLVED_EXAMPLES}" }
                    for (idx, example) in vm.examples.iter().enumerate() {
                        div { key: "{idx}", class: "card solved-example",
                            div { class: "solved-example__problem", dangerous_inner_html: "{example.problem_html}" }
                            for (step_idx, step) in example.steps_html.iter().enumerate() {
                                div { key: "{step_idx}", class: "solved-example__step", dangerous_inner_html: "{step}" }
                            }
                        }
                    }
                }
            }

            if let ViewState::Error(err) = view_state {
                p { class: "error", "{err.message()}" }
            }

            section { class: "card exercises",
                match exercise_vm {
                    Some(exercise) => rsx! {
                        h2 { "{counter}" }
                        ExerciseCard {
                            exercise,
                            on_select: move |answer| {
                                let result = session.write().select(answer);
                                error.set(result.err().map(|err| ViewError::from_session(&err)));
                            },
                        }
                        if let Some(err) = error() {
                            p { class: "error", "{err.message()}" }
                        }
                        div { class: "exercise-actions",
                            if !submitted {
                                button {
                                    class: "btn btn-primary",
                                    disabled: busy_now || !has_selection,
                                    onclick: on_submit,
                                    "{strings::SUBMIT}"
                                }
                            }
                            button {
                                class: "btn btn-warning",
                                disabled: reveal_disabled,
                                onclick: on_reveal,
                                "{strings::SHOW_SOLUTION}"
                            }
                            if can_advance {
                                button {
                                    class: "btn btn-success",
                                    disabled: busy_now,
                                    onclick: on_next,
                                    "{next_label}"
                                }
                            }
                        }
                    },
                    None => rsx! {
                        p { class: "empty", "{strings::NO_EXERCISES}" }
                    },
                }
            }
        }
    }
}

/// Store what a lesson step owes, holding `busy` so the actions stay disabled
/// until the write lands.
fn spawn_write(
    progress: Arc<ProgressService>,
    write: ProgressWrite,
    mut busy: Signal<bool>,
    then: impl FnOnce() + 'static,
) {
    busy.set(true);
    spawn(async move {
        write.apply(&progress).await;
        busy.set(false);
        then();
    });
}
