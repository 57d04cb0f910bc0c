use dioxus::prelude::*;
use dioxus_router::Link;

use mathbook_core::model::{ChapterId, Quiz};
use services::{QuizAdvance, QuizSession};

use crate::context::AppContext;
use crate::routes::Route;
use crate::strings;
use crate::views::{ExerciseCard, NotFoundMessage, ViewError};
use crate::vm::{ExerciseVm, QuizSummaryVm, map_exercise, map_quiz_summary, question_counter};

#[component]
pub fn QuizView(chapter_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let chapter_id = ChapterId::new(chapter_id);
    let Some(quiz) = ctx.catalog().find_quiz(&chapter_id).cloned() else {
        return rsx! { NotFoundMessage { message: strings::QUIZ_NOT_FOUND } };
    };

    rsx! {
        QuizPage { key: "{chapter_id}", quiz }
    }
}

enum QuizScreen {
    Summary(QuizSummaryVm),
    Question {
        exercise: Option<ExerciseVm>,
        counter: String,
        is_last: bool,
        has_selection: bool,
    },
}

#[component]
fn QuizPage(quiz: Quiz) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();

    let mut view = use_signal(|| QuizSession::start(&quiz, &progress));
    let mut error = use_signal(|| None::<ViewError>);
    let mut busy = use_signal(|| false);

    let on_next = {
        let progress = progress.clone();
        let chapter_id = quiz.chapter_id.clone();
        move |_| {
            if *busy.peek() {
                return;
            }
            let result = match &mut *view.write() {
                services::QuizView::Active(session) => session.advance(),
                services::QuizView::Summary(_) => return,
            };
            match result {
                Ok(QuizAdvance::Question(_)) => error.set(None),
                Ok(QuizAdvance::Graded(outcome)) => {
                    error.set(None);
                    busy.set(true);
                    let progress = progress.clone();
                    let chapter_id = chapter_id.clone();
                    let mut view = view;
                    let mut error = error;
                    let mut busy = busy;
                    spawn(async move {
                        match QuizSession::record(&chapter_id, &outcome, &progress).await {
                            Ok(score) => view.set(services::QuizView::Summary(score)),
                            Err(err) => error.set(Some(ViewError::from_session(&err))),
                        }
                        busy.set(false);
                    });
                }
                Err(err) => error.set(Some(ViewError::from_session(&err))),
            }
        }
    };

    let screen = match &*view.read() {
        services::QuizView::Summary(score) => QuizScreen::Summary(map_quiz_summary(&quiz, score)),
        services::QuizView::Active(session) => QuizScreen::Question {
            exercise: session
                .current_question()
                .map(|question| map_exercise(question, session.selected(), None)),
            counter: question_counter(session.index(), session.question_count()),
            is_last: session.is_last(),
            has_selection: session.selected().is_some(),
        },
    };

    rsx! {
        div { class: "page quiz-page",
            match screen {
                QuizScreen::Summary(summary) => rsx! {
                    div { class: "card quiz-summary",
                        h1 { "{strings::QUIZ_SUMMARY}: {summary.title}" }
                        p { class: "quiz-summary__score",
                            "{strings::SCORE}: "
                            span { class: summary.band_class, "{summary.score_label}" }
                        }
                        p { "{strings::CORRECT_ANSWERS}: {summary.correct_label}" }
                        p { class: "muted", "{strings::QUIZ_TAKEN_ON} {summary.taken_on}" }
                        Link {
                            class: "btn btn-primary",
                            to: Route::Chapter { chapter_id: quiz.chapter_id.to_string() },
                            "{strings::BACK_TO_CHAPTERS}"
                        }
                    }
                },
                QuizScreen::Question { exercise, counter, is_last, has_selection } => rsx! {
                    div { class: "card quiz",
                        h1 { "{quiz.title}" }
                        p { class: "quiz__counter", "{counter}" }
                        if let Some(exercise) = exercise {
                            ExerciseCard {
                                exercise,
                                on_select: move |answer| {
                                    let result = match &mut *view.write() {
                                        services::QuizView::Active(session) => session.select(answer),
                                        services::QuizView::Summary(_) => Ok(()),
                                    };
                                    error.set(result.err().map(|err| ViewError::from_session(&err)));
                                },
                            }
                        }
                        if let Some(err) = error() {
                            p { class: "error", "{err.message()}" }
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: busy() || !has_selection,
                            onclick: on_next,
                            if is_last { "{strings::SUBMIT}" } else { "{strings::NEXT}" }
                        }
                    }
                },
            }
        }
    }
}
