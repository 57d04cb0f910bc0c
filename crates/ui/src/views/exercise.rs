use dioxus::prelude::*;

use mathbook_core::model::Answer;

use crate::strings;
use crate::vm::{ChoiceVm, ExerciseInputVm, ExerciseVm, FeedbackVm};

/// One exercise or quiz question with its answer controls.
///
/// Selection is reported through `on_select`; the owner decides whether the
/// answer is accepted.
#[component]
pub fn ExerciseCard(exercise: ExerciseVm, on_select: EventHandler<Answer>) -> Element {
    let locked = exercise.locked;
    rsx! {
        div { class: "exercise", id: "exercise-{exercise.id}",
            div { class: "exercise__header",
                span { class: "badge", "{exercise.difficulty_label}" }
            }
            div { class: "exercise__question", dangerous_inner_html: "{exercise.question_html}" }
            match exercise.input.clone() {
                ExerciseInputVm::Choices(choices) => rsx! {
                    div { class: "choices",
                        for (idx, choice) in choices.into_iter().enumerate() {
                            ChoiceButton { key: "{idx}", choice, locked, on_select }
                        }
                    }
                },
                ExerciseInputVm::Text { value } => rsx! {
                    input {
                        class: "fill-blank",
                        r#type: "text",
                        value: "{value}",
                        placeholder: "{strings::FILL_BLANK_PLACEHOLDER}",
                        disabled: locked,
                        oninput: move |evt: FormEvent| on_select.call(Answer::Text(evt.value())),
                    }
                },
            }
            if let Some(feedback) = exercise.feedback.clone() {
                Feedback { feedback }
            }
        }
    }
}

#[component]
fn ChoiceButton(choice: ChoiceVm, locked: bool, on_select: EventHandler<Answer>) -> Element {
    let answer = choice.answer.clone();
    rsx! {
        button {
            class: choice.state.class(),
            r#type: "button",
            disabled: locked,
            onclick: move |_| on_select.call(answer.clone()),
            span { dangerous_inner_html: "{choice.label_html}" }
        }
    }
}

#[component]
fn Feedback(feedback: FeedbackVm) -> Element {
    rsx! {
        div { class: feedback.class, role: "status",
            h4 { "{feedback.title}" }
            if let Some(html) = feedback.explanation_html.clone() {
                div { class: "feedback__explanation", dangerous_inner_html: "{html}" }
            }
            if let Some(html) = feedback.your_answer_html.clone() {
                p {
                    strong { "{strings::YOUR_ANSWER}: " }
                    span { dangerous_inner_html: "{html}" }
                }
            }
            if let Some(html) = feedback.correct_answer_html.clone() {
                p {
                    strong { "{strings::CORRECT_ANSWER}: " }
                    span { dangerous_inner_html: "{html}" }
                }
            }
        }
    }
}
