use mathbook_core::evaluator::Verdict;
use mathbook_core::model::{Answer, Difficulty, Exercise, ExerciseKind};

use crate::strings;
use crate::vm::markup_vm::render_math_html;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceState {
    Idle,
    Selected,
    Correct,
    Wrong,
    Locked,
}

impl ChoiceState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "choice",
            Self::Selected => "choice choice--selected",
            Self::Correct => "choice choice--correct",
            Self::Wrong => "choice choice--wrong",
            Self::Locked => "choice choice--locked",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub answer: Answer,
    pub label_html: String,
    pub state: ChoiceState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExerciseInputVm {
    Choices(Vec<ChoiceVm>),
    Text { value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub title: &'static str,
    pub class: &'static str,
    pub explanation_html: Option<String>,
    pub your_answer_html: Option<String>,
    /// Shown for free-text exercises, where no option can be highlighted.
    pub correct_answer_html: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseVm {
    pub id: String,
    pub question_html: String,
    pub difficulty_label: &'static str,
    pub input: ExerciseInputVm,
    pub locked: bool,
    pub feedback: Option<FeedbackVm>,
}

#[must_use]
pub fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => strings::DIFFICULTY_EASY,
        Difficulty::Medium => strings::DIFFICULTY_MEDIUM,
        Difficulty::Hard => strings::DIFFICULTY_HARD,
    }
}

fn answer_text(exercise: &Exercise, answer: &Answer) -> Option<String> {
    match answer {
        Answer::Choice(id) => exercise.option(id).map(|option| option.text.clone()),
        Answer::Boolean(true) => Some(strings::TRUE_LABEL.to_string()),
        Answer::Boolean(false) => Some(strings::FALSE_LABEL.to_string()),
        Answer::Text(text) => Some(text.clone()),
    }
}

fn choice_state(
    answer: &Answer,
    correct: &Answer,
    selection: Option<&Answer>,
    verdict: Option<Verdict>,
) -> ChoiceState {
    let selected = selection == Some(answer);
    match verdict {
        None if selected => ChoiceState::Selected,
        None => ChoiceState::Idle,
        Some(_) if answer == correct => ChoiceState::Correct,
        Some(_) if selected => ChoiceState::Wrong,
        Some(_) => ChoiceState::Locked,
    }
}

/// Project an exercise and the learner's interaction into render data.
///
/// `verdict` is `None` until the exercise is submitted; quizzes never pass one.
#[must_use]
pub fn map_exercise(
    exercise: &Exercise,
    selection: Option<&Answer>,
    verdict: Option<Verdict>,
) -> ExerciseVm {
    let correct = exercise.correct_answer();
    let choices = |answers: Vec<(Answer, String)>| {
        ExerciseInputVm::Choices(
            answers
                .into_iter()
                .map(|(answer, label)| ChoiceVm {
                    state: choice_state(&answer, &correct, selection, verdict),
                    label_html: render_math_html(&label),
                    answer,
                })
                .collect(),
        )
    };

    let input = match &exercise.kind {
        ExerciseKind::MultipleChoice { options, .. } => choices(
            options
                .iter()
                .map(|option| (Answer::Choice(option.id.clone()), option.text.clone()))
                .collect(),
        ),
        ExerciseKind::TrueFalse { .. } => choices(vec![
            (Answer::Boolean(true), strings::TRUE_LABEL.to_string()),
            (Answer::Boolean(false), strings::FALSE_LABEL.to_string()),
        ]),
        ExerciseKind::FillBlank { .. } => ExerciseInputVm::Text {
            value: match selection {
                Some(Answer::Text(text)) => text.clone(),
                _ => String::new(),
            },
        },
    };

    let feedback = verdict.map(|verdict| {
        let (title, class) = if verdict.is_correct() {
            (strings::CORRECT, "feedback feedback--correct")
        } else {
            (strings::INCORRECT, "feedback feedback--wrong")
        };
        let your_answer_html = (!verdict.is_correct())
            .then(|| selection.and_then(|answer| answer_text(exercise, answer)))
            .flatten()
            .map(|text| render_math_html(&text));
        let correct_answer_html = match &exercise.kind {
            ExerciseKind::FillBlank { correct_answer } if !verdict.is_correct() => {
                Some(render_math_html(correct_answer))
            }
            _ => None,
        };
        FeedbackVm {
            title,
            class,
            explanation_html: exercise.explanation.as_deref().map(render_math_html),
            your_answer_html,
            correct_answer_html,
        }
    });

    ExerciseVm {
        id: exercise.id.to_string(),
        question_html: render_math_html(&exercise.question),
        difficulty_label: difficulty_label(exercise.difficulty),
        input,
        locked: verdict.is_some(),
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathbook_core::model::{ExerciseId, ExerciseOption, OptionId};

    fn mcq() -> Exercise {
        Exercise::multiple_choice(
            "mcq1-ch1-l1",
            "حاصل $2 + 2$ کدام است؟",
            Difficulty::Easy,
            vec![
                ExerciseOption::new("opt1", "۳"),
                ExerciseOption::new("opt2", "۴"),
                ExerciseOption::new("opt3", "۵"),
            ],
            "opt2",
        )
        .with_explanation("$2+2=4$")
    }

    fn states(vm: &ExerciseVm) -> Vec<ChoiceState> {
        match &vm.input {
            ExerciseInputVm::Choices(choices) => choices.iter().map(|c| c.state).collect(),
            ExerciseInputVm::Text { .. } => Vec::new(),
        }
    }

    #[test]
    fn selection_is_highlighted_before_submit() {
        let selected = Answer::Choice(OptionId::from("opt1"));
        let vm = map_exercise(&mcq(), Some(&selected), None);
        assert_eq!(
            states(&vm),
            vec![ChoiceState::Selected, ChoiceState::Idle, ChoiceState::Idle]
        );
        assert!(!vm.locked);
        assert!(vm.feedback.is_none());
        assert_eq!(vm.difficulty_label, strings::DIFFICULTY_EASY);
    }

    #[test]
    fn wrong_submission_marks_both_options() {
        let selected = Answer::Choice(OptionId::from("opt1"));
        let vm = map_exercise(&mcq(), Some(&selected), Some(Verdict::Incorrect));
        assert_eq!(
            states(&vm),
            vec![ChoiceState::Wrong, ChoiceState::Correct, ChoiceState::Locked]
        );
        let feedback = vm.feedback.unwrap();
        assert_eq!(feedback.title, strings::INCORRECT);
        assert_eq!(feedback.your_answer_html.as_deref(), Some("۳"));
        assert!(feedback.explanation_html.unwrap().contains("math-inline"));
    }

    #[test]
    fn revealed_without_selection_has_no_your_answer() {
        let vm = map_exercise(&mcq(), None, Some(Verdict::Incorrect));
        assert!(vm.feedback.unwrap().your_answer_html.is_none());
    }

    #[test]
    fn fill_blank_shows_expected_answer_when_wrong() {
        let exercise = Exercise {
            id: ExerciseId::from("fb"),
            question: "۱۰ + ۵ = ?".into(),
            difficulty: Difficulty::Medium,
            explanation: None,
            kind: ExerciseKind::FillBlank {
                correct_answer: "15".into(),
            },
        };
        let given = Answer::Text("14".into());
        let vm = map_exercise(&exercise, Some(&given), Some(Verdict::Incorrect));
        assert_eq!(
            vm.input,
            ExerciseInputVm::Text {
                value: "14".into()
            }
        );
        let feedback = vm.feedback.unwrap();
        assert_eq!(feedback.correct_answer_html.as_deref(), Some("15"));
        assert_eq!(feedback.your_answer_html.as_deref(), Some("14"));
    }

    #[test]
    fn true_false_offers_two_choices() {
        let exercise = Exercise {
            id: ExerciseId::from("tf"),
            question: "$0$ عدد صحیح است.".into(),
            difficulty: Difficulty::Easy,
            explanation: None,
            kind: ExerciseKind::TrueFalse {
                correct_answer: true,
            },
        };
        let vm = map_exercise(&exercise, Some(&Answer::Boolean(true)), Some(Verdict::Correct));
        assert_eq!(states(&vm), vec![ChoiceState::Correct, ChoiceState::Locked]);
        assert_eq!(vm.feedback.unwrap().title, strings::CORRECT);
    }
}
