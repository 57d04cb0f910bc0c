//! Grading of submitted answers and whole quizzes.

use std::collections::HashMap;
use thiserror::Error;

use crate::model::{Answer, ExerciseId, ExerciseKind, Exercise, OptionId, Quiz};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvaluationError {
    #[error("answer kind does not match exercise {0}")]
    AnswerKindMismatch(ExerciseId),

    #[error("option {option} does not belong to exercise {exercise}")]
    UnknownOption {
        exercise: ExerciseId,
        option: OptionId,
    },

    #[error("empty answer for exercise {0}")]
    EmptyAnswer(ExerciseId),
}

//
// ─── VERDICT ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    #[must_use]
    pub fn from_bool(is_correct: bool) -> Self {
        if is_correct { Self::Correct } else { Self::Incorrect }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Grades a single answer. No partial credit.
///
/// # Errors
///
/// Returns `EvaluationError::AnswerKindMismatch` when the answer variant does
/// not fit the exercise, `UnknownOption` for a choice outside the option set
/// and `EmptyAnswer` for blank fill-in text.
pub fn evaluate(exercise: &Exercise, answer: &Answer) -> Result<Verdict, EvaluationError> {
    match (&exercise.kind, answer) {
        (
            ExerciseKind::MultipleChoice {
                options,
                correct_answer_id,
            },
            Answer::Choice(selected),
        ) => {
            if !options.iter().any(|option| &option.id == selected) {
                return Err(EvaluationError::UnknownOption {
                    exercise: exercise.id.clone(),
                    option: selected.clone(),
                });
            }
            Ok(Verdict::from_bool(selected == correct_answer_id))
        }
        (ExerciseKind::TrueFalse { correct_answer }, Answer::Boolean(given)) => {
            Ok(Verdict::from_bool(given == correct_answer))
        }
        (ExerciseKind::FillBlank { correct_answer }, Answer::Text(given)) => {
            let given = normalize_text(given);
            if given.is_empty() {
                return Err(EvaluationError::EmptyAnswer(exercise.id.clone()));
            }
            Ok(Verdict::from_bool(given == normalize_text(correct_answer)))
        }
        _ => Err(EvaluationError::AnswerKindMismatch(exercise.id.clone())),
    }
}

/// Canonical form for fill-in answers.
///
/// Trims, collapses inner whitespace, lower-cases and maps Persian and
/// Arabic-Indic digits to ASCII so `۱۵` matches `15`.
#[must_use]
pub fn normalize_text(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .map(ascii_digit)
        .flat_map(char::to_lowercase)
        .collect()
}

fn ascii_digit(ch: char) -> char {
    let offset = match ch {
        '\u{06F0}'..='\u{06F9}' => Some(ch as u32 - 0x06F0),
        '\u{0660}'..='\u{0669}' => Some(ch as u32 - 0x0660),
        _ => None,
    };
    offset
        .and_then(|digit| char::from_digit(digit, 10))
        .unwrap_or(ch)
}

//
// ─── QUIZ SCORING ──────────────────────────────────────────────────────────────
//

/// Colour band used when presenting a quiz score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score >= 70.0 {
            Self::High
        } else if score >= 40.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Result of grading a finished quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub correct_answers: u32,
    pub total_questions: u32,
    /// Percentage, unrounded.
    pub score: f64,
    /// Questions that could not be graded (unanswered or wrong answer kind).
    pub ungraded: Vec<ExerciseId>,
}

/// Grades every question of a quiz against the learner's answers.
///
/// Every exercise variant goes through [`evaluate`]; questions without a
/// usable answer count as incorrect and are listed in `ungraded`.
#[must_use]
pub fn score_quiz(quiz: &Quiz, answers: &HashMap<ExerciseId, Answer>) -> QuizOutcome {
    let mut correct_answers = 0u32;
    let mut ungraded = Vec::new();

    for question in &quiz.questions {
        let verdict = answers
            .get(&question.id)
            .map(|answer| evaluate(question, answer));
        match verdict {
            Some(Ok(Verdict::Correct)) => correct_answers += 1,
            Some(Ok(Verdict::Incorrect)) => {}
            Some(Err(_)) | None => ungraded.push(question.id.clone()),
        }
    }

    let total_questions = u32::try_from(quiz.questions.len()).unwrap_or(u32::MAX);
    let score = percentage(correct_answers, total_questions);

    QuizOutcome {
        correct_answers,
        total_questions,
        score,
        ungraded,
    }
}

/// `part / whole * 100`, or 0 when `whole` is zero.
#[must_use]
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(whole) * 100.0
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChapterId, Difficulty, ExerciseOption, QuizId};

    fn mcq(id: &str, correct: &str) -> Exercise {
        Exercise::multiple_choice(
            id,
            "?",
            Difficulty::Easy,
            vec![
                ExerciseOption::new("opt1", "3"),
                ExerciseOption::new("opt2", "4"),
                ExerciseOption::new("opt3", "5"),
            ],
            correct,
        )
    }

    fn choice(id: &str) -> Answer {
        Answer::Choice(OptionId::from(id))
    }

    #[test]
    fn multiple_choice_is_correct_only_for_designated_option() {
        let exercise = mcq("mcq1-ch1-l1", "opt2");
        assert_eq!(evaluate(&exercise, &choice("opt2")), Ok(Verdict::Correct));
        assert_eq!(evaluate(&exercise, &choice("opt1")), Ok(Verdict::Incorrect));
        assert_eq!(evaluate(&exercise, &choice("opt3")), Ok(Verdict::Incorrect));
    }

    #[test]
    fn foreign_option_is_an_error() {
        let exercise = mcq("mcq1-ch1-l1", "opt2");
        assert!(matches!(
            evaluate(&exercise, &choice("zzz")),
            Err(EvaluationError::UnknownOption { .. })
        ));
    }

    #[test]
    fn answer_kind_must_match_variant() {
        let exercise = mcq("mcq1-ch1-l1", "opt2");
        assert_eq!(
            evaluate(&exercise, &Answer::Boolean(true)),
            Err(EvaluationError::AnswerKindMismatch(ExerciseId::from("mcq1-ch1-l1")))
        );
    }

    #[test]
    fn true_false_compares_booleans() {
        let exercise = Exercise {
            kind: ExerciseKind::TrueFalse {
                correct_answer: false,
            },
            ..mcq("tf", "opt1")
        };
        assert_eq!(evaluate(&exercise, &Answer::Boolean(false)), Ok(Verdict::Correct));
        assert_eq!(evaluate(&exercise, &Answer::Boolean(true)), Ok(Verdict::Incorrect));
    }

    #[test]
    fn fill_blank_normalizes_digits_and_spacing() {
        let exercise = Exercise {
            kind: ExerciseKind::FillBlank {
                correct_answer: "15".into(),
            },
            ..mcq("fb", "opt1")
        };
        assert_eq!(
            evaluate(&exercise, &Answer::Text(" ۱۵ ".into())),
            Ok(Verdict::Correct)
        );
        assert_eq!(
            evaluate(&exercise, &Answer::Text("16".into())),
            Ok(Verdict::Incorrect)
        );
        assert!(matches!(
            evaluate(&exercise, &Answer::Text("   ".into())),
            Err(EvaluationError::EmptyAnswer(_))
        ));
    }

    #[test]
    fn normalize_text_lowercases_and_collapses() {
        assert_eq!(normalize_text("  Twenty   CM "), "twenty cm");
        assert_eq!(normalize_text("٣"), "3");
    }

    #[test]
    fn quiz_with_two_of_three_correct_scores_two_thirds() {
        let quiz = Quiz {
            id: QuizId::from("quiz-ch1"),
            chapter_id: ChapterId::from("ch1"),
            title: "Quiz".into(),
            questions: vec![mcq("q1", "opt2"), mcq("q2", "opt3"), mcq("q3", "opt1")],
        };
        let answers = HashMap::from([
            (ExerciseId::from("q1"), choice("opt2")),
            (ExerciseId::from("q2"), choice("opt3")),
            (ExerciseId::from("q3"), choice("opt2")),
        ]);
        let outcome = score_quiz(&quiz, &answers);
        assert_eq!(outcome.correct_answers, 2);
        assert_eq!(outcome.total_questions, 3);
        assert!((outcome.score - 66.666_666).abs() < 0.001);
        assert!(outcome.ungraded.is_empty());
    }

    #[test]
    fn unanswered_questions_count_as_incorrect() {
        let quiz = Quiz {
            id: QuizId::from("quiz-ch2"),
            chapter_id: ChapterId::from("ch2"),
            title: "Quiz".into(),
            questions: vec![mcq("q1", "opt1"), mcq("q2", "opt1")],
        };
        let answers = HashMap::from([(ExerciseId::from("q1"), choice("opt1"))]);
        let outcome = score_quiz(&quiz, &answers);
        assert_eq!(outcome.correct_answers, 1);
        assert_eq!(outcome.score, 50.0);
        assert_eq!(outcome.ungraded, vec![ExerciseId::from("q2")]);
    }

    #[test]
    fn score_bands() {
        assert_eq!(ScoreBand::for_score(70.0), ScoreBand::High);
        assert_eq!(ScoreBand::for_score(66.7), ScoreBand::Medium);
        assert_eq!(ScoreBand::for_score(39.9), ScoreBand::Low);
    }

    #[test]
    fn percentage_of_empty_whole_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }
}
