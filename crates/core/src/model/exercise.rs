use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::{ExerciseId, OptionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseError {
    #[error("exercise {0} has an empty question")]
    EmptyQuestion(ExerciseId),

    #[error("exercise {0} needs at least two options")]
    TooFewOptions(ExerciseId),

    #[error("exercise {exercise} lists option {option} more than once")]
    DuplicateOption {
        exercise: ExerciseId,
        option: OptionId,
    },

    #[error("exercise {exercise} marks unknown option {option} as correct")]
    UnknownCorrectOption {
        exercise: ExerciseId,
        option: OptionId,
    },

    #[error("exercise {0} has an empty expected answer")]
    EmptyExpectedAnswer(ExerciseId),
}

//
// ─── EXERCISE TYPES ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseOption {
    pub id: OptionId,
    /// Option label; may embed math markup.
    pub text: String,
}

impl ExerciseOption {
    #[must_use]
    pub fn new(id: impl Into<OptionId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Variant-specific part of an exercise, tagged by `type` in serialized data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExerciseKind {
    #[serde(rename = "MCQ", rename_all = "camelCase")]
    MultipleChoice {
        options: Vec<ExerciseOption>,
        correct_answer_id: OptionId,
    },
    #[serde(rename = "TRUE_FALSE", rename_all = "camelCase")]
    TrueFalse { correct_answer: bool },
    #[serde(rename = "FILL_BLANK", rename_all = "camelCase")]
    FillBlank { correct_answer: String },
}

/// A gradeable question, used both inside lessons and inside quizzes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: ExerciseId,
    pub question: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(flatten)]
    pub kind: ExerciseKind,
}

/// A learner's response to an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Answer {
    Choice(OptionId),
    Boolean(bool),
    Text(String),
}

impl Exercise {
    /// Build a multiple-choice exercise with no explanation.
    #[must_use]
    pub fn multiple_choice(
        id: impl Into<ExerciseId>,
        question: impl Into<String>,
        difficulty: Difficulty,
        options: Vec<ExerciseOption>,
        correct_answer_id: impl Into<OptionId>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            difficulty,
            explanation: None,
            kind: ExerciseKind::MultipleChoice {
                options,
                correct_answer_id: correct_answer_id.into(),
            },
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Checks the structural invariants of the exercise.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError` when the question is blank, a multiple-choice
    /// exercise has fewer than two or duplicated options, its correct answer
    /// does not name one of its options, or a fill-in answer is blank.
    pub fn validate(&self) -> Result<(), ExerciseError> {
        if self.question.trim().is_empty() {
            return Err(ExerciseError::EmptyQuestion(self.id.clone()));
        }

        match &self.kind {
            ExerciseKind::MultipleChoice {
                options,
                correct_answer_id,
            } => {
                if options.len() < 2 {
                    return Err(ExerciseError::TooFewOptions(self.id.clone()));
                }
                let mut seen = HashSet::with_capacity(options.len());
                for option in options {
                    if !seen.insert(&option.id) {
                        return Err(ExerciseError::DuplicateOption {
                            exercise: self.id.clone(),
                            option: option.id.clone(),
                        });
                    }
                }
                if !seen.contains(correct_answer_id) {
                    return Err(ExerciseError::UnknownCorrectOption {
                        exercise: self.id.clone(),
                        option: correct_answer_id.clone(),
                    });
                }
                Ok(())
            }
            ExerciseKind::TrueFalse { .. } => Ok(()),
            ExerciseKind::FillBlank { correct_answer } => {
                if correct_answer.trim().is_empty() {
                    return Err(ExerciseError::EmptyExpectedAnswer(self.id.clone()));
                }
                Ok(())
            }
        }
    }

    /// Options in display order; empty for non-choice exercises.
    #[must_use]
    pub fn options(&self) -> &[ExerciseOption] {
        match &self.kind {
            ExerciseKind::MultipleChoice { options, .. } => options,
            ExerciseKind::TrueFalse { .. } | ExerciseKind::FillBlank { .. } => &[],
        }
    }

    #[must_use]
    pub fn option(&self, id: &OptionId) -> Option<&ExerciseOption> {
        self.options().iter().find(|option| &option.id == id)
    }

    /// The canonical answer expressed as an `Answer`.
    #[must_use]
    pub fn correct_answer(&self) -> Answer {
        match &self.kind {
            ExerciseKind::MultipleChoice {
                correct_answer_id, ..
            } => Answer::Choice(correct_answer_id.clone()),
            ExerciseKind::TrueFalse { correct_answer } => Answer::Boolean(*correct_answer),
            ExerciseKind::FillBlank { correct_answer } => Answer::Text(correct_answer.clone()),
        }
    }

    #[must_use]
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.kind, ExerciseKind::MultipleChoice { .. })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
