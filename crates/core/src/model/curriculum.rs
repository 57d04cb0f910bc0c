use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::exercise::{Exercise, ExerciseError};
use crate::model::ids::{ChapterId, LessonId, QuizId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CurriculumError {
    #[error("chapter {0} has an empty title")]
    EmptyChapterTitle(ChapterId),

    #[error("chapter {chapter} contains lesson {lesson} more than once")]
    DuplicateLesson { chapter: ChapterId, lesson: LessonId },

    #[error("lesson {lesson} contains exercise {exercise} more than once")]
    DuplicateExercise { lesson: LessonId, exercise: String },

    #[error("quiz {0} has no questions")]
    EmptyQuiz(QuizId),

    #[error(transparent)]
    Exercise(#[from] ExerciseError),
}

/// A worked problem shown before the exercises of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedExample {
    pub id: String,
    pub problem: String,
    pub solution_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    /// Rich text (HTML fragments with embedded math markup).
    pub content: String,
    #[serde(default)]
    pub solved_examples: Vec<SolvedExample>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Lesson {
    #[must_use]
    pub fn has_exercises(&self) -> bool {
        !self.exercises.is_empty()
    }

    /// # Errors
    ///
    /// Returns `CurriculumError` if an exercise is invalid or repeated.
    pub fn validate(&self) -> Result<(), CurriculumError> {
        let mut seen = HashSet::with_capacity(self.exercises.len());
        for exercise in &self.exercises {
            exercise.validate()?;
            if !seen.insert(&exercise.id) {
                return Err(CurriculumError::DuplicateExercise {
                    lesson: self.id.clone(),
                    exercise: exercise.id.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Chapter {
    #[must_use]
    pub fn lesson(&self, id: &LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| &lesson.id == id)
    }

    /// # Errors
    ///
    /// Returns `CurriculumError` for a blank title, a repeated lesson id or an
    /// invalid lesson.
    pub fn validate(&self) -> Result<(), CurriculumError> {
        if self.title.trim().is_empty() {
            return Err(CurriculumError::EmptyChapterTitle(self.id.clone()));
        }
        let mut seen = HashSet::with_capacity(self.lessons.len());
        for lesson in &self.lessons {
            if !seen.insert(&lesson.id) {
                return Err(CurriculumError::DuplicateLesson {
                    chapter: self.id.clone(),
                    lesson: lesson.id.clone(),
                });
            }
            lesson.validate()?;
        }
        Ok(())
    }
}

/// A chapter-scoped assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: QuizId,
    pub chapter_id: ChapterId,
    pub title: String,
    pub questions: Vec<Exercise>,
}

impl Quiz {
    /// # Errors
    ///
    /// Returns `CurriculumError::EmptyQuiz` when there are no questions, or the
    /// first invalid question's error.
    pub fn validate(&self) -> Result<(), CurriculumError> {
        if self.questions.is_empty() {
            return Err(CurriculumError::EmptyQuiz(self.id.clone()));
        }
        for question in &self.questions {
            question.validate()?;
        }
        Ok(())
    }
}
