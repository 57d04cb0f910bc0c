//! Shared error types for the services crate.

use thiserror::Error;

use mathbook_core::evaluator::EvaluationError;
use mathbook_core::interaction::InteractionError;
use mathbook_core::model::{ChapterId, CurriculumError, LessonId, ProgressError, QuizId};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while loading or validating the curriculum catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("curriculum is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("chapter {0} appears more than once")]
    DuplicateChapter(ChapterId),
    #[error("lesson {0} appears in more than one chapter")]
    DuplicateLesson(LessonId),
    #[error("quiz {quiz} belongs to unknown chapter {chapter}")]
    UnknownQuizChapter { quiz: QuizId, chapter: ChapterId },
    #[error("chapter {0} has more than one quiz")]
    DuplicateQuiz(ChapterId),
    #[error(transparent)]
    Curriculum(#[from] CurriculumError),
}

/// Errors emitted by lesson and quiz sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("lesson has no exercises")]
    NoExercise,
    #[error("select an answer before continuing")]
    NoSelection,
    #[error("attempt the exercise before moving on")]
    NotAttempted,
    #[error("quiz already submitted")]
    Completed,
    #[error(transparent)]
    Interaction(#[from] InteractionError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
