use thiserror::Error;

use crate::evaluator::EvaluationError;
use crate::interaction::InteractionError;
use crate::model::{CurriculumError, ExerciseError, ProgressError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Exercise(#[from] ExerciseError),
    #[error(transparent)]
    Curriculum(#[from] CurriculumError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Interaction(#[from] InteractionError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
