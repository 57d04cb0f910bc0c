//! Transient per-exercise interaction state.
//!
//! An `ExerciseInteraction` lives as long as one rendering of an exercise.
//! Persisted attempt counts live in `UserProgress`; this type only decides
//! what the caller must record.

use thiserror::Error;

use crate::evaluator::{EvaluationError, Verdict, evaluate};
use crate::model::{Answer, Exercise, ExerciseAttempt};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InteractionError {
    #[error("select an answer before submitting")]
    NoSelection,

    #[error("exercise already submitted")]
    Locked,

    #[error("exercise already answered correctly")]
    AlreadyCorrect,

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Unanswered,
    Submitted(Verdict),
}

/// What the caller has to do after a solution reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// No attempt was ever persisted: record one incorrect attempt.
    RecordImplicitAttempt,
    /// Nothing to record.
    Revealed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseInteraction {
    selection: Option<Answer>,
    state: InteractionState,
    solution_revealed: bool,
}

impl Default for ExerciseInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseInteraction {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selection: None,
            state: InteractionState::Unanswered,
            solution_revealed: false,
        }
    }

    /// # Errors
    ///
    /// Returns `InteractionError::Locked` once the exercise is submitted.
    pub fn select(&mut self, answer: Answer) -> Result<(), InteractionError> {
        if self.is_submitted() {
            return Err(InteractionError::Locked);
        }
        self.selection = Some(answer);
        Ok(())
    }

    /// Grades the current selection and locks the exercise.
    ///
    /// # Errors
    ///
    /// Returns `NoSelection` when nothing is selected (nothing should be
    /// recorded in that case), `Locked` when already submitted, or the
    /// evaluator's error.
    pub fn submit(&mut self, exercise: &Exercise) -> Result<Verdict, InteractionError> {
        if self.is_submitted() {
            return Err(InteractionError::Locked);
        }
        let answer = self.selection.as_ref().ok_or(InteractionError::NoSelection)?;
        let verdict = evaluate(exercise, answer)?;
        self.state = InteractionState::Submitted(verdict);
        self.solution_revealed = true;
        Ok(verdict)
    }

    /// Shows the solution, treating an unsubmitted exercise as answered wrong.
    ///
    /// `persisted` is the stored attempt record for this exercise, if any.
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::AlreadyCorrect` when the latest stored
    /// verdict, or the verdict of this visit, is correct.
    pub fn reveal_solution(
        &mut self,
        persisted: Option<ExerciseAttempt>,
    ) -> Result<RevealOutcome, InteractionError> {
        if persisted.is_some_and(|attempt| attempt.is_correct())
            || self.verdict().is_some_and(Verdict::is_correct)
        {
            return Err(InteractionError::AlreadyCorrect);
        }
        self.solution_revealed = true;
        // A submission in this visit already accounts for an attempt, even
        // while its write is still in flight.
        if self.is_submitted() {
            return Ok(RevealOutcome::Revealed);
        }
        self.state = InteractionState::Submitted(Verdict::Incorrect);
        let attempts = persisted.map_or(0, |attempt| attempt.attempts);
        if attempts == 0 {
            Ok(RevealOutcome::RecordImplicitAttempt)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Answer> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        match self.state {
            InteractionState::Submitted(verdict) => Some(verdict),
            InteractionState::Unanswered => None,
        }
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        matches!(self.state, InteractionState::Submitted(_))
    }

    #[must_use]
    pub fn solution_revealed(&self) -> bool {
        self.solution_revealed
    }
}
