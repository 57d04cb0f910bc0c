use std::collections::HashMap;

use tracing::warn;

use mathbook_core::evaluator::{EvaluationError, QuizOutcome, evaluate, score_quiz};
use mathbook_core::model::{Answer, ChapterId, Exercise, ExerciseId, Quiz, QuizScore};

use crate::error::SessionError;
use crate::progress_service::ProgressService;

/// What the quiz route shows.
#[derive(Debug, Clone)]
pub enum QuizView {
    /// The chapter already has a score; it is shown instead of the questions.
    Summary(QuizScore),
    Active(QuizSession),
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizStep {
    Question(usize),
    Finished(QuizScore),
}

/// Result of the synchronous half of "next".
#[derive(Debug, Clone, PartialEq)]
pub enum QuizAdvance {
    Question(usize),
    /// The quiz is graded and closed; the outcome still has to be stored
    /// with [`QuizSession::record`].
    Graded(QuizOutcome),
}

/// A single pass through a chapter quiz.
///
/// Answers can be changed freely until the final "next", which grades the
/// whole quiz and stores the score.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    index: usize,
    answers: HashMap<ExerciseId, Answer>,
    finished: bool,
}

impl QuizSession {
    /// Open the quiz, or its summary when the chapter already has a score.
    #[must_use]
    pub fn start(quiz: &Quiz, progress: &ProgressService) -> QuizView {
        match progress.quiz_score(&quiz.chapter_id) {
            Some(score) => QuizView::Summary(score),
            None => QuizView::Active(Self {
                quiz: quiz.clone(),
                index: 0,
                answers: HashMap::new(),
                finished: false,
            }),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.quiz.questions.len()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.quiz.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Exercise> {
        self.quiz.questions.get(self.index)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Answer> {
        self.current_question()
            .and_then(|question| self.answers.get(&question.id))
    }

    /// Record the answer to the current question, replacing an earlier one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after submission and
    /// `SessionError::Evaluation` when the answer does not fit the question.
    pub fn select(&mut self, answer: Answer) -> Result<(), SessionError> {
        if self.finished {
            return Err(SessionError::Completed);
        }
        let question = self.current_question().ok_or(SessionError::Completed)?;
        let id = question.id.clone();
        // Grading happens at submit; this only rejects answers of the wrong shape.
        match evaluate(question, &answer) {
            Ok(_) => {
                self.answers.insert(id, answer);
                Ok(())
            }
            Err(err @ EvaluationError::EmptyAnswer(_)) => {
                // A cleared text box leaves the question unanswered.
                self.answers.remove(&id);
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Move to the next question, or grade and close the quiz after the last
    /// one. The store is not touched.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSelection` while the current question is
    /// unanswered and `SessionError::Completed` after grading.
    pub fn advance(&mut self) -> Result<QuizAdvance, SessionError> {
        if self.finished {
            return Err(SessionError::Completed);
        }
        if self.selected().is_none() {
            return Err(SessionError::NoSelection);
        }
        if self.is_last() {
            Ok(QuizAdvance::Graded(self.grade()?))
        } else {
            self.index += 1;
            Ok(QuizAdvance::Question(self.index))
        }
    }

    /// Advance to the next question, submitting after the last one.
    ///
    /// # Errors
    ///
    /// Same as [`QuizSession::advance`], plus `SessionError::Progress` if the
    /// score cannot be stored.
    pub async fn next(&mut self, progress: &ProgressService) -> Result<QuizStep, SessionError> {
        match self.advance()? {
            QuizAdvance::Question(index) => Ok(QuizStep::Question(index)),
            QuizAdvance::Graded(outcome) => {
                let score = Self::record(&self.quiz.chapter_id, &outcome, progress).await?;
                Ok(QuizStep::Finished(score))
            }
        }
    }

    /// Grade every question and close the quiz.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when already graded.
    pub fn grade(&mut self) -> Result<QuizOutcome, SessionError> {
        if self.finished {
            return Err(SessionError::Completed);
        }
        let outcome = score_quiz(&self.quiz, &self.answers);
        if !outcome.ungraded.is_empty() {
            warn!(
                quiz = %self.quiz.id,
                ungraded = outcome.ungraded.len(),
                "quiz submitted with ungraded questions"
            );
        }
        self.finished = true;
        Ok(outcome)
    }

    /// Store a graded outcome as the chapter score.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Progress` if the score cannot be stored.
    pub async fn record(
        chapter_id: &ChapterId,
        outcome: &QuizOutcome,
        progress: &ProgressService,
    ) -> Result<QuizScore, SessionError> {
        Ok(progress.record_quiz_outcome(chapter_id, outcome).await?)
    }

    /// Grade every question and store the chapter score.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when already submitted and
    /// `SessionError::Progress` if the score cannot be stored.
    pub async fn submit(&mut self, progress: &ProgressService) -> Result<QuizScore, SessionError> {
        let outcome = self.grade()?;
        Self::record(&self.quiz.chapter_id, &outcome, progress).await
    }
}
