use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use crate::model::ids::{ChapterId, ExerciseId, LessonId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("a quiz score needs at least one question")]
    NoQuestions,

    #[error("correct answers ({correct}) exceed total questions ({total})")]
    TooManyCorrect { correct: u32, total: u32 },

    #[error("quiz score must be within 0..=100, got {0}")]
    ScoreOutOfRange(f64),
}

//
// ─── RECORDS ───────────────────────────────────────────────────────────────────
//

/// Attempt counter for one exercise.
///
/// `correct` reflects the most recent attempt only; `None` means no verdict
/// has been recorded yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExerciseAttempt {
    pub attempts: u32,
    pub correct: Option<bool>,
}

impl ExerciseAttempt {
    #[must_use]
    pub fn new(attempts: u32, correct: Option<bool>) -> Self {
        Self { attempts, correct }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct == Some(true)
    }
}

/// The latest quiz result for a chapter.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizScore {
    score: f64,
    total_questions: u32,
    correct_answers: u32,
    date_taken: DateTime<Utc>,
}

impl QuizScore {
    /// # Errors
    ///
    /// Returns `ProgressError` if `total_questions` is zero, `correct_answers`
    /// exceeds it, or `score` is not a percentage.
    pub fn new(
        score: f64,
        total_questions: u32,
        correct_answers: u32,
        date_taken: DateTime<Utc>,
    ) -> Result<Self, ProgressError> {
        if total_questions == 0 {
            return Err(ProgressError::NoQuestions);
        }
        if correct_answers > total_questions {
            return Err(ProgressError::TooManyCorrect {
                correct: correct_answers,
                total: total_questions,
            });
        }
        if !(0.0..=100.0).contains(&score) {
            return Err(ProgressError::ScoreOutOfRange(score));
        }
        Ok(Self {
            score,
            total_questions,
            correct_answers,
            date_taken,
        })
    }

    /// Percentage in `0..=100`, unrounded.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn date_taken(&self) -> DateTime<Utc> {
        self.date_taken
    }
}

//
// ─── USER PROGRESS ─────────────────────────────────────────────────────────────
//

/// Everything the learner has done so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProgress {
    completed_lessons: BTreeSet<LessonId>,
    exercise_attempts: BTreeMap<ExerciseId, ExerciseAttempt>,
    quiz_scores: BTreeMap<ChapterId, QuizScore>,
}

impl UserProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted parts.
    #[must_use]
    pub fn from_parts(
        completed_lessons: BTreeSet<LessonId>,
        exercise_attempts: BTreeMap<ExerciseId, ExerciseAttempt>,
        quiz_scores: BTreeMap<ChapterId, QuizScore>,
    ) -> Self {
        Self {
            completed_lessons,
            exercise_attempts,
            quiz_scores,
        }
    }

    /// Returns `true` if the lesson was not already completed.
    pub fn mark_lesson_completed(&mut self, lesson_id: LessonId) -> bool {
        self.completed_lessons.insert(lesson_id)
    }

    /// Bumps the attempt counter and overwrites the latest verdict.
    pub fn record_attempt(&mut self, exercise_id: ExerciseId, is_correct: bool) -> ExerciseAttempt {
        let entry = self.exercise_attempts.entry(exercise_id).or_default();
        entry.attempts = entry.attempts.saturating_add(1);
        entry.correct = Some(is_correct);
        *entry
    }

    /// Replaces any earlier result for the chapter.
    pub fn record_quiz_score(&mut self, chapter_id: ChapterId, score: QuizScore) {
        self.quiz_scores.insert(chapter_id, score);
    }

    #[must_use]
    pub fn is_lesson_completed(&self, lesson_id: &LessonId) -> bool {
        self.completed_lessons.contains(lesson_id)
    }

    #[must_use]
    pub fn exercise_attempt(&self, exercise_id: &ExerciseId) -> Option<ExerciseAttempt> {
        self.exercise_attempts.get(exercise_id).copied()
    }

    #[must_use]
    pub fn quiz_score(&self, chapter_id: &ChapterId) -> Option<&QuizScore> {
        self.quiz_scores.get(chapter_id)
    }

    #[must_use]
    pub fn completed_lessons(&self) -> &BTreeSet<LessonId> {
        &self.completed_lessons
    }

    #[must_use]
    pub fn exercise_attempts(&self) -> &BTreeMap<ExerciseId, ExerciseAttempt> {
        &self.exercise_attempts
    }

    #[must_use]
    pub fn quiz_scores(&self) -> &BTreeMap<ChapterId, QuizScore> {
        &self.quiz_scores
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed_lessons.is_empty()
            && self.exercise_attempts.is_empty()
            && self.quiz_scores.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
