use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use mathbook_core::evaluator::{QuizOutcome, percentage};
use mathbook_core::model::{
    ChapterId, Exercise, ExerciseAttempt, ExerciseId, LessonId, ProgressError, QuizScore,
    UserProgress,
};
use storage::record::{decode_progress, encode_progress};
use storage::repository::SnapshotStore;

use crate::Clock;
use crate::catalog::{ContentCatalog, to_u32};

/// Key of the single persisted progress snapshot.
pub const PROGRESS_STORAGE_KEY: &str = "mathAppUserProgress";

//
// ─── OVERVIEW ──────────────────────────────────────────────────────────────────
//

/// Aggregates shown on the progress page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressOverview {
    pub lessons_completed: usize,
    pub total_lessons: usize,
    pub lessons_percent: f64,
    pub exercises_attempted: usize,
    pub exercises_correct: usize,
    pub quizzes_taken: usize,
    /// Mean of the stored quiz scores, 0 when no quiz was taken.
    pub average_quiz_score: f64,
    /// True when the learner has done nothing yet.
    pub is_empty: bool,
}

impl ProgressOverview {
    #[must_use]
    pub fn from_progress(progress: &UserProgress, catalog: &ContentCatalog) -> Self {
        let lessons_completed = catalog.completed_lessons(progress);
        let total_lessons = catalog.total_lessons();
        let exercises_attempted = progress.exercise_attempts().len();
        let exercises_correct = progress
            .exercise_attempts()
            .values()
            .filter(|attempt| attempt.is_correct())
            .count();
        let quizzes_taken = progress.quiz_scores().len();
        let average_quiz_score = if quizzes_taken == 0 {
            0.0
        } else {
            let total: f64 = progress.quiz_scores().values().map(QuizScore::score).sum();
            total / f64::from(to_u32(quizzes_taken))
        };

        Self {
            lessons_completed,
            total_lessons,
            lessons_percent: percentage(to_u32(lessons_completed), to_u32(total_lessons)),
            exercises_attempted,
            exercises_correct,
            quizzes_taken,
            average_quiz_score,
            is_empty: progress.is_empty(),
        }
    }
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Owns the learner's progress and mirrors every change to the snapshot store.
///
/// The in-memory state is authoritative. Persistence failures are logged and
/// never surfaced to callers.
pub struct ProgressService {
    clock: Clock,
    store: Arc<dyn SnapshotStore>,
    state: Mutex<UserProgress>,
}

impl ProgressService {
    /// Restore progress from `store`, falling back to an empty record when the
    /// snapshot is missing, unreadable or malformed.
    pub async fn load(clock: Clock, store: Arc<dyn SnapshotStore>) -> Self {
        let progress = match store.load(PROGRESS_STORAGE_KEY).await {
            Ok(Some(raw)) => match decode_progress(&raw) {
                Ok(progress) => {
                    debug!(
                        lessons = progress.completed_lessons().len(),
                        exercises = progress.exercise_attempts().len(),
                        quizzes = progress.quiz_scores().len(),
                        "restored progress snapshot"
                    );
                    progress
                }
                Err(err) => {
                    warn!(error = %err, "discarding malformed progress snapshot");
                    UserProgress::new()
                }
            },
            Ok(None) => {
                debug!("no progress snapshot, starting fresh");
                UserProgress::new()
            }
            Err(err) => {
                warn!(error = %err, "failed to read progress snapshot, starting fresh");
                UserProgress::new()
            }
        };

        Self {
            clock,
            store,
            state: Mutex::new(progress),
        }
    }

    fn state(&self) -> MutexGuard<'_, UserProgress> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clone of the current progress, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> UserProgress {
        self.state().clone()
    }

    #[must_use]
    pub fn overview(&self, catalog: &ContentCatalog) -> ProgressOverview {
        ProgressOverview::from_progress(&self.state(), catalog)
    }

    /// Add the lesson to the completed set. Repeated calls leave the set as is.
    ///
    /// Returns `true` if the lesson was not completed before.
    pub async fn mark_lesson_completed(&self, lesson_id: &LessonId) -> bool {
        let (inserted, snapshot) = {
            let mut state = self.state();
            let inserted = state.mark_lesson_completed(lesson_id.clone());
            (inserted, state.clone())
        };
        if inserted {
            info!(lesson = %lesson_id, "lesson completed");
        }
        self.persist(&snapshot).await;
        inserted
    }

    /// Count one more attempt and keep only the latest verdict.
    pub async fn record_exercise_attempt(
        &self,
        exercise: &Exercise,
        is_correct: bool,
    ) -> ExerciseAttempt {
        let (attempt, snapshot) = {
            let mut state = self.state();
            let attempt = state.record_attempt(exercise.id.clone(), is_correct);
            (attempt, state.clone())
        };
        debug!(
            exercise = %exercise.id,
            attempts = attempt.attempts,
            correct = is_correct,
            "exercise attempt recorded"
        );
        self.persist(&snapshot).await;
        attempt
    }

    /// Store the chapter's quiz result, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` when the numbers do not describe a valid score.
    /// Nothing is stored in that case.
    pub async fn record_quiz_score(
        &self,
        chapter_id: &ChapterId,
        score: f64,
        total_questions: u32,
        correct_answers: u32,
    ) -> Result<QuizScore, ProgressError> {
        let quiz_score =
            QuizScore::new(score, total_questions, correct_answers, self.clock.now())?;
        let snapshot = {
            let mut state = self.state();
            state.record_quiz_score(chapter_id.clone(), quiz_score.clone());
            state.clone()
        };
        info!(
            chapter = %chapter_id,
            score,
            correct_answers,
            total_questions,
            "quiz score recorded"
        );
        self.persist(&snapshot).await;
        Ok(quiz_score)
    }

    /// # Errors
    ///
    /// See [`ProgressService::record_quiz_score`].
    pub async fn record_quiz_outcome(
        &self,
        chapter_id: &ChapterId,
        outcome: &QuizOutcome,
    ) -> Result<QuizScore, ProgressError> {
        self.record_quiz_score(
            chapter_id,
            outcome.score,
            outcome.total_questions,
            outcome.correct_answers,
        )
        .await
    }

    #[must_use]
    pub fn lesson_status(&self, lesson_id: &LessonId) -> bool {
        self.state().is_lesson_completed(lesson_id)
    }

    #[must_use]
    pub fn exercise_status(&self, exercise_id: &ExerciseId) -> Option<ExerciseAttempt> {
        self.state().exercise_attempt(exercise_id)
    }

    #[must_use]
    pub fn quiz_score(&self, chapter_id: &ChapterId) -> Option<QuizScore> {
        self.state().quiz_score(chapter_id).cloned()
    }

    /// Forget everything and delete the persisted snapshot.
    pub async fn reset_progress(&self) {
        *self.state() = UserProgress::new();
        match self.store.clear(PROGRESS_STORAGE_KEY).await {
            Ok(()) => info!("progress reset"),
            Err(err) => error!(error = %err, "failed to delete progress snapshot"),
        }
    }

    async fn persist(&self, snapshot: &UserProgress) {
        let encoded = match encode_progress(snapshot) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!(error = %err, "failed to encode progress snapshot");
                return;
            }
        };
        if let Err(err) = self.store.save(PROGRESS_STORAGE_KEY, &encoded).await {
            error!(error = %err, "failed to persist progress snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mathbook_core::model::{Difficulty, ExerciseOption};
    use mathbook_core::time::{fixed_clock, fixed_now};
    use storage::repository::InMemorySnapshotStore;

    fn exercise() -> Exercise {
        Exercise::multiple_choice(
            "mcq1-ch1-l1",
            "2 + 2",
            Difficulty::Easy,
            vec![
                ExerciseOption::new("opt1", "3"),
                ExerciseOption::new("opt2", "4"),
            ],
            "opt2",
        )
    }

    async fn service(store: &InMemorySnapshotStore) -> ProgressService {
        ProgressService::load(fixed_clock(), Arc::new(store.clone())).await
    }

    #[tokio::test]
    async fn every_mutation_is_persisted() {
        let store = InMemorySnapshotStore::new();
        let progress = service(&store).await;

        progress.record_exercise_attempt(&exercise(), false).await;
        let reloaded = service(&store).await;
        assert_eq!(
            reloaded.exercise_status(&ExerciseId::from("mcq1-ch1-l1")),
            Some(ExerciseAttempt::new(1, Some(false)))
        );

        progress.mark_lesson_completed(&LessonId::from("l1-ch1")).await;
        let reloaded = service(&store).await;
        assert!(reloaded.lesson_status(&LessonId::from("l1-ch1")));
    }

    #[tokio::test]
    async fn quiz_score_is_stamped_with_clock() {
        let store = InMemorySnapshotStore::new();
        let progress = service(&store).await;

        let score = progress
            .record_quiz_score(&ChapterId::from("ch1"), 50.0, 2, 1)
            .await
            .unwrap();
        assert_eq!(score.date_taken(), fixed_now());
        assert_eq!(
            progress.quiz_score(&ChapterId::from("ch1")).unwrap().score(),
            50.0
        );
    }

    #[tokio::test]
    async fn invalid_quiz_score_is_not_stored() {
        let store = InMemorySnapshotStore::new();
        let progress = service(&store).await;

        let err = progress
            .record_quiz_score(&ChapterId::from("ch1"), 50.0, 0, 0)
            .await
            .unwrap_err();
        assert_eq!(err, ProgressError::NoQuestions);
        assert!(progress.snapshot().is_empty());
        assert!(!store.contains(PROGRESS_STORAGE_KEY));
    }

    #[tokio::test]
    async fn overview_aggregates_progress() {
        let catalog = ContentCatalog::bundled().unwrap();
        let store = InMemorySnapshotStore::new();
        let progress = service(&store).await;

        let empty = progress.overview(&catalog);
        assert!(empty.is_empty);
        assert_eq!(empty.total_lessons, 3);
        assert_eq!(empty.average_quiz_score, 0.0);

        progress.mark_lesson_completed(&LessonId::from("l1-ch2")).await;
        progress.record_exercise_attempt(&exercise(), true).await;
        progress
            .record_quiz_score(&ChapterId::from("ch1"), 100.0, 3, 3)
            .await
            .unwrap();
        progress
            .record_quiz_score(&ChapterId::from("ch2"), 50.0, 2, 1)
            .await
            .unwrap();

        let overview = progress.overview(&catalog);
        assert!(!overview.is_empty);
        assert_eq!(overview.lessons_completed, 1);
        assert!((overview.lessons_percent - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(overview.exercises_attempted, 1);
        assert_eq!(overview.exercises_correct, 1);
        assert_eq!(overview.quizzes_taken, 2);
        assert_eq!(overview.average_quiz_score, 75.0);
    }
}
