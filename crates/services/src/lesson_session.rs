use mathbook_core::evaluator::Verdict;
use mathbook_core::interaction::{ExerciseInteraction, RevealOutcome};
use mathbook_core::model::{Answer, ChapterId, Exercise, ExerciseAttempt, Lesson, LessonId};
use mathbook_core::walk::{LessonWalk, WalkSignal};

use crate::error::SessionError;
use crate::progress_service::ProgressService;

//
// ─── RESULTS ───────────────────────────────────────────────────────────────────
//

/// Where the learner ends up after pressing "next".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStep {
    Exercise(usize),
    /// Past the last exercise; the lesson is completed and the caller returns
    /// to the chapter page.
    Finished,
}

/// Outcome of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub verdict: Verdict,
    pub attempt: ExerciseAttempt,
    pub lesson_completed: bool,
}

/// Progress writes owed by a synchronous session step.
///
/// The session state changes as soon as the step runs, so a second click sees
/// a locked exercise; the store catches up when the write is applied.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct ProgressWrite {
    attempt: Option<(Exercise, bool)>,
    complete_lesson: Option<LessonId>,
}

impl ProgressWrite {
    #[must_use]
    pub fn completes_lesson(&self) -> bool {
        self.complete_lesson.is_some()
    }

    /// Record the owed attempt and completion. Returns the stored attempt
    /// counter when an attempt was recorded.
    pub async fn apply(self, progress: &ProgressService) -> Option<ExerciseAttempt> {
        let attempt = match self.attempt {
            Some((exercise, is_correct)) => {
                Some(progress.record_exercise_attempt(&exercise, is_correct).await)
            }
            None => None,
        };
        if let Some(lesson_id) = self.complete_lesson {
            progress.mark_lesson_completed(&lesson_id).await;
        }
        attempt
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One visit to a lesson page.
///
/// Selection and submission state is per visit; attempt counts live in
/// [`ProgressService`] and survive leaving the lesson.
#[derive(Debug, Clone)]
pub struct LessonSession {
    chapter_id: ChapterId,
    lesson: Lesson,
    walk: LessonWalk,
    interaction: ExerciseInteraction,
}

impl LessonSession {
    #[must_use]
    pub fn new(chapter_id: ChapterId, lesson: Lesson) -> Self {
        let walk = LessonWalk::new(lesson.exercises.len());
        Self {
            chapter_id,
            lesson,
            walk,
            interaction: ExerciseInteraction::new(),
        }
    }

    /// Completes lessons without exercises. Returns whether the lesson was
    /// marked by this call.
    pub async fn on_view(&self, progress: &ProgressService) -> bool {
        match self.walk.on_view() {
            WalkSignal::CompleteLesson => progress.mark_lesson_completed(&self.lesson.id).await,
            _ => false,
        }
    }

    #[must_use]
    pub fn chapter_id(&self) -> &ChapterId {
        &self.chapter_id
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.walk.index()
    }

    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.walk.exercise_count()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.walk.is_last()
    }

    #[must_use]
    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.lesson.exercises.get(self.walk.index())
    }

    #[must_use]
    pub fn interaction(&self) -> &ExerciseInteraction {
        &self.interaction
    }

    /// # Errors
    ///
    /// Returns `SessionError::Interaction` once the exercise is submitted.
    pub fn select(&mut self, answer: Answer) -> Result<(), SessionError> {
        self.interaction.select(answer)?;
        Ok(())
    }

    /// Grade the selection and lock the exercise without touching the store.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoExercise` for a lesson without exercises and
    /// `SessionError::Interaction` when nothing is selected or the exercise is
    /// already submitted. Nothing is owed on error.
    pub fn grade(&mut self) -> Result<(Verdict, ProgressWrite), SessionError> {
        let exercise = self
            .current_exercise()
            .cloned()
            .ok_or(SessionError::NoExercise)?;
        let verdict = self.interaction.submit(&exercise)?;
        let complete_lesson = match self.walk.on_verdict(verdict.is_correct()) {
            WalkSignal::CompleteLesson => Some(self.lesson.id.clone()),
            _ => None,
        };
        Ok((
            verdict,
            ProgressWrite {
                attempt: Some((exercise, verdict.is_correct())),
                complete_lesson,
            },
        ))
    }

    /// Grade the selection, record the attempt and apply the completion rule.
    ///
    /// # Errors
    ///
    /// Same as [`LessonSession::grade`]; no attempt is recorded on error.
    pub async fn submit(&mut self, progress: &ProgressService) -> Result<SubmitOutcome, SessionError> {
        let (verdict, write) = self.grade()?;
        let lesson_completed = write.completes_lesson();
        let attempt = write.apply(progress).await.unwrap_or_default();
        Ok(SubmitOutcome {
            verdict,
            attempt,
            lesson_completed,
        })
    }

    /// Open the solution of the current exercise.
    ///
    /// An exercise that was never attempted owes one incorrect attempt.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoExercise` for a lesson without exercises and
    /// `SessionError::Interaction` when the exercise is already answered
    /// correctly.
    pub fn open_solution(
        &mut self,
        progress: &ProgressService,
    ) -> Result<(RevealOutcome, ProgressWrite), SessionError> {
        let exercise = self
            .current_exercise()
            .cloned()
            .ok_or(SessionError::NoExercise)?;
        let persisted = progress.exercise_status(&exercise.id);
        let outcome = self.interaction.reveal_solution(persisted)?;
        let write = match outcome {
            RevealOutcome::RecordImplicitAttempt => ProgressWrite {
                attempt: Some((exercise, false)),
                complete_lesson: None,
            },
            RevealOutcome::Revealed => ProgressWrite::default(),
        };
        Ok((outcome, write))
    }

    /// Show the solution and record the implicit attempt, if one is owed.
    ///
    /// # Errors
    ///
    /// Same as [`LessonSession::open_solution`].
    pub async fn reveal_solution(
        &mut self,
        progress: &ProgressService,
    ) -> Result<RevealOutcome, SessionError> {
        let (outcome, write) = self.open_solution(progress)?;
        write.apply(progress).await;
        Ok(outcome)
    }

    /// "Next" is offered once the current exercise has a stored attempt.
    #[must_use]
    pub fn can_advance(&self, progress: &ProgressService) -> bool {
        self.current_exercise()
            .and_then(|exercise| progress.exercise_status(&exercise.id))
            .is_some_and(|attempt| attempt.attempts > 0)
    }

    /// Move to the next exercise, or past the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAttempted` while the current exercise has no
    /// stored attempt.
    pub fn advance(
        &mut self,
        progress: &ProgressService,
    ) -> Result<(LessonStep, ProgressWrite), SessionError> {
        if self.exercise_count() > 0 && !self.can_advance(progress) {
            return Err(SessionError::NotAttempted);
        }
        match self.walk.advance() {
            WalkSignal::Moved(index) => {
                self.interaction = ExerciseInteraction::new();
                Ok((LessonStep::Exercise(index), ProgressWrite::default()))
            }
            _ => Ok((
                LessonStep::Finished,
                ProgressWrite {
                    attempt: None,
                    complete_lesson: Some(self.lesson.id.clone()),
                },
            )),
        }
    }

    /// Move on and store the lesson completion after the last exercise.
    ///
    /// # Errors
    ///
    /// Same as [`LessonSession::advance`].
    pub async fn next(&mut self, progress: &ProgressService) -> Result<LessonStep, SessionError> {
        let (step, write) = self.advance(progress)?;
        write.apply(progress).await;
        Ok(step)
    }
}
