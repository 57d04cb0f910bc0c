use serde::Deserialize;
use std::collections::HashSet;

use mathbook_core::evaluator::percentage;
use mathbook_core::model::{Chapter, ChapterId, Lesson, LessonId, Quiz, UserProgress};

use crate::error::CatalogError;

const BUNDLED_CURRICULUM: &str = include_str!("../data/curriculum.json");

//
// ─── CHAPTER STATUS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ChapterStatus {
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 100.0 {
            Self::Completed
        } else if percent > 0.0 {
            Self::InProgress
        } else {
            Self::NotStarted
        }
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CatalogFile {
    chapters: Vec<Chapter>,
    #[serde(default)]
    quizzes: Vec<Quiz>,
}

/// Read-only curriculum: ordered chapters plus their quizzes.
///
/// Lookups never fail; a missing entity is `None` and the caller renders the
/// not-found view.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCatalog {
    chapters: Vec<Chapter>,
    quizzes: Vec<Quiz>,
}

impl ContentCatalog {
    /// Build a catalog from already parsed entities.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when an entity is invalid, a chapter or lesson
    /// id repeats, or a quiz points at an unknown chapter.
    pub fn new(chapters: Vec<Chapter>, quizzes: Vec<Quiz>) -> Result<Self, CatalogError> {
        let mut chapter_ids = HashSet::with_capacity(chapters.len());
        let mut lesson_ids = HashSet::new();
        for chapter in &chapters {
            chapter.validate()?;
            if !chapter_ids.insert(&chapter.id) {
                return Err(CatalogError::DuplicateChapter(chapter.id.clone()));
            }
            for lesson in &chapter.lessons {
                // Progress is keyed by lesson id alone.
                if !lesson_ids.insert(&lesson.id) {
                    return Err(CatalogError::DuplicateLesson(lesson.id.clone()));
                }
            }
        }

        let mut quiz_chapters = HashSet::with_capacity(quizzes.len());
        for quiz in &quizzes {
            quiz.validate()?;
            if !chapter_ids.contains(&quiz.chapter_id) {
                return Err(CatalogError::UnknownQuizChapter {
                    quiz: quiz.id.clone(),
                    chapter: quiz.chapter_id.clone(),
                });
            }
            if !quiz_chapters.insert(&quiz.chapter_id) {
                return Err(CatalogError::DuplicateQuiz(quiz.chapter_id.clone()));
            }
        }

        Ok(Self { chapters, quizzes })
    }

    /// Parse and validate a curriculum document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and the validation
    /// errors of [`ContentCatalog::new`].
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.chapters, file.quizzes)
    }

    /// The curriculum shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded document is invalid.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CURRICULUM)
    }

    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    #[must_use]
    pub fn find_chapter(&self, chapter_id: &ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|chapter| &chapter.id == chapter_id)
    }

    #[must_use]
    pub fn find_lesson(&self, chapter_id: &ChapterId, lesson_id: &LessonId) -> Option<&Lesson> {
        self.find_chapter(chapter_id)
            .and_then(|chapter| chapter.lesson(lesson_id))
    }

    #[must_use]
    pub fn find_quiz(&self, chapter_id: &ChapterId) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| &quiz.chapter_id == chapter_id)
    }

    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.chapters.iter().map(|chapter| chapter.lessons.len()).sum()
    }

    /// Number of catalog lessons the learner has completed.
    ///
    /// Ids in `progress` that no longer exist in the catalog are ignored.
    #[must_use]
    pub fn completed_lessons(&self, progress: &UserProgress) -> usize {
        self.chapters
            .iter()
            .flat_map(|chapter| chapter.lessons.iter())
            .filter(|lesson| progress.is_lesson_completed(&lesson.id))
            .count()
    }

    /// Percentage of the chapter's lessons that are completed.
    ///
    /// A chapter without lessons counts as fully done.
    #[must_use]
    pub fn chapter_progress(chapter: &Chapter, progress: &UserProgress) -> f64 {
        if chapter.lessons.is_empty() {
            return 100.0;
        }
        let completed = chapter
            .lessons
            .iter()
            .filter(|lesson| progress.is_lesson_completed(&lesson.id))
            .count();
        percentage(to_u32(completed), to_u32(chapter.lessons.len()))
    }

    #[must_use]
    pub fn chapter_status(chapter: &Chapter, progress: &UserProgress) -> ChapterStatus {
        ChapterStatus::from_percent(Self::chapter_progress(chapter, progress))
    }
}

pub(crate) fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
