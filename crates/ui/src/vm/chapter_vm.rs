use mathbook_core::model::{Chapter, ChapterId, UserProgress};
use services::{ChapterStatus, ContentCatalog};

use crate::strings;

#[derive(Clone, Debug, PartialEq)]
pub struct ChapterCardVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub status: ChapterStatus,
    /// Rounded percentage, e.g. `"50"`.
    pub percent_label: String,
    /// CSS width for the progress bar.
    pub bar_width: String,
}

impl ChapterCardVm {
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        status_label(self.status)
    }

    #[must_use]
    pub fn status_class(&self) -> &'static str {
        status_class(self.status)
    }
}

#[must_use]
pub fn status_label(status: ChapterStatus) -> &'static str {
    match status {
        ChapterStatus::NotStarted => strings::NOT_STARTED,
        ChapterStatus::InProgress => strings::PARTIALLY_COMPLETED,
        ChapterStatus::Completed => strings::COMPLETED,
    }
}

#[must_use]
pub fn status_class(status: ChapterStatus) -> &'static str {
    match status {
        ChapterStatus::NotStarted => "status status--idle",
        ChapterStatus::InProgress => "status status--partial",
        ChapterStatus::Completed => "status status--done",
    }
}

fn map_chapter_card(chapter: &Chapter, progress: &UserProgress) -> ChapterCardVm {
    let percent = ContentCatalog::chapter_progress(chapter, progress);
    ChapterCardVm {
        id: chapter.id.to_string(),
        title: chapter.title.clone(),
        description: chapter.description.clone(),
        icon: chapter.icon.clone(),
        status: ChapterStatus::from_percent(percent),
        percent_label: format!("{:.0}", percent.round()),
        bar_width: format!("width: {percent:.2}%"),
    }
}

#[must_use]
pub fn map_chapter_cards(catalog: &ContentCatalog, progress: &UserProgress) -> Vec<ChapterCardVm> {
    catalog
        .chapters()
        .iter()
        .map(|chapter| map_chapter_card(chapter, progress))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonItemVm {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub title: String,
    pub question_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterDetailVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub lessons: Vec<LessonItemVm>,
    pub quiz: Option<QuizCardVm>,
}

/// `None` when the chapter does not exist.
#[must_use]
pub fn map_chapter_detail(
    catalog: &ContentCatalog,
    chapter_id: &ChapterId,
    progress: &UserProgress,
) -> Option<ChapterDetailVm> {
    let chapter = catalog.find_chapter(chapter_id)?;
    let lessons = chapter
        .lessons
        .iter()
        .map(|lesson| LessonItemVm {
            id: lesson.id.to_string(),
            title: lesson.title.clone(),
            completed: progress.is_lesson_completed(&lesson.id),
        })
        .collect();
    let quiz = catalog.find_quiz(chapter_id).map(|quiz| QuizCardVm {
        title: quiz.title.clone(),
        question_count: quiz.questions.len(),
    });

    Some(ChapterDetailVm {
        id: chapter.id.to_string(),
        title: chapter.title.clone(),
        description: chapter.description.clone(),
        icon: chapter.icon.clone(),
        lessons,
        quiz,
    })
}
