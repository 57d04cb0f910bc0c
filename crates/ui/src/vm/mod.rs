mod chapter_vm;
mod exercise_vm;
mod lesson_vm;
mod markup_vm;
mod progress_vm;
mod quiz_vm;
mod time_fmt;

pub use chapter_vm::{
    ChapterCardVm, ChapterDetailVm, LessonItemVm, QuizCardVm, map_chapter_cards,
    map_chapter_detail, status_class, status_label,
};
pub use exercise_vm::{
    ChoiceState, ChoiceVm, ExerciseInputVm, ExerciseVm, FeedbackVm, difficulty_label,
    map_exercise,
};
pub use lesson_vm::{LessonVm, SolvedExampleVm, map_lesson};
pub use markup_vm::{render_math_html, sanitize_html};
pub use progress_vm::ProgressVm;
pub use quiz_vm::{QuizSummaryVm, band_class, map_quiz_summary, question_counter};
pub use time_fmt::format_date;
