mod chapter;
mod exercise;
mod home;
mod lesson;
mod not_found;
mod progress;
mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chapter::ChapterView;
pub use exercise::ExerciseCard;
pub use home::HomeView;
pub use lesson::LessonView;
pub use not_found::{NotFoundMessage, NotFoundView};
pub use progress::ProgressView;
pub use quiz::QuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
