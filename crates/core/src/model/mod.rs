mod curriculum;
mod exercise;
mod ids;
mod progress;

pub use curriculum::{Chapter, CurriculumError, Lesson, Quiz, SolvedExample};
pub use exercise::{Answer, Difficulty, Exercise, ExerciseError, ExerciseKind, ExerciseOption};
pub use ids::{ChapterId, ExerciseId, LessonId, OptionId, QuizId};
pub use progress::{ExerciseAttempt, ProgressError, QuizScore, UserProgress};
