use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identifier of a curriculum chapter, e.g. `ch1`.
    ChapterId
);
string_id!(
    /// Identifier of a lesson, unique across the curriculum (e.g. `l1-ch1`).
    LessonId
);
string_id!(
    /// Identifier of an exercise or quiz question (e.g. `mcq1-ch1-l1`).
    ExerciseId
);
string_id!(
    /// Identifier of a quiz (e.g. `quiz-ch1`).
    QuizId
);
string_id!(
    /// Identifier of a multiple-choice option, unique within its exercise.
    OptionId
);
