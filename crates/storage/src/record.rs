use chrono::{DateTime, Utc};
use mathbook_core::model::{
    ChapterId, ExerciseAttempt, ExerciseId, LessonId, QuizScore, UserProgress,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::repository::StorageError;

/// Persisted shape of an exercise attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub attempts: u32,
    pub correct: Option<bool>,
}

/// Persisted shape of a quiz result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizScoreRecord {
    pub score: f64,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub date_taken: DateTime<Utc>,
}

/// Persisted snapshot of `UserProgress`.
///
/// Field names match the JSON layout stored under the progress key, so a
/// snapshot written by an earlier build still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub completed_lessons: Vec<String>,
    pub exercise_attempts: BTreeMap<String, AttemptRecord>,
    pub quiz_scores: BTreeMap<String, QuizScoreRecord>,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_progress(progress: &UserProgress) -> Self {
        Self {
            completed_lessons: progress
                .completed_lessons()
                .iter()
                .map(|id| id.as_str().to_owned())
                .collect(),
            exercise_attempts: progress
                .exercise_attempts()
                .iter()
                .map(|(id, attempt)| {
                    (
                        id.as_str().to_owned(),
                        AttemptRecord {
                            attempts: attempt.attempts,
                            correct: attempt.correct,
                        },
                    )
                })
                .collect(),
            quiz_scores: progress
                .quiz_scores()
                .iter()
                .map(|(id, score)| {
                    (
                        id.as_str().to_owned(),
                        QuizScoreRecord {
                            score: score.score(),
                            total_questions: score.total_questions(),
                            correct_answers: score.correct_answers(),
                            date_taken: score.date_taken(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Convert the record back into domain progress.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if a quiz record breaks the
    /// `QuizScore` invariants.
    pub fn into_progress(self) -> Result<UserProgress, StorageError> {
        let completed_lessons = self.completed_lessons.into_iter().map(LessonId::from).collect();
        let exercise_attempts = self
            .exercise_attempts
            .into_iter()
            .map(|(id, record)| {
                (
                    ExerciseId::from(id),
                    ExerciseAttempt::new(record.attempts, record.correct),
                )
            })
            .collect();
        let mut quiz_scores = BTreeMap::new();
        for (chapter_id, record) in self.quiz_scores {
            let score = QuizScore::new(
                record.score,
                record.total_questions,
                record.correct_answers,
                record.date_taken,
            )
            .map_err(|err| StorageError::Serialization(format!("quiz {chapter_id}: {err}")))?;
            quiz_scores.insert(ChapterId::from(chapter_id), score);
        }
        Ok(UserProgress::from_parts(
            completed_lessons,
            exercise_attempts,
            quiz_scores,
        ))
    }
}

/// Serialize progress to the persisted JSON text.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_progress(progress: &UserProgress) -> Result<String, StorageError> {
    serde_json::to_string(&ProgressRecord::from_progress(progress))
        .map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Parse persisted JSON text back into progress.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON, a wrong shape or
/// invalid quiz records.
pub fn decode_progress(raw: &str) -> Result<UserProgress, StorageError> {
    let record: ProgressRecord =
        serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))?;
    record.into_progress()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathbook_core::time::fixed_now;

    fn populated() -> UserProgress {
        let mut progress = UserProgress::new();
        progress.mark_lesson_completed(LessonId::from("l1-ch1"));
        progress.mark_lesson_completed(LessonId::from("l1-ch2"));
        progress.record_attempt(ExerciseId::from("mcq1-ch1-l1"), false);
        progress.record_attempt(ExerciseId::from("mcq1-ch1-l1"), true);
        progress.record_attempt(ExerciseId::from("mcq2-ch1-l1"), false);
        progress.record_quiz_score(
            ChapterId::from("ch1"),
            QuizScore::new(200.0 / 3.0, 3, 2, fixed_now()).unwrap(),
        );
        progress
    }

    #[test]
    fn encode_then_decode_is_lossless() {
        let progress = populated();
        let raw = encode_progress(&progress).unwrap();
        assert_eq!(decode_progress(&raw).unwrap(), progress);
    }

    #[test]
    fn encoded_layout_uses_external_field_names() {
        let raw = encode_progress(&populated()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value["completedLessons"].is_array());
        assert_eq!(value["exerciseAttempts"]["mcq1-ch1-l1"]["attempts"], 2);
        assert_eq!(value["exerciseAttempts"]["mcq1-ch1-l1"]["correct"], true);
        assert_eq!(value["quizScores"]["ch1"]["totalQuestions"], 3);
        assert_eq!(value["quizScores"]["ch1"]["correctAnswers"], 2);
        assert!(value["quizScores"]["ch1"]["dateTaken"].is_string());
    }

    #[test]
    fn decodes_snapshot_written_by_browser_build() {
        let raw = r#"{
            "completedLessons": ["l2-ch1", "l2-ch1"],
            "exerciseAttempts": {"mcq1-ch1-l2": {"attempts": 1, "correct": null}},
            "quizScores": {"ch2": {"score": 50, "totalQuestions": 2, "correctAnswers": 1, "dateTaken": "2024-05-01T10:00:00.000Z"}}
        }"#;
        let progress = decode_progress(raw).unwrap();
        assert_eq!(progress.completed_lessons().len(), 1);
        assert_eq!(
            progress.exercise_attempt(&ExerciseId::from("mcq1-ch1-l2")),
            Some(ExerciseAttempt::new(1, None))
        );
        assert_eq!(
            progress.quiz_score(&ChapterId::from("ch2")).map(QuizScore::score),
            Some(50.0)
        );
    }

    #[test]
    fn malformed_or_wrong_shape_is_a_serialization_error() {
        assert!(matches!(
            decode_progress("{not json"),
            Err(StorageError::Serialization(_))
        ));
        assert!(matches!(
            decode_progress(r#"{"completedLessons": 3}"#),
            Err(StorageError::Serialization(_))
        ));
        let bad_quiz = r#"{"completedLessons":[],"exerciseAttempts":{},"quizScores":{"ch1":{"score":10,"totalQuestions":1,"correctAnswers":4,"dateTaken":"2024-05-01T10:00:00Z"}}}"#;
        assert!(matches!(
            decode_progress(bad_quiz),
            Err(StorageError::Serialization(_))
        ));
    }
}
