use services::ProgressOverview;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub is_empty: bool,
    pub lessons_completed: usize,
    pub total_lessons: usize,
    pub lessons_percent_label: String,
    pub lessons_bar_width: String,
    pub exercises_attempted: usize,
    pub exercises_correct: usize,
    pub quizzes_taken: usize,
    /// Only present once a quiz was taken.
    pub average_score_label: Option<String>,
}

impl From<&ProgressOverview> for ProgressVm {
    fn from(overview: &ProgressOverview) -> Self {
        Self {
            is_empty: overview.is_empty,
            lessons_completed: overview.lessons_completed,
            total_lessons: overview.total_lessons,
            lessons_percent_label: format!("{:.0}%", overview.lessons_percent),
            lessons_bar_width: format!("width: {:.2}%", overview.lessons_percent),
            exercises_attempted: overview.exercises_attempted,
            exercises_correct: overview.exercises_correct,
            quizzes_taken: overview.quizzes_taken,
            average_score_label: (overview.quizzes_taken > 0)
                .then(|| format!("{:.0}%", overview.average_quiz_score)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_is_hidden_without_quizzes() {
        let overview = ProgressOverview {
            lessons_completed: 1,
            total_lessons: 3,
            lessons_percent: 100.0 / 3.0,
            exercises_attempted: 2,
            exercises_correct: 1,
            quizzes_taken: 0,
            average_quiz_score: 0.0,
            is_empty: false,
        };
        let vm = ProgressVm::from(&overview);
        assert_eq!(vm.lessons_percent_label, "33%");
        assert!(vm.average_score_label.is_none());

        let vm = ProgressVm::from(&ProgressOverview {
            quizzes_taken: 2,
            average_quiz_score: 83.335,
            ..overview
        });
        assert_eq!(vm.average_score_label.as_deref(), Some("83%"));
    }
}
