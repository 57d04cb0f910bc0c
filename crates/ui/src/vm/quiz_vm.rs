use mathbook_core::evaluator::ScoreBand;
use mathbook_core::model::{Quiz, QuizScore};

use crate::strings;
use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSummaryVm {
    pub title: String,
    /// Whole percent, e.g. `"67%"`.
    pub score_label: String,
    pub band_class: &'static str,
    pub correct_label: String,
    pub taken_on: String,
}

#[must_use]
pub fn band_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::High => "score score--high",
        ScoreBand::Medium => "score score--medium",
        ScoreBand::Low => "score score--low",
    }
}

#[must_use]
pub fn map_quiz_summary(quiz: &Quiz, score: &QuizScore) -> QuizSummaryVm {
    QuizSummaryVm {
        title: quiz.title.clone(),
        score_label: format!("{:.0}%", score.score()),
        band_class: band_class(ScoreBand::for_score(score.score())),
        correct_label: format!(
            "{} {} {}",
            score.correct_answers(),
            strings::OF,
            score.total_questions()
        ),
        taken_on: format_date(score.date_taken()),
    }
}

/// "سوال 2 از 3".
#[must_use]
pub fn question_counter(index: usize, total: usize) -> String {
    format!("{} {} {} {total}", strings::QUESTION, index + 1, strings::OF)
}
