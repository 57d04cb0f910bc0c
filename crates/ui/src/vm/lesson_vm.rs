use mathbook_core::model::Lesson;

use crate::strings;
use crate::vm::markup_vm::render_math_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolvedExampleVm {
    pub problem_html: String,
    pub steps_html: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    pub title: String,
    pub content_html: String,
    pub video_url: Option<String>,
    pub examples: Vec<SolvedExampleVm>,
}

#[must_use]
pub fn map_lesson(lesson: &Lesson) -> LessonVm {
    LessonVm {
        title: lesson.title.clone(),
        content_html: render_math_html(&lesson.content),
        video_url: lesson.video_url.clone(),
        examples: lesson
            .solved_examples
            .iter()
            .map(|example| SolvedExampleVm {
                problem_html: render_math_html(&example.problem),
                steps_html: example
                    .solution_steps
                    .iter()
                    .enumerate()
                    .map(|(idx, step)| {
                        render_math_html(&format!(
                            "<strong>{} {}:</strong> {step}",
                            strings::SOLUTION,
                            idx + 1
                        ))
                    })
                    .collect(),
            })
            .collect(),
    }
}
