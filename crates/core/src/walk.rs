//! Position within a lesson's exercise sequence and the completion policy.

/// Signal returned to the caller by [`LessonWalk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkSignal {
    /// Nothing to do.
    Stay,
    /// Mark the lesson completed.
    CompleteLesson,
    /// Moved to the exercise at this index.
    Moved(usize),
    /// Walked past the final exercise: mark completed and leave the lesson.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonWalk {
    exercise_count: usize,
    index: usize,
}

impl LessonWalk {
    #[must_use]
    pub fn new(exercise_count: usize) -> Self {
        Self {
            exercise_count,
            index: 0,
        }
    }

    /// A lesson without exercises completes as soon as it is viewed.
    #[must_use]
    pub fn on_view(&self) -> WalkSignal {
        if self.exercise_count == 0 {
            WalkSignal::CompleteLesson
        } else {
            WalkSignal::Stay
        }
    }

    /// Only a correct verdict on the last exercise completes the lesson.
    #[must_use]
    pub fn on_verdict(&self, is_correct: bool) -> WalkSignal {
        if is_correct && self.is_last() {
            WalkSignal::CompleteLesson
        } else {
            WalkSignal::Stay
        }
    }

    pub fn advance(&mut self) -> WalkSignal {
        if self.exercise_count == 0 {
            return WalkSignal::Finished;
        }
        if self.index + 1 < self.exercise_count {
            self.index += 1;
            WalkSignal::Moved(self.index)
        } else {
            WalkSignal::Finished
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercise_count
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.exercise_count > 0 && self.index + 1 == self.exercise_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lesson_completes_on_view() {
        assert_eq!(LessonWalk::new(0).on_view(), WalkSignal::CompleteLesson);
        assert_eq!(LessonWalk::new(2).on_view(), WalkSignal::Stay);
    }

    #[test]
    fn only_last_correct_verdict_completes() {
        let mut walk = LessonWalk::new(2);
        assert_eq!(walk.on_verdict(true), WalkSignal::Stay);
        assert_eq!(walk.advance(), WalkSignal::Moved(1));
        assert_eq!(walk.on_verdict(false), WalkSignal::Stay);
        assert_eq!(walk.on_verdict(true), WalkSignal::CompleteLesson);
    }

    #[test]
    fn advancing_past_the_end_finishes() {
        let mut walk = LessonWalk::new(1);
        assert!(walk.is_last());
        assert_eq!(walk.advance(), WalkSignal::Finished);
        assert_eq!(walk.index(), 0);
    }
}
