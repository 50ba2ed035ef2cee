//! Suggested question carousel
//!
//! Shows one suggested question at a time and rotates on a timer.
//! Rotation pauses while a drag is in progress; a horizontal drag of
//! at least [`SWIPE_THRESHOLD_COLS`] columns moves one step in the
//! drag direction.

/// Horizontal drag distance that counts as a swipe
pub const SWIPE_THRESHOLD_COLS: u16 = 8;

#[derive(Debug)]
pub struct QuestionCarousel {
    questions: Vec<String>,
    index: usize,
    /// Main-loop ticks between automatic advances
    rotate_every: u32,
    ticks: u32,
    drag_start: Option<u16>,
    drag_current: Option<u16>,
}

impl QuestionCarousel {
    pub fn new(rotate_every: u32) -> Self {
        Self {
            questions: Vec::new(),
            index: 0,
            rotate_every: rotate_every.max(1),
            ticks: 0,
            drag_start: None,
            drag_current: None,
        }
    }

    /// Replace the question set, keeping the index in range.
    pub fn set_questions(&mut self, questions: Vec<String>) {
        if questions != self.questions {
            self.questions = questions;
            self.index = 0;
            self.ticks = 0;
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.questions.get(self.index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    /// Advance the rotation timer by one tick.
    pub fn tick(&mut self) {
        if self.questions.len() < 2 || self.drag_start.is_some() {
            return;
        }
        self.ticks += 1;
        if self.ticks >= self.rotate_every {
            self.ticks = 0;
            self.index = (self.index + 1) % self.questions.len();
        }
    }

    pub fn next(&mut self) {
        if !self.questions.is_empty() {
            self.index = (self.index + 1) % self.questions.len();
            self.ticks = 0;
        }
    }

    pub fn prev(&mut self) {
        if !self.questions.is_empty() {
            self.index = (self.index + self.questions.len() - 1) % self.questions.len();
            self.ticks = 0;
        }
    }

    // -- Drag handling (mouse) --

    pub fn begin_drag(&mut self, column: u16) {
        self.drag_start = Some(column);
        self.drag_current = Some(column);
    }

    pub fn update_drag(&mut self, column: u16) {
        if self.drag_start.is_some() {
            self.drag_current = Some(column);
        }
    }

    /// Finish a drag, stepping the carousel when the distance crossed
    /// the swipe threshold.
    pub fn end_drag(&mut self) {
        if let (Some(start), Some(end)) = (self.drag_start, self.drag_current) {
            if start >= end + SWIPE_THRESHOLD_COLS {
                self.next();
            } else if end >= start + SWIPE_THRESHOLD_COLS {
                self.prev();
            }
        }
        self.drag_start = None;
        self.drag_current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> QuestionCarousel {
        let mut c = QuestionCarousel::new(4);
        c.set_questions(vec!["a".into(), "b".into(), "c".into()]);
        c
    }

    #[test]
    fn test_rotates_after_interval() {
        let mut c = carousel();
        for _ in 0..3 {
            c.tick();
        }
        assert_eq!(c.current(), Some("a"));
        c.tick();
        assert_eq!(c.current(), Some("b"));
    }

    #[test]
    fn test_rotation_wraps() {
        let mut c = carousel();
        for _ in 0..12 {
            c.tick();
        }
        assert_eq!(c.current(), Some("a"));
    }

    #[test]
    fn test_paused_while_dragging() {
        let mut c = carousel();
        c.begin_drag(40);
        for _ in 0..8 {
            c.tick();
        }
        assert_eq!(c.current(), Some("a"));
    }

    #[test]
    fn test_swipe_left_advances() {
        let mut c = carousel();
        c.begin_drag(40);
        c.update_drag(40 - SWIPE_THRESHOLD_COLS);
        c.end_drag();
        assert_eq!(c.current(), Some("b"));
    }

    #[test]
    fn test_swipe_right_goes_back() {
        let mut c = carousel();
        c.begin_drag(40);
        c.update_drag(40 + SWIPE_THRESHOLD_COLS);
        c.end_drag();
        assert_eq!(c.current(), Some("c"));
    }

    #[test]
    fn test_short_drag_ignored() {
        let mut c = carousel();
        c.begin_drag(40);
        c.update_drag(40 - (SWIPE_THRESHOLD_COLS - 1));
        c.end_drag();
        assert_eq!(c.current(), Some("a"));
    }

    #[test]
    fn test_single_question_never_rotates() {
        let mut c = QuestionCarousel::new(1);
        c.set_questions(vec!["only".into()]);
        for _ in 0..10 {
            c.tick();
        }
        assert_eq!(c.current(), Some("only"));
    }
}
