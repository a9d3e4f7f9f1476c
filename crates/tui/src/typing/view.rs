//! Line-oriented view model over the animator's revealed text.
//!
//! Responsibilities:
//! - Split the revealed prefix into numbered lines.
//! - Decide which line carries the cursor glyph.
//!
//! Does NOT handle:
//! - Timing (see `TypingAnimator`).
//! - Styling (see `ui::widgets::code_window`).

use super::TypingAnimator;

/// One revealed line, ready for the code window to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedLine<'a> {
    /// 1-based line number for the gutter.
    pub number: usize,
    pub text: &'a str,
    /// True on the line the cursor glyph should follow. At most one line
    /// per view has this set, and only while the animator is typing.
    pub cursor: bool,
}

/// Snapshot of the revealed text as lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeWindowView<'a> {
    pub lines: Vec<RevealedLine<'a>>,
}

impl<'a> CodeWindowView<'a> {
    /// Build the view for the animator's current state. The cursor sits at
    /// the end of the last revealed line, when visible at all.
    pub fn of(animator: &'a TypingAnimator) -> Self {
        let text = animator.revealed_text();
        let cursor_visible = animator.cursor_visible();

        let mut lines: Vec<RevealedLine<'a>> = text
            .split('\n')
            .enumerate()
            .map(|(i, line)| RevealedLine {
                number: i + 1,
                text: line,
                cursor: false,
            })
            .collect();
        if cursor_visible {
            if let Some(last) = lines.last_mut() {
                last.cursor = true;
            }
        }
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use folio_content::Snippet;

    use super::*;
    use crate::typing::{TypingAnimator, TypingConfig};

    fn animator_for(code: &str) -> TypingAnimator {
        TypingAnimator::with_jitter(
            vec![Snippet::new(code, "view.ts", "ts")],
            TypingConfig::default(),
            Instant::now(),
            Box::new(|| 1.0),
        )
    }

    fn reveal_all(animator: &mut TypingAnimator) {
        while animator.is_typing() {
            let deadline = animator.next_step_deadline().unwrap();
            animator.tick(deadline);
        }
    }

    #[test]
    fn test_empty_reveal_is_single_blank_line() {
        let animator = animator_for("one\ntwo");
        let view = CodeWindowView::of(&animator);
        assert_eq!(view.line_count(), 1);
        assert_eq!(view.lines[0].text, "");
        assert_eq!(view.lines[0].number, 1);
        // Typing has not started yet but the phase is Typing and the blink
        // starts on, so the cursor sits on the empty first line.
        assert!(view.lines[0].cursor);
    }

    #[test]
    fn test_lines_numbered_from_one() {
        let mut animator = animator_for("a\nb\nc");
        reveal_all(&mut animator);
        let view = CodeWindowView::of(&animator);
        let numbers: Vec<usize> = view.lines.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        let texts: Vec<&str> = view.lines.iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cursor_hidden_once_paused() {
        let mut animator = animator_for("a\nb");
        reveal_all(&mut animator);
        let view = CodeWindowView::of(&animator);
        assert!(view.lines.iter().all(|l| !l.cursor));
    }

    #[test]
    fn test_cursor_only_on_last_line_mid_reveal() {
        let mut animator = animator_for("ab\ncd");
        // Reveal through the newline and one more character.
        let t0 = animator.next_step_deadline().unwrap();
        animator.tick(t0);
        for _ in 0..3 {
            let deadline = animator.next_step_deadline().unwrap();
            animator.tick(deadline);
        }
        assert_eq!(animator.revealed_text(), "ab\nc");
        let view = CodeWindowView::of(&animator);
        assert_eq!(view.line_count(), 2);
        assert!(!view.lines[0].cursor);
        if animator.cursor_visible() {
            assert!(view.lines[1].cursor);
        }
    }

    #[test]
    fn test_trailing_newline_yields_empty_cursor_line() {
        let mut animator = animator_for("ab\n");
        let t0 = animator.next_step_deadline().unwrap();
        animator.tick(t0);
        for _ in 0..2 {
            let deadline = animator.next_step_deadline().unwrap();
            animator.tick(deadline);
        }
        assert_eq!(animator.revealed_text(), "ab\n");
        let view = CodeWindowView::of(&animator);
        assert_eq!(view.line_count(), 2);
        assert_eq!(view.lines[1].text, "");
    }
}
