//! The typing animator: a deadline-driven reveal state machine.
//!
//! Responsibilities:
//! - Advance through an ordered snippet sequence, revealing one character
//!   per scheduled step with a jittered delay.
//! - Run the independent cursor-blink timer.
//! - Cancel and restart the reveal whenever its inputs change.
//!
//! Does NOT handle:
//! - Syntax highlighting (see `syntax`).
//! - Rendering (see `ui::widgets::code_window`).
//!
//! Invariants:
//! - `revealed_bytes` is always a char boundary and a prefix length of the
//!   active snippet's code; it grows monotonically while `Typing` and
//!   resets to 0 exactly when the active index changes.
//! - The animator owns its single step deadline and its blink deadline
//!   exclusively. Every reset recomputes the step deadline, so a stale
//!   schedule can never fire: cancel-before-reschedule by construction.
//! - An empty snippet sequence schedules nothing and reveals nothing.

use std::time::{Duration, Instant};

use folio_content::constants::{CURSOR_BLINK_INTERVAL_MS, INITIAL_REVEAL_DELAY_MS};
use folio_content::{Snippet, TypingSettings};
use rand::RngExt;

/// Multiplier applied to the base delay after a space or newline.
const FAST_CHAR_FACTOR: f64 = 0.5;

/// Jitter bounds for ordinary characters: base delay times 0.75..1.25.
const JITTER_MIN: f64 = 0.75;
const JITTER_MAX: f64 = 1.25;

/// Source of per-character delay jitter.
///
/// Injectable so tests can drive exact schedules; the default draws
/// uniformly from `JITTER_MIN..JITTER_MAX`.
pub type JitterFn = Box<dyn FnMut() -> f64 + Send>;

fn default_jitter() -> JitterFn {
    Box::new(|| rand::rng().random_range(JITTER_MIN..JITTER_MAX))
}

/// Animator configuration, resolved from content settings and CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingConfig {
    pub typing_delay: Duration,
    pub snippet_pause: Duration,
    pub loop_snippets: bool,
}

impl Default for TypingConfig {
    fn default() -> Self {
        TypingSettings::default().into()
    }
}

impl From<TypingSettings> for TypingConfig {
    fn from(settings: TypingSettings) -> Self {
        let settings = settings.sanitize();
        Self {
            typing_delay: Duration::from_millis(settings.typing_delay_ms),
            snippet_pause: Duration::from_millis(settings.snippet_pause_ms),
            loop_snippets: settings.loop_snippets,
        }
    }
}

/// The animator's current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Actively revealing characters.
    Typing,
    /// Fully revealed, waiting before advancing (or parked on the last
    /// snippet when looping is off).
    Paused,
}

/// Timer-driven state machine revealing snippets character by character.
pub struct TypingAnimator {
    snippets: Vec<Snippet>,
    config: TypingConfig,
    jitter: JitterFn,

    active: usize,
    revealed_bytes: usize,
    phase: Phase,
    /// Next reveal step or pause expiry. `None` means nothing is scheduled:
    /// either the sequence is empty or the animator is parked on the last
    /// snippet with looping off.
    step_deadline: Option<Instant>,

    blink_on: bool,
    blink_deadline: Instant,
}

impl TypingAnimator {
    /// Create an animator over `snippets`, activating the first one.
    pub fn new(snippets: Vec<Snippet>, config: TypingConfig, now: Instant) -> Self {
        Self::with_jitter(snippets, config, now, default_jitter())
    }

    /// Create an animator with an injected jitter source.
    pub fn with_jitter(
        snippets: Vec<Snippet>,
        config: TypingConfig,
        now: Instant,
        jitter: JitterFn,
    ) -> Self {
        let mut animator = Self {
            snippets,
            config,
            jitter,
            active: 0,
            revealed_bytes: 0,
            phase: Phase::Paused,
            step_deadline: None,
            blink_on: true,
            blink_deadline: now + Duration::from_millis(CURSOR_BLINK_INTERVAL_MS),
        };
        if !animator.snippets.is_empty() {
            animator.activate(0, now);
        }
        animator
    }

    /// Replace the snippet sequence, cancelling any in-flight reveal and
    /// restarting from the first snippet.
    pub fn set_snippets(&mut self, snippets: Vec<Snippet>, now: Instant) {
        self.snippets = snippets;
        if self.snippets.is_empty() {
            self.active = 0;
            self.revealed_bytes = 0;
            self.phase = Phase::Paused;
            self.step_deadline = None;
        } else {
            self.activate(0, now);
        }
    }

    /// Replace the configuration, restarting the active snippet's reveal.
    pub fn set_config(&mut self, config: TypingConfig, now: Instant) {
        self.config = config;
        if !self.snippets.is_empty() {
            self.activate(self.active, now);
        }
    }

    /// Jump directly to the snippet at `index` (modulo the sequence
    /// length), cancelling any in-flight reveal.
    pub fn jump_to(&mut self, index: usize, now: Instant) {
        if self.snippets.is_empty() {
            return;
        }
        self.activate(index % self.snippets.len(), now);
    }

    /// Activate the snippet at `index`: reset the revealed prefix and
    /// schedule the first character after the initial delay. Overwriting
    /// the step deadline here is what cancels any pending reveal or pause.
    fn activate(&mut self, index: usize, now: Instant) {
        debug_assert!(index < self.snippets.len());
        self.active = index;
        self.revealed_bytes = 0;
        self.phase = Phase::Typing;
        self.step_deadline = Some(now + Duration::from_millis(INITIAL_REVEAL_DELAY_MS));
    }

    /// Advance the state machine to `now`, firing every due deadline.
    ///
    /// Returns true if any observable state changed. Deadlines chain off
    /// their scheduled time rather than `now`, so a coarse tick interval
    /// catches up without drifting the schedule.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        // Cursor blink runs for as long as the animator exists,
        // independent of the typing state.
        while self.blink_deadline <= now {
            self.blink_on = !self.blink_on;
            self.blink_deadline += Duration::from_millis(CURSOR_BLINK_INTERVAL_MS);
            changed = true;
        }

        while let Some(deadline) = self.step_deadline {
            if deadline > now {
                break;
            }
            changed = true;
            match self.phase {
                Phase::Typing => self.step_reveal(deadline),
                Phase::Paused => self.step_advance(deadline),
            }
        }

        changed
    }

    /// One reveal step: append the next character, or finish the snippet.
    fn step_reveal(&mut self, fired_at: Instant) {
        let code = &self.snippets[self.active].code;
        match code[self.revealed_bytes..].chars().next() {
            Some(ch) => {
                self.revealed_bytes += ch.len_utf8();
                let delay = if ch == ' ' || ch == '\n' {
                    // Whitespace takes a fixed half-delay, no jitter.
                    self.config.typing_delay.mul_f64(FAST_CHAR_FACTOR)
                } else {
                    self.config.typing_delay.mul_f64((self.jitter)())
                };
                self.step_deadline = Some(fired_at + delay);
            }
            None => {
                self.phase = Phase::Paused;
                self.step_deadline = Some(fired_at + self.config.snippet_pause);
            }
        }
    }

    /// Pause expiry: advance to the next snippet, or park on the last one.
    fn step_advance(&mut self, fired_at: Instant) {
        let len = self.snippets.len();
        if self.config.loop_snippets {
            let next = (self.active + 1) % len;
            self.activate(next, fired_at);
        } else if self.active + 1 < len {
            self.activate(self.active + 1, fired_at);
        } else {
            // Terminal state: stay on the last snippet indefinitely.
            self.step_deadline = None;
        }
    }

    /// The revealed prefix of the active snippet's code.
    pub fn revealed_text(&self) -> &str {
        self.snippets
            .get(self.active)
            .map(|s| &s.code[..self.revealed_bytes])
            .unwrap_or("")
    }

    /// Index of the active snippet.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active snippet, if the sequence is non-empty.
    pub fn active_snippet(&self) -> Option<&Snippet> {
        self.snippets.get(self.active)
    }

    pub fn snippet_count(&self) -> usize {
        self.snippets.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether characters are still being revealed.
    pub fn is_typing(&self) -> bool {
        self.phase == Phase::Typing && !self.snippets.is_empty()
    }

    /// Whether the cursor glyph should be drawn right now: only while
    /// typing, and only on the blink timer's "on" half-cycle.
    pub fn cursor_visible(&self) -> bool {
        self.is_typing() && self.blink_on
    }

    /// Whether nothing further is scheduled (empty sequence, or parked on
    /// the last snippet with looping off).
    pub fn is_parked(&self) -> bool {
        self.step_deadline.is_none()
    }

    /// Next scheduled step deadline, if any. Exposed for tests asserting
    /// exact schedules.
    pub fn next_step_deadline(&self) -> Option<Instant> {
        self.step_deadline
    }
}

impl std::fmt::Debug for TypingAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypingAnimator")
            .field("snippets", &self.snippets.len())
            .field("active", &self.active)
            .field("revealed_bytes", &self.revealed_bytes)
            .field("phase", &self.phase)
            .field("step_deadline", &self.step_deadline)
            .field("blink_on", &self.blink_on)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_jitter() -> JitterFn {
        Box::new(|| 1.0)
    }

    fn config(delay_ms: u64, pause_ms: u64, loop_snippets: bool) -> TypingConfig {
        TypingConfig {
            typing_delay: Duration::from_millis(delay_ms),
            snippet_pause: Duration::from_millis(pause_ms),
            loop_snippets,
        }
    }

    fn snippet(code: &str) -> Snippet {
        Snippet::new(code, "test.ts", "ts")
    }

    /// Run the animator until it is fully revealed or parked, stepping by
    /// exact deadlines so no jitter assumptions are needed.
    fn run_until_paused(animator: &mut TypingAnimator) {
        while animator.is_typing() {
            let deadline = animator.next_step_deadline().expect("typing must schedule");
            animator.tick(deadline);
        }
    }

    #[test]
    fn test_empty_sequence_schedules_nothing() {
        let now = Instant::now();
        let mut animator =
            TypingAnimator::with_jitter(vec![], config(35, 100, true), now, fixed_jitter());
        assert!(animator.is_parked());
        assert_eq!(animator.revealed_text(), "");
        assert!(!animator.is_typing());
        assert!(!animator.cursor_visible());

        // Ticking far into the future still reveals nothing.
        assert_eq!(animator.active_snippet(), None);
        animator.tick(now + Duration::from_secs(60));
        assert_eq!(animator.revealed_text(), "");
    }

    #[test]
    fn test_initial_delay_precedes_first_character() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("ab")],
            config(10, 100, true),
            now,
            fixed_jitter(),
        );
        assert_eq!(
            animator.next_step_deadline(),
            Some(now + Duration::from_millis(INITIAL_REVEAL_DELAY_MS))
        );

        // Just before the initial delay: nothing revealed.
        animator.tick(now + Duration::from_millis(INITIAL_REVEAL_DELAY_MS - 1));
        assert_eq!(animator.revealed_text(), "");

        animator.tick(now + Duration::from_millis(INITIAL_REVEAL_DELAY_MS));
        assert_eq!(animator.revealed_text(), "a");
    }

    #[test]
    fn test_reveal_schedule_with_unit_jitter() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("ab c")],
            config(10, 100, true),
            now,
            fixed_jitter(),
        );

        let t0 = now + Duration::from_millis(INITIAL_REVEAL_DELAY_MS);
        animator.tick(t0);
        assert_eq!(animator.revealed_text(), "a");
        // 'a' is ordinary: next step at base * 1.0.
        assert_eq!(animator.next_step_deadline(), Some(t0 + Duration::from_millis(10)));

        animator.tick(t0 + Duration::from_millis(10));
        assert_eq!(animator.revealed_text(), "ab");

        animator.tick(t0 + Duration::from_millis(20));
        assert_eq!(animator.revealed_text(), "ab ");
        // The space just typed takes the fixed half-delay, no jitter.
        assert_eq!(
            animator.next_step_deadline(),
            Some(t0 + Duration::from_millis(25))
        );
    }

    #[test]
    fn test_newline_uses_fixed_half_delay() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("a\nb")],
            config(20, 100, true),
            now,
            // Jitter that would be obvious if (incorrectly) applied to the
            // newline step.
            Box::new(|| 5.0),
        );
        let t0 = now + Duration::from_millis(INITIAL_REVEAL_DELAY_MS);
        animator.tick(t0);
        assert_eq!(animator.revealed_text(), "a");
        // 'a' took base * 5.0 = 100ms.
        let t1 = t0 + Duration::from_millis(100);
        animator.tick(t1);
        assert_eq!(animator.revealed_text(), "a\n");
        assert_eq!(
            animator.next_step_deadline(),
            Some(t1 + Duration::from_millis(10))
        );
    }

    #[test]
    fn test_revealed_length_is_monotonic_while_typing() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("hello world")],
            config(5, 50, false),
            now,
            fixed_jitter(),
        );
        let mut last_len = 0;
        while animator.is_typing() {
            let deadline = animator.next_step_deadline().unwrap();
            animator.tick(deadline);
            let len = animator.revealed_text().len();
            assert!(len >= last_len);
            last_len = len;
        }
        assert_eq!(animator.revealed_text(), "hello world");
    }

    #[test]
    fn test_full_reveal_then_pause_then_loop() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("ab"), snippet("cd")],
            config(10, 300, true),
            now,
            fixed_jitter(),
        );

        run_until_paused(&mut animator);
        assert_eq!(animator.revealed_text(), "ab");
        assert_eq!(animator.phase(), Phase::Paused);
        assert_eq!(animator.active_index(), 0);

        // Pause expiry advances and resets the reveal.
        let pause_end = animator.next_step_deadline().unwrap();
        animator.tick(pause_end);
        assert_eq!(animator.active_index(), 1);
        assert_eq!(animator.revealed_text(), "");
        assert_eq!(animator.phase(), Phase::Typing);

        // Second snippet types and wraps back to the first.
        run_until_paused(&mut animator);
        assert_eq!(animator.revealed_text(), "cd");
        let pause_end = animator.next_step_deadline().unwrap();
        animator.tick(pause_end);
        assert_eq!(animator.active_index(), 0);
    }

    #[test]
    fn test_loop_cycles_indefinitely() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("a"), snippet("b"), snippet("c")],
            config(1, 1, true),
            now,
            fixed_jitter(),
        );
        let mut indices = Vec::new();
        for _ in 0..7 {
            indices.push(animator.active_index());
            run_until_paused(&mut animator);
            let pause_end = animator.next_step_deadline().unwrap();
            animator.tick(pause_end);
        }
        assert_eq!(indices, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_no_loop_parks_on_last_snippet() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("a"), snippet("b")],
            config(1, 1, false),
            now,
            fixed_jitter(),
        );

        run_until_paused(&mut animator);
        let pause_end = animator.next_step_deadline().unwrap();
        animator.tick(pause_end);
        assert_eq!(animator.active_index(), 1);

        run_until_paused(&mut animator);
        let pause_end = animator.next_step_deadline().unwrap();
        animator.tick(pause_end);

        // Parked: index stays on N-1, nothing further scheduled.
        assert_eq!(animator.active_index(), 1);
        assert!(animator.is_parked());
        assert_eq!(animator.revealed_text(), "b");
        animator.tick(pause_end + Duration::from_secs(60));
        assert_eq!(animator.active_index(), 1);
        assert!(animator.is_parked());
    }

    #[test]
    fn test_cursor_visible_only_while_typing() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("ab")],
            config(10, 1000, false),
            now,
            fixed_jitter(),
        );
        assert!(animator.cursor_visible());

        run_until_paused(&mut animator);
        // Immediately after the full reveal the phase is Paused, so the
        // cursor is hidden regardless of the blink toggle.
        assert_eq!(animator.phase(), Phase::Paused);
        assert!(!animator.cursor_visible());
    }

    #[test]
    fn test_cursor_blink_toggles_on_interval() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("abcdefghijklmnop")],
            config(1000, 1000, true),
            now,
            fixed_jitter(),
        );
        assert!(animator.cursor_visible());
        animator.tick(now + Duration::from_millis(CURSOR_BLINK_INTERVAL_MS));
        assert!(!animator.cursor_visible());
        animator.tick(now + Duration::from_millis(2 * CURSOR_BLINK_INTERVAL_MS));
        assert!(animator.cursor_visible());
    }

    #[test]
    fn test_set_snippets_cancels_in_flight_reveal() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("OLD OLD OLD")],
            config(10, 100, true),
            now,
            fixed_jitter(),
        );
        let t0 = now + Duration::from_millis(INITIAL_REVEAL_DELAY_MS);
        animator.tick(t0 + Duration::from_millis(20));
        assert!(animator.revealed_text().starts_with("OLD"));

        let reset_at = t0 + Duration::from_millis(25);
        animator.set_snippets(vec![snippet("new")], reset_at);
        assert_eq!(animator.revealed_text(), "");
        assert_eq!(animator.active_index(), 0);

        // The old schedule is gone: the next reveal is the initial delay
        // from the reset, and no character of the old snippet ever appears.
        assert_eq!(
            animator.next_step_deadline(),
            Some(reset_at + Duration::from_millis(INITIAL_REVEAL_DELAY_MS))
        );
        run_until_paused(&mut animator);
        assert_eq!(animator.revealed_text(), "new");
    }

    #[test]
    fn test_set_snippets_to_empty_clears_everything() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("abc")],
            config(10, 100, true),
            now,
            fixed_jitter(),
        );
        animator.set_snippets(vec![], now + Duration::from_millis(600));
        assert!(animator.is_parked());
        assert_eq!(animator.revealed_text(), "");
        assert!(!animator.cursor_visible());
    }

    #[test]
    fn test_jump_to_restarts_reveal() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("aa"), snippet("bb"), snippet("cc")],
            config(10, 100, true),
            now,
            fixed_jitter(),
        );
        animator.jump_to(2, now);
        assert_eq!(animator.active_index(), 2);
        assert_eq!(animator.revealed_text(), "");
        run_until_paused(&mut animator);
        assert_eq!(animator.revealed_text(), "cc");

        // Index wraps modulo the sequence length.
        animator.jump_to(4, now);
        assert_eq!(animator.active_index(), 1);
    }

    #[test]
    fn test_set_config_restarts_active_snippet() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("abc")],
            config(10, 100, true),
            now,
            fixed_jitter(),
        );
        let t0 = now + Duration::from_millis(INITIAL_REVEAL_DELAY_MS);
        animator.tick(t0);
        assert_eq!(animator.revealed_text(), "a");

        animator.set_config(config(50, 100, false), t0);
        assert_eq!(animator.revealed_text(), "");
        assert_eq!(animator.phase(), Phase::Typing);
        assert_eq!(
            animator.next_step_deadline(),
            Some(t0 + Duration::from_millis(INITIAL_REVEAL_DELAY_MS))
        );
    }

    #[test]
    fn test_empty_snippet_code_pauses_immediately() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet(""), snippet("x")],
            config(10, 100, true),
            now,
            fixed_jitter(),
        );
        let t0 = now + Duration::from_millis(INITIAL_REVEAL_DELAY_MS);
        animator.tick(t0);
        assert_eq!(animator.phase(), Phase::Paused);
        assert_eq!(animator.revealed_text(), "");

        animator.tick(t0 + Duration::from_millis(100));
        assert_eq!(animator.active_index(), 1);
    }

    #[test]
    fn test_multibyte_characters_reveal_whole() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("héllo → ok")],
            config(1, 10, false),
            now,
            fixed_jitter(),
        );
        let mut previous = String::new();
        while animator.is_typing() {
            let deadline = animator.next_step_deadline().unwrap();
            animator.tick(deadline);
            let text = animator.revealed_text();
            // Every intermediate state is a valid char-boundary prefix.
            assert!(text.starts_with(&previous));
            previous = text.to_string();
        }
        assert_eq!(animator.revealed_text(), "héllo → ok");
    }

    #[test]
    fn test_coarse_ticks_catch_up_without_drift() {
        let now = Instant::now();
        let mut animator = TypingAnimator::with_jitter(
            vec![snippet("abcd")],
            config(10, 100, false),
            now,
            fixed_jitter(),
        );
        // One giant tick: all four reveals plus the completion step fire.
        animator.tick(now + Duration::from_secs(5));
        assert_eq!(animator.revealed_text(), "abcd");
        assert_eq!(animator.phase(), Phase::Paused);
    }
}
