//! End-to-end flow tests: content in, reveal schedule and markup out.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_content::constants::INITIAL_REVEAL_DELAY_MS;
use folio_content::defaults::default_content;
use folio_content::{ColorTheme, Snippet};
use folio_tui::typing::CodeWindowView;
use folio_tui::{Action, App, CurrentScreen, TypingAnimator, TypingConfig};

fn config(delay_ms: u64, pause_ms: u64, loop_snippets: bool) -> TypingConfig {
    TypingConfig {
        typing_delay: Duration::from_millis(delay_ms),
        snippet_pause: Duration::from_millis(pause_ms),
        loop_snippets,
    }
}

/// Drive the animator through a full reveal by firing exact deadlines.
fn reveal_current(animator: &mut TypingAnimator) {
    while animator.is_typing() {
        let deadline = animator.next_step_deadline().expect("typing schedules");
        animator.tick(deadline);
    }
}

#[test]
fn full_cycle_through_default_snippets() {
    let now = Instant::now();
    let content = default_content();
    let count = content.snippets.len();
    assert!(count >= 2);

    let mut animator = TypingAnimator::with_jitter(
        content.snippets.clone(),
        config(2, 5, true),
        now,
        Box::new(|| 1.0),
    );

    for expected_index in 0..count {
        assert_eq!(animator.active_index(), expected_index);
        reveal_current(&mut animator);
        assert_eq!(
            animator.revealed_text(),
            content.snippets[expected_index].code
        );
        let pause_end = animator.next_step_deadline().unwrap();
        animator.tick(pause_end);
    }
    // Wrapped back to the start.
    assert_eq!(animator.active_index(), 0);
    assert_eq!(animator.revealed_text(), "");
}

#[test]
fn reveal_timing_matches_configured_delays() {
    let now = Instant::now();
    let mut animator = TypingAnimator::with_jitter(
        vec![Snippet::new("hi u", "t.ts", "ts")],
        config(40, 100, false),
        now,
        Box::new(|| 1.0),
    );

    let first = now + Duration::from_millis(INITIAL_REVEAL_DELAY_MS);
    assert_eq!(animator.next_step_deadline(), Some(first));
    animator.tick(first);

    // 'h' and 'i' take the full delay, the space takes half.
    let mut expected = first;
    for (revealed, step_ms) in [("hi", 40), ("hi ", 40), ("hi u", 20)] {
        expected += Duration::from_millis(step_ms);
        animator.tick(expected);
        assert_eq!(animator.revealed_text(), revealed);
    }
}

#[test]
fn view_tracks_lines_and_cursor_during_reveal() {
    let now = Instant::now();
    let mut animator = TypingAnimator::with_jitter(
        vec![Snippet::new("let a;\nlet b;", "v.ts", "ts")],
        config(1, 10, false),
        now,
        Box::new(|| 1.0),
    );

    let mut max_lines = 0;
    while animator.is_typing() {
        let deadline = animator.next_step_deadline().unwrap();
        animator.tick(deadline);
        let view = CodeWindowView::of(&animator);
        assert!(view.line_count() >= max_lines);
        max_lines = view.line_count();
        // The cursor, when shown, is only ever on the final line.
        for line in &view.lines[..view.line_count() - 1] {
            assert!(!line.cursor);
        }
    }
    assert_eq!(max_lines, 2);

    let finished = CodeWindowView::of(&animator);
    assert!(finished.lines.iter().all(|l| !l.cursor));
}

#[test]
fn app_navigation_and_quit_flow() {
    let now = Instant::now();
    let mut app = App::new(
        default_content(),
        ColorTheme::default(),
        TypingConfig::default(),
        now,
    );

    let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
    app.update_at(Action::Input(tab), now);
    assert_eq!(app.screen, CurrentScreen::Projects);

    let four = KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE);
    app.update_at(Action::Input(four), now);
    assert_eq!(app.screen, CurrentScreen::Showcase);

    let next = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
    app.update_at(Action::Input(next), now);
    assert_eq!(app.animator.active_index(), 1);
    assert_eq!(app.animator.revealed_text(), "");

    let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    app.update_at(Action::Input(quit), now);
    assert!(app.should_quit);
}

#[test]
fn export_page_highlights_every_default_snippet() {
    let content = default_content();
    let html = folio_tui::export::render_html(&content);
    for snippet in &content.snippets {
        assert!(html.contains(&snippet.filename));
        assert!(html.contains(&format!(">{}<", snippet.language_label())));
    }
    assert!(html.contains("class=\"line-number\""));
    assert!(html.contains("tok-keyword"));
}
