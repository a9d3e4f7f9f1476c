//! Timing and channel constants shared across the workspace.

/// Base delay between revealed characters, in milliseconds.
pub const DEFAULT_TYPING_DELAY_MS: u64 = 35;

/// Pause after a snippet is fully revealed before advancing, in milliseconds.
pub const DEFAULT_SNIPPET_PAUSE_MS: u64 = 3000;

/// Delay before the first character of a freshly activated snippet.
pub const INITIAL_REVEAL_DELAY_MS: u64 = 500;

/// Cursor blink toggle interval, in milliseconds.
pub const CURSOR_BLINK_INTERVAL_MS: u64 = 530;

/// UI tick interval. Must be finer than the typing delay so single-character
/// reveal steps land close to their scheduled deadlines.
pub const DEFAULT_UI_TICK_MS: u64 = 16;

/// Capacity of the bounded action channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 100;
