//! Character-by-character typing animation.

mod animator;
mod view;

pub use animator::{JitterFn, Phase, TypingAnimator, TypingConfig};
pub use view::{CodeWindowView, RevealedLine};
