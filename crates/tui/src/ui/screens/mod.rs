//! Screen-specific rendering.

mod hero;
mod projects;
mod showcase;
mod skills;

pub use hero::render_hero;
pub use projects::render_projects;
pub use showcase::render_showcase;
pub use skills::render_skills;
