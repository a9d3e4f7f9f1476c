//! Static HTML export of the portfolio.
//!
//! Renders the loaded content to a single self-contained page: the hero
//! header, the project gallery, the skill bars and every code snippet
//! fully highlighted. The stylesheet is embedded so the file needs no
//! external assets.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use folio_content::PortfolioContent;
use tracing::info;

use crate::syntax::{escape_markup, line_to_markup};

const STYLESHEET: &str = r#"
body { background: #0d1117; color: #c9d1d9; font-family: ui-monospace, 'SFMono-Regular', Menlo, monospace; max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
a { color: #58a6ff; text-decoration: none; }
h1 { color: #58a6ff; margin-bottom: 0.25rem; }
.tagline { font-weight: bold; }
.roles, .muted { color: #8b949e; }
.card { border: 1px solid #30363d; border-radius: 6px; padding: 0.75rem 1rem; margin: 0.75rem 0; }
.card h3 { margin: 0 0 0.25rem; }
.status { font-size: 0.75rem; border: 1px solid #30363d; border-radius: 4px; padding: 0 0.4rem; margin-left: 0.5rem; }
.bar { background: #21262d; border-radius: 4px; height: 0.5rem; margin: 0.2rem 0 0.6rem; }
.bar > div { background: #58a6ff; border-radius: 4px; height: 100%; }
.code-window { border: 1px solid #30363d; border-radius: 6px; overflow: hidden; margin: 1rem 0; }
.code-title { background: #161b22; border-bottom: 1px solid #30363d; padding: 0.4rem 1rem; font-size: 0.8rem; }
.dot { display: inline-block; width: 0.7rem; height: 0.7rem; border-radius: 50%; margin-right: 0.3rem; }
.dot-r { background: #ef4444; } .dot-y { background: #eab308; } .dot-g { background: #22c55e; }
.lang { border: 1px solid #30363d; border-radius: 4px; padding: 0 0.4rem; margin-left: 0.5rem; font-size: 0.7rem; }
pre { margin: 0; padding: 1rem; overflow-x: auto; line-height: 1.5; font-size: 0.85rem; }
.line-number { display: inline-block; min-width: 2.5rem; text-align: right; padding-right: 0.75rem; color: #8b949e; user-select: none; }
.tok-keyword { color: #c084fc; }
.tok-function { color: #fde047; }
.tok-type { color: #5eead4; }
.tok-builtin { color: #60a5fa; }
.tok-string { color: #86efac; }
.tok-number { color: #fb923c; }
.tok-comment { color: #8b949e; }
.tok-operator { color: #fca5a5; }
.tok-punct { color: #c9d1d9; }
.tok-decorator { color: #f9a8d4; }
.tok-tag { color: #93c5fd; }
.tok-attribute { color: #fde047; }
.tok-property { color: #93c5fd; }
"#;

/// Render the content to an HTML string.
pub fn render_html(content: &PortfolioContent) -> String {
    let hero = &content.hero;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_markup(&hero.name));
    let _ = writeln!(html, "<style>{STYLESHEET}</style>");
    html.push_str("</head>\n<body>\n");

    let _ = writeln!(html, "<h1>{}</h1>", escape_markup(&hero.name));
    let _ = writeln!(
        html,
        "<p class=\"tagline\">{}</p>",
        escape_markup(&hero.tagline)
    );
    let roles: Vec<String> = hero.roles.iter().map(|r| escape_markup(r)).collect();
    let _ = writeln!(html, "<p class=\"roles\">{}</p>", roles.join(" &middot; "));
    let _ = writeln!(
        html,
        "<p><a href=\"{0}\">{0}</a> &middot; <a href=\"mailto:{1}\">{1}</a></p>",
        escape_markup(&hero.github),
        escape_markup(&hero.email)
    );

    if !content.projects.is_empty() {
        html.push_str("<h2>Projects</h2>\n");
        for project in &content.projects {
            html.push_str("<div class=\"card\">\n");
            let _ = writeln!(
                html,
                "<h3>{}<span class=\"status\">{}</span></h3>",
                escape_markup(&project.name),
                project.status.label()
            );
            let _ = writeln!(html, "<p>{}</p>", escape_markup(&project.description));
            let technologies: Vec<String> =
                project.technologies.iter().map(|t| escape_markup(t)).collect();
            let _ = writeln!(
                html,
                "<p class=\"muted\">&starf; {} &middot; {}</p>",
                project.stars,
                technologies.join(", ")
            );
            html.push_str("</div>\n");
        }
    }

    if !content.skill_groups.is_empty() {
        html.push_str("<h2>Skills</h2>\n");
        for group in &content.skill_groups {
            let _ = writeln!(html, "<h3>{}</h3>", escape_markup(&group.title));
            for skill in &group.skills {
                let _ = writeln!(
                    html,
                    "<div class=\"muted\">{} {}%</div>",
                    escape_markup(&skill.name),
                    skill.percentage
                );
                let _ = writeln!(
                    html,
                    "<div class=\"bar\"><div style=\"width: {}%\"></div></div>",
                    skill.percentage
                );
            }
        }
    }

    if !content.snippets.is_empty() {
        html.push_str("<h2>Code</h2>\n");
        for snippet in &content.snippets {
            html.push_str("<div class=\"code-window\">\n<div class=\"code-title\">");
            html.push_str(
                "<span class=\"dot dot-r\"></span><span class=\"dot dot-y\"></span><span class=\"dot dot-g\"></span>",
            );
            let _ = write!(
                html,
                "{}<span class=\"lang\">{}</span>",
                escape_markup(&snippet.filename),
                escape_markup(&snippet.language_label())
            );
            html.push_str("</div>\n<pre>");
            for (i, line) in snippet.code.split('\n').enumerate() {
                let _ = write!(
                    html,
                    "<span class=\"line-number\">{}</span>{}\n",
                    i + 1,
                    line_to_markup(line, &snippet.language)
                );
            }
            html.push_str("</pre>\n</div>\n");
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Write the rendered page to `path`.
pub async fn export_html(content: &PortfolioContent, path: &Path) -> anyhow::Result<()> {
    let html = render_html(content);
    tokio::fs::write(path, &html)
        .await
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    info!(path = %path.display(), bytes = html.len(), "exported portfolio");
    Ok(())
}
