//! HTTP handlers for all web routes.

pub mod codons;
pub mod database;
pub mod gc;
pub mod genes;
pub mod heart;
pub mod overview;
pub mod phylo;

use cardiohub_genes::render::escape_html;

/// Navigation fragment shared across all pages.
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

/// Wrap a page body in the shared document chrome.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} — CardioHub</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content">
{body}
</main>
</body>
</html>"#,
        title = title,
        nav = NAV_HTML,
        body = body
    )
}

/// Visible error panel. The component that failed degrades; the rest of the
/// page stays usable.
pub fn error_panel(err: &dyn std::fmt::Display) -> String {
    format!(
        r#"<div class="alert alert-error">Error: {}</div>"#,
        escape_html(&err.to_string())
    )
}
