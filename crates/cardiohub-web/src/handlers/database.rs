//! Full database view — every row decorated, no filtering.

use axum::extract::State;
use axum::response::Html;

use crate::handlers::genes::gene_table_html;
use crate::handlers::{error_panel, page};
use crate::state::SharedState;

pub async fn database_page(State(state): State<SharedState>) -> Html<String> {
    let content = match state.genes.load() {
        Ok(table) => format!(
            r#"<p class="text-muted">{} curated arrhythmia-related genes</p>
{}"#,
            table.len(),
            gene_table_html(table.records())
        ),
        Err(err) => error_panel(&err),
    };

    let body = format!(
        r#"<div class="page-header">
    <h1 class="three-d-heading">Full Arrhythmia Database</h1>
</div>
{content}"#,
        content = content
    );
    Html(page("Full Database", &body))
}
