//! Gene search page and API.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};

use cardiohub_common::error::ApiError;
use cardiohub_genes::render::{escape_html, record_row};
use cardiohub_genes::GeneRecord;

use crate::handlers::{error_panel, page};
use crate::state::SharedState;

#[derive(Debug, Default, Deserialize)]
pub struct GeneQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GeneSearchResponse {
    pub query: String,
    pub total: usize,
    pub results: Vec<GeneRecord>,
}

/// GET /api/genes?q= - case-insensitive substring search over gene names.
pub async fn api_genes(
    State(state): State<SharedState>,
    Query(query): Query<GeneQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let table = state.genes.load()?;
    let q = query.q.unwrap_or_default().trim().to_string();
    let results: Vec<GeneRecord> = if q.is_empty() {
        Vec::new()
    } else {
        table.search(&q).into_iter().cloned().collect()
    };
    Ok(Json(GeneSearchResponse {
        total: results.len(),
        query: q,
        results,
    }))
}

/// GET /genes - search form; `?q=` runs a search.
pub async fn genes_page(
    State(state): State<SharedState>,
    Query(query): Query<GeneQuery>,
) -> Html<String> {
    let q = query.q.as_deref().unwrap_or("").trim().to_string();

    // No query parameter means no search was performed, which is distinct
    // from a search that matched nothing.
    let results_html = if q.is_empty() {
        String::new()
    } else {
        match state.genes.load() {
            Ok(table) => {
                let hits = table.search(&q);
                if hits.is_empty() {
                    r#"<div class="alert">No gene found with the provided name.</div>"#.to_string()
                } else {
                    gene_table_html(hits)
                }
            }
            Err(err) => error_panel(&err),
        }
    };

    let body = format!(
        r#"<div class="page-header">
    <h1 class="three-d-heading">Arrhythmia Gene Search</h1>
</div>
<div class="card">
    <form method="GET" action="/genes">
        <label for="q">Enter Gene Name:</label>
        <input type="text" id="q" name="q" value="{q}" placeholder="e.g. KCNQ1">
        <button type="submit" class="btn">Search</button>
    </form>
</div>
{results}"#,
        q = escape_html(&q),
        results = results_html
    );
    Html(page("Gene Search", &body))
}

/// Decorated table for a set of records, dataset column order.
pub fn gene_table_html<'a>(records: impl IntoIterator<Item = &'a GeneRecord>) -> String {
    let rows: String = records.into_iter().map(record_row).collect();
    format!(
        r#"<div class="card table-container">
    <table class="table">
        <thead>
            <tr><th>Gene Names</th><th>Sequence</th><th>pubmed</th></tr>
        </thead>
        <tbody>
{rows}
        </tbody>
    </table>
</div>"#,
        rows = rows
    )
}
