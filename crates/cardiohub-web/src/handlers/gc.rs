//! GC-content calculator page and API.

use axum::extract::Query;
use axum::response::{Html, IntoResponse};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use cardiohub_seq::{gc_content, strip_fasta_headers};

use crate::handlers::page;

#[derive(Debug, Deserialize)]
pub struct GcForm {
    pub sequence: String,
}

#[derive(Debug, Deserialize)]
pub struct GcQuery {
    pub sequence: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GcResponse {
    pub bases: usize,
    pub gc_content: f64,
}

/// GET /api/gc?sequence= - GC percentage of the given bases. FASTA header
/// lines in the input are ignored.
pub async fn api_gc(Query(query): Query<GcQuery>) -> impl IntoResponse {
    let sequence = strip_fasta_headers(&query.sequence.unwrap_or_default());
    Json(GcResponse {
        bases: sequence.chars().count(),
        gc_content: gc_content(&sequence),
    })
}

pub async fn gc_page() -> Html<String> {
    Html(page("GC Content", &render_gc(None)))
}

pub async fn gc_submit(Form(form): Form<GcForm>) -> Html<String> {
    let sequence = strip_fasta_headers(&form.sequence);
    Html(page("GC Content", &render_gc(Some(gc_content(&sequence)))))
}

fn render_gc(result: Option<f64>) -> String {
    let result_html = match result {
        Some(pct) => format!(r#"<div class="result-banner">GC Content: {pct:.2}%</div>"#),
        None => String::new(),
    };
    format!(
        r#"<div class="page-header">
    <h1 class="three-d-heading">GC Content Calculator</h1>
</div>
<div class="card">
    <form method="POST" action="/gc">
        <label for="sequence">Paste your sequence here:</label>
        <textarea id="sequence" name="sequence" rows="6" placeholder="ATGCGGCC"></textarea>
        <p class="text-muted">FASTA header lines are ignored.</p>
        <button type="submit" class="btn">Calculate GC Content</button>
    </form>
</div>
{result_html}"#,
        result_html = result_html
    )
}
