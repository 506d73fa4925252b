//! Amino-acid to codon expansion page and API.

use axum::extract::Query;
use axum::response::{Html, IntoResponse};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use cardiohub_genes::render::escape_html;
use cardiohub_seq::expand_amino_acids;

use crate::handlers::page;

#[derive(Debug, Deserialize)]
pub struct CodonForm {
    pub sequence: String,
}

#[derive(Debug, Deserialize)]
pub struct CodonQuery {
    pub sequence: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CodonResponse {
    pub sequence: String,
    pub codons: Vec<Vec<&'static str>>,
}

/// GET /api/codons?sequence= - codon sets per input character, input order.
pub async fn api_codons(Query(query): Query<CodonQuery>) -> impl IntoResponse {
    let sequence = query.sequence.unwrap_or_default().trim().to_string();
    let codons = expand_amino_acids(&sequence)
        .into_iter()
        .map(|set| set.to_vec())
        .collect();
    Json(CodonResponse { sequence, codons })
}

pub async fn codons_page() -> Html<String> {
    Html(page("Amino Acid to DNA/RNA", &render_codons(None)))
}

pub async fn codons_submit(Form(form): Form<CodonForm>) -> Html<String> {
    let sequence = form.sequence.trim().to_string();
    Html(page("Amino Acid to DNA/RNA", &render_codons(Some(&sequence))))
}

fn render_codons(sequence: Option<&str>) -> String {
    let result_html = match sequence {
        None => String::new(),
        Some("") => {
            r#"<div class="alert">Please enter a valid amino acid sequence.</div>"#.to_string()
        }
        Some(sequence) => {
            let rows: String = sequence
                .chars()
                .zip(expand_amino_acids(sequence))
                .map(|(aa, codons)| {
                    format!(
                        "<tr><td>{}</td><td>{}</td></tr>",
                        escape_html(&aa.to_string()),
                        escape_html(&codons.join(", "))
                    )
                })
                .collect();
            format!(
                r#"<div class="card table-container">
    <table class="table">
        <thead><tr><th>Amino Acid</th><th>DNA Codons</th></tr></thead>
        <tbody>{rows}</tbody>
    </table>
</div>"#,
                rows = rows
            )
        }
    };
    format!(
        r#"<div class="page-header">
    <h1 class="three-d-heading">Amino Acid to DNA/RNA</h1>
</div>
<div class="card">
    <form method="POST" action="/codons">
        <label for="sequence">Enter Amino Acid Sequence (e.g. MKTG):</label>
        <input type="text" id="sequence" name="sequence" placeholder="MKTG">
        <button type="submit" class="btn">Convert</button>
    </form>
</div>
{result_html}"#,
        result_html = result_html
    )
}
