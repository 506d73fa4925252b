//! Heart-rate analysis page and API.

use axum::extract::Query;
use axum::response::{Html, IntoResponse};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use cardiohub_vitals::{classify, HeartRateCategory};

use crate::handlers::page;

#[derive(Debug, Deserialize)]
pub struct HeartRateForm {
    pub heart_rate: f64,
}

#[derive(Debug, Deserialize)]
pub struct HeartRateQuery {
    pub bpm: f64,
}

#[derive(Debug, Serialize)]
pub struct HeartRateResponse {
    pub bpm: f64,
    pub category: HeartRateCategory,
    pub label: &'static str,
    pub advisory: &'static str,
}

/// GET /api/heart-rate?bpm= - classify a rate in beats per minute.
pub async fn api_heart_rate(Query(query): Query<HeartRateQuery>) -> impl IntoResponse {
    let category = classify(query.bpm);
    Json(HeartRateResponse {
        bpm: query.bpm,
        category,
        label: category.label(),
        advisory: category.advisory(),
    })
}

pub async fn heart_rate_page() -> Html<String> {
    Html(page("Heart Rate", &render_heart_rate(None)))
}

pub async fn heart_rate_submit(Form(form): Form<HeartRateForm>) -> Html<String> {
    let category = classify(form.heart_rate);
    Html(page(
        "Heart Rate",
        &render_heart_rate(Some((form.heart_rate, category))),
    ))
}

fn render_heart_rate(result: Option<(f64, HeartRateCategory)>) -> String {
    let result_html = match result {
        Some((bpm, category)) => format!(
            r#"<div class="result-banner">Result at {bpm:.0} bpm: {label}</div>
<pre class="advisory">{advisory}</pre>"#,
            bpm = bpm,
            label = category.label(),
            advisory = category.advisory()
        ),
        None => String::new(),
    };
    format!(
        r#"<div class="page-header">
    <h1 class="three-d-heading">Heart Rate Analysis</h1>
</div>
<div class="card">
    <form method="POST" action="/heart-rate">
        <label for="heart_rate">Enter your heart rate (beats per minute):</label>
        <input type="number" id="heart_rate" name="heart_rate" min="0" step="1" value="72">
        <button type="submit" class="btn">Analyze Heart Rate</button>
    </form>
</div>
{result_html}"#,
        result_html = result_html
    )
}
