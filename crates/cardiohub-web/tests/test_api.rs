//! Router-level tests against a fixture dataset.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cardiohub_common::AppConfig;
use cardiohub_web::router::build_router;
use cardiohub_web::state::AppState;

const DATASET: &str = "\
Gene Names,Gene Links,Sequence,pubmed
KCNQ1,https://example.org/kcnq1,https://example.org/kcnq1.fa,https://example.org/kcnq1-paper
SCN5A,,,
";

fn fixture_router(dir: &tempfile::TempDir) -> Router {
    let path = dir.path().join("genes.csv");
    std::fs::write(&path, DATASET).unwrap();
    let mut config = AppConfig::default();
    config.dataset.path = path;
    build_router(AppState::new(config))
}

fn missing_dataset_router() -> Router {
    let mut config = AppConfig::default();
    config.dataset.path = "/definitely/not/here.csv".into();
    build_router(AppState::new(config))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn gene_api_finds_substring_case_insensitively() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get(fixture_router(&dir), "/api/genes?q=kcnq").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["results"][0]["name"], "KCNQ1");
}

#[tokio::test]
async fn gene_api_without_query_returns_no_results() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get(fixture_router(&dir), "/api/genes").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["total"], 0);
}

#[tokio::test]
async fn gene_api_surfaces_missing_dataset_as_404() {
    let (status, body) = get(missing_dataset_router(), "/api/genes?q=kcnq").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("dataset not found"));
}

#[tokio::test]
async fn genes_page_distinguishes_zero_matches_from_no_search() {
    let dir = tempfile::tempdir().unwrap();
    let (_, no_search) = get(fixture_router(&dir), "/genes").await;
    assert!(!no_search.contains("No gene found"));

    let dir = tempfile::tempdir().unwrap();
    let (_, zero_matches) = get(fixture_router(&dir), "/genes?q=BRCA").await;
    assert!(zero_matches.contains("No gene found with the provided name."));
}

#[tokio::test]
async fn genes_page_renders_matching_row_with_links() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get(fixture_router(&dir), "/genes?q=KCNQ1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"href="https://example.org/kcnq1""#));
    assert!(body.contains("View Sequence"));
}

#[tokio::test]
async fn database_page_marks_absent_references() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get(fixture_router(&dir), "/database").await;
    assert_eq!(status, StatusCode::OK);
    // SCN5A has no references at all.
    assert!(body.contains("SCN5A"));
    assert!(body.contains("N/A"));
}

#[tokio::test]
async fn database_page_degrades_visibly_without_dataset() {
    let (status, body) = get(missing_dataset_router(), "/database").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alert-error"));
}

#[tokio::test]
async fn calculators_work_without_the_dataset() {
    let (status, body) = get(missing_dataset_router(), "/api/gc?sequence=ATGC").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["gc_content"], 50.0);
}

#[tokio::test]
async fn gc_api_ignores_fasta_headers() {
    let dir = tempfile::tempdir().unwrap();
    let (_, body) = get(fixture_router(&dir), "/api/gc?sequence=%3Erec%0AGCGC").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["bases"], 4);
    assert_eq!(json["gc_content"], 100.0);
}

#[tokio::test]
async fn heart_rate_api_classifies_boundaries() {
    let dir = tempfile::tempdir().unwrap();
    let (_, body) = get(fixture_router(&dir), "/api/heart-rate?bpm=100").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["category"], "normal");

    let dir = tempfile::tempdir().unwrap();
    let (_, body) = get(fixture_router(&dir), "/api/heart-rate?bpm=101").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["category"], "tachycardia");
}

#[tokio::test]
async fn codon_api_expands_and_flags_unknowns() {
    let dir = tempfile::tempdir().unwrap();
    let (_, body) = get(fixture_router(&dir), "/api/codons?sequence=MZ").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["codons"][0][0], "ATG");
    assert_eq!(json["codons"][1][0], "Unknown");
}

#[tokio::test]
async fn heart_rate_form_renders_advisory() {
    let dir = tempfile::tempdir().unwrap();
    let response = fixture_router(&dir)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/heart-rate")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("heart_rate=45"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("Bradycardia"));
    assert!(body.contains("Pacemaker"));
}

#[tokio::test]
async fn phylo_page_parses_and_reports_errors() {
    let dir = tempfile::tempdir().unwrap();
    let (_, parsed) = get(fixture_router(&dir), "/phylo?tree=(A,(B,C));").await;
    assert!(parsed.contains("3 leaves"));

    let dir = tempfile::tempdir().unwrap();
    let (_, failed) = get(fixture_router(&dir), "/phylo?tree=(A,(B,C)").await;
    assert!(failed.contains("unbalanced parentheses"));
}
