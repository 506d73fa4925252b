//! Newick tree parsing demo page.

use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

use cardiohub_genes::render::escape_html;
use cardiohub_seq::parse_newick;

use crate::handlers::{error_panel, page};

const DEMO_TREE: &str = "(A, (B, C), (D, E));";

#[derive(Debug, Deserialize)]
pub struct PhyloQuery {
    pub tree: Option<String>,
}

/// GET /phylo - parse `?tree=` and show the clade structure.
pub async fn phylo_page(Query(query): Query<PhyloQuery>) -> Html<String> {
    let input = query.tree.as_deref().unwrap_or("").trim();

    let result_html = if input.is_empty() {
        String::new()
    } else {
        match parse_newick(input) {
            Ok(tree) => format!(
                r#"<div class="result-banner">{nodes} clades, {leaves} leaves</div>
<pre class="advisory">{ascii}</pre>"#,
                nodes = tree.node_count(),
                leaves = tree.leaf_count(),
                ascii = escape_html(&tree.to_ascii())
            ),
            Err(err) => error_panel(&err),
        }
    };

    let body = format!(
        r#"<div class="page-header">
    <h1 class="three-d-heading">Phylogenetic Tree Parser</h1>
</div>
<div class="card">
    <form method="GET" action="/phylo">
        <label for="tree">Tree in Newick format:</label>
        <input type="text" id="tree" name="tree" value="{value}" placeholder="{placeholder}">
        <button type="submit" class="btn">Parse Tree</button>
    </form>
</div>
{result_html}"#,
        value = escape_html(input),
        placeholder = escape_html(DEMO_TREE),
        result_html = result_html
    );
    Html(page("Phylo", &body))
}
