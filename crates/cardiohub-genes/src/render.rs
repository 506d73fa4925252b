//! HTML decoration for gene rows.
//!
//! The dashboard embeds dataset-provided URLs as anchors; all other text is
//! escaped before it reaches markup. An absent optional reference renders
//! as a literal "N/A" marker, never as a silently empty cell.

use crate::table::GeneRecord;

/// Marker shown for an absent optional reference.
pub const NOT_AVAILABLE: &str = "N/A";

/// Escape text for embedding in HTML body or attribute context.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Gene-name cell: an anchor when the row carries a link, plain text
/// otherwise.
pub fn name_cell(record: &GeneRecord) -> String {
    match record.link.as_deref() {
        Some(href) => format!(
            r#"<a href="{}" target="_blank">{}</a>"#,
            escape_html(href),
            escape_html(&record.name)
        ),
        None => escape_html(&record.name),
    }
}

/// Reference cell ("View Sequence" / "View pubmed"): an anchor when the
/// reference exists, the "N/A" marker otherwise.
pub fn reference_cell(reference: Option<&str>, label: &str) -> String {
    match reference {
        Some(href) => format!(
            r#"<a href="{}" target="_blank">{}</a>"#,
            escape_html(href),
            escape_html(label)
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// One `<tr>` for a record, in dataset column order.
pub fn record_row(record: &GeneRecord) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
        name_cell(record),
        reference_cell(record.sequence.as_deref(), "View Sequence"),
        reference_cell(record.pubmed.as_deref(), "View pubmed"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(link: Option<&str>, sequence: Option<&str>) -> GeneRecord {
        GeneRecord {
            name: "KCNQ1".to_string(),
            link: link.map(str::to_string),
            sequence: sequence.map(str::to_string),
            pubmed: None,
        }
    }

    #[test]
    fn absent_reference_renders_marker() {
        assert_eq!(reference_cell(None, "View Sequence"), NOT_AVAILABLE);
    }

    #[test]
    fn present_reference_renders_anchor() {
        let cell = reference_cell(Some("https://example.org/seq"), "View Sequence");
        assert!(cell.contains(r#"href="https://example.org/seq""#));
        assert!(cell.contains(">View Sequence<"));
    }

    #[test]
    fn linked_name_becomes_anchor() {
        let cell = name_cell(&record(Some("https://example.org/kcnq1"), None));
        assert!(cell.starts_with("<a "));
        assert!(cell.contains(">KCNQ1<"));
    }

    #[test]
    fn unlinked_name_is_plain_text() {
        assert_eq!(name_cell(&record(None, None)), "KCNQ1");
    }

    #[test]
    fn cell_text_is_escaped() {
        let mut rec = record(None, None);
        rec.name = "<script>alert(1)</script>".to_string();
        let cell = name_cell(&rec);
        assert!(!cell.contains('<') || cell.starts_with("&lt;"));
        assert!(cell.contains("&lt;script&gt;"));
    }

    #[test]
    fn row_includes_marker_and_anchor() {
        let row = record_row(&record(None, Some("https://example.org/seq")));
        assert!(row.contains(NOT_AVAILABLE));
        assert!(row.contains("View Sequence"));
    }
}
