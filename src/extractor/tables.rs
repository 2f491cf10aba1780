//! Data-table detection.
//!
//! Tables holding real tabular data are marked in the [`ScoreStore`] so the
//! conditional cleaner leaves them (and everything inside them) alone. Layout
//! tables stay unmarked.

use dom_query::NodeRef;

use crate::dom;

use super::state::ScoreStore;

/// Descendants that only appear in tables built for data.
const DATA_TABLE_DESCENDANTS: &[&str] = &["col", "colgroup", "tfoot", "thead", "th"];

/// Mark every `<table>` under `root` as a data table or not.
pub fn mark_data_tables(root: &NodeRef, store: &mut ScoreStore) {
    for table in dom::descendants_by_tag(root, "table") {
        let data = is_data_table(&table);
        tracing::trace!(data_table = data, "table classified");
        store.set_data_table(table.id, data);
    }
}

/// Classify one table.
///
/// Explicit presentation markers win, then semantic markers (`summary`, a
/// caption, header/column elements). Nested tables are layout. Otherwise the
/// table is data when it has at least 10 rows, more than 4 columns or more
/// than 10 cells.
#[must_use]
pub fn is_data_table(table: &NodeRef) -> bool {
    if dom::attr(table, "role").as_deref() == Some("presentation") {
        return false;
    }
    if dom::attr(table, "datatable").as_deref() == Some("0") {
        return false;
    }
    if dom::has_attr(table, "summary") {
        return true;
    }
    if let Some(caption) = dom::descendants_by_tag(table, "caption").first() {
        if !dom::children(caption).is_empty() {
            return true;
        }
    }
    if !dom::descendants_by_tags(table, DATA_TABLE_DESCENDANTS).is_empty() {
        return true;
    }
    if !dom::descendants_by_tag(table, "table").is_empty() {
        return false;
    }

    let (rows, columns) = row_and_column_count(table);
    if rows >= 10 || columns > 4 {
        return true;
    }
    rows * columns > 10
}

/// Rows (honouring `rowspan`) and the widest row's cell count (honouring
/// `colspan`).
#[must_use]
pub fn row_and_column_count(table: &NodeRef) -> (usize, usize) {
    let mut rows = 0;
    let mut columns = 0;
    for tr in dom::descendants_by_tag(table, "tr") {
        rows += span(&tr, "rowspan");
        let columns_in_row: usize = dom::descendants_by_tag(&tr, "td")
            .iter()
            .map(|cell| span(cell, "colspan"))
            .sum();
        columns = columns.max(columns_in_row);
    }
    (rows, columns)
}

/// Numeric span attribute; missing, zero or unparsable counts as 1.
fn span(node: &NodeRef, name: &str) -> usize {
    dom::attr(node, name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use dom_query::Document;

    fn table_html(attrs: &str, rows: usize, cols: usize) -> String {
        let row = format!("<tr>{}</tr>", "<td>c</td>".repeat(cols));
        format!("<table {attrs}>{}</table>", row.repeat(rows))
    }

    fn classify(html: &str) -> bool {
        let doc = Document::from(html);
        let table = doc.select("table").nodes().first().copied().unwrap();
        is_data_table(&table)
    }

    #[test]
    fn test_presentation_never_data() {
        assert!(!classify(&table_html(r#"role="presentation""#, 20, 2)));
        assert!(!classify(&table_html(r#"datatable="0""#, 20, 6)));
    }

    #[test]
    fn test_summary_always_data() {
        assert!(classify(&table_html(r#"summary="x""#, 1, 1)));
    }

    #[test]
    fn test_caption_and_headers() {
        assert!(classify("<table><caption>Results</caption><tr><td>1</td></tr></table>"));
        assert!(!classify("<table><caption></caption><tr><td>1</td></tr></table>"));
        assert!(classify("<table><thead><tr><th>h</th></tr></thead></table>"));
    }

    #[test]
    fn test_nested_table_is_layout() {
        let inner = table_html("", 1, 1);
        let html = format!("<table><tr><td>{inner}</td></tr>{}</table>", "<tr><td>x</td></tr>".repeat(12));
        assert!(!classify(&html));
    }

    #[test]
    fn test_size_heuristics() {
        assert!(classify(&table_html("", 10, 1)));
        assert!(classify(&table_html("", 1, 5)));
        assert!(classify(&table_html("", 4, 3)));
        assert!(!classify(&table_html("", 5, 2)));
        assert!(!classify(&table_html("", 2, 2)));
    }

    #[test]
    fn test_spans_and_malformed_values() {
        let doc = Document::from(
            r#"<table><tr rowspan="3"><td colspan="2">a</td><td colspan="oops">b</td></tr><tr><td>c</td></tr></table>"#,
        );
        let table = doc.select("table").nodes().first().copied().unwrap();
        assert_eq!(row_and_column_count(&table), (4, 3));
    }

    #[test]
    fn test_mark_data_tables() {
        let html = format!("<div>{}{}</div>", table_html(r#"id="a" summary="s""#, 1, 1), table_html(r#"id="b""#, 1, 1));
        let doc = Document::from(html.as_str());
        let root = doc.select("div").nodes().first().copied().unwrap();
        let mut store = ScoreStore::default();
        mark_data_tables(&root, &mut store);

        let a = doc.select("#a").nodes().first().copied().unwrap();
        let b = doc.select("#b").nodes().first().copied().unwrap();
        assert!(store.is_data_table(a.id));
        assert!(!store.is_data_table(b.id));
    }
}
