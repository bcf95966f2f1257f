use crate::core::constants::{columns, report};
use crate::core::types::{MetricRow, MetricsSnapshot};

/// Table columns: heading and the CSV column it reads
const TABLE_COLUMNS: [(&str, &str); 4] = [
    ("Test Name", columns::TEST_NAME),
    ("Endpoint", columns::ENDPOINT),
    ("Response Time (ms)", columns::RESPONSE_TIME_MS),
    ("Status", columns::STATUS_CODE),
];

/// Inline styles only; the document must render inside mail clients with no external assets
mod styles {
    pub const BODY: &str = "font-family: Arial, sans-serif; color: #333333; margin: 0; padding: 16px;";
    pub const HEADING: &str = "color: #1f3a5f; margin-bottom: 4px;";
    pub const META: &str = "color: #666666; font-size: 13px; margin-top: 0;";
    pub const TABLE: &str = "border-collapse: collapse; width: 100%;";
    pub const HEADER_ROW: &str = "background-color: #f2f2f2;";
    pub const CELL: &str = "padding: 8px; border: 1px solid #dddddd; text-align: left;";
    pub const NOTE: &str = "color: #666666; font-size: 12px;";
}

/// Renders a [`MetricsSnapshot`] as a self-contained HTML email body
pub struct HtmlReport;

impl HtmlReport {
    /// Render the complete HTML document
    pub fn render(snapshot: &MetricsSnapshot) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body style="{body_style}">
{header}
{metrics}
{table}
{footer}
</body>
</html>
"#,
            title = report::TITLE,
            body_style = styles::BODY,
            header = Self::header_section(&snapshot.timestamp),
            metrics = Self::metrics_section(snapshot),
            table = Self::table_section(snapshot),
            footer = Self::footer_section(),
        )
    }

    fn header_section(timestamp: &str) -> String {
        format!(
            r#"<h2 style="{}">{}</h2>
<p style="{}">Generated: {}</p>"#,
            styles::HEADING,
            report::TITLE,
            styles::META,
            escape_html(timestamp)
        )
    }

    fn metrics_section(snapshot: &MetricsSnapshot) -> String {
        format!(
            r#"<h3>Key Metrics:</h3>
<ul>
<li>Total Requests: {}</li>
</ul>"#,
            snapshot.total_requests
        )
    }

    fn table_section(snapshot: &MetricsSnapshot) -> String {
        let header_cells: String = TABLE_COLUMNS
            .iter()
            .map(|(heading, _)| format!(r#"<th style="{}">{}</th>"#, styles::CELL, heading))
            .collect();

        let body_rows: String = snapshot
            .table_rows()
            .iter()
            .map(Self::table_row)
            .collect::<Vec<_>>()
            .join("\n");

        let note = if snapshot.is_truncated() {
            format!(
                r#"
<p style="{}">Showing first {} of {} rows.</p>"#,
                styles::NOTE,
                report::MAX_TABLE_ROWS,
                snapshot.total_requests
            )
        } else {
            String::new()
        };

        format!(
            r#"<h3>Detailed Results:</h3>
<table style="{}">
<thead>
<tr style="{}">{}</tr>
</thead>
<tbody>
{}
</tbody>
</table>{}"#,
            styles::TABLE,
            styles::HEADER_ROW,
            header_cells,
            body_rows,
            note
        )
    }

    fn table_row(row: &MetricRow) -> String {
        let cells: String = TABLE_COLUMNS
            .iter()
            .map(|(_, column)| {
                format!(
                    r#"<td style="{}">{}</td>"#,
                    styles::CELL,
                    escape_html(row.display_value(column))
                )
            })
            .collect();
        format!("<tr>{cells}</tr>")
    }

    fn footer_section() -> &'static str {
        r#"<p><strong>Next Steps:</strong> Review the detailed metrics and take appropriate action.</p>
<p>Best regards,<br>Performance Testing Team</p>"#
    }
}

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, endpoint: &str, time: &str, status: &str) -> MetricRow {
        MetricRow::from_pairs([
            ("test_name", name),
            ("endpoint", endpoint),
            ("response_time_ms", time),
            ("status_code", status),
        ])
    }

    fn body_row_count(html: &str) -> usize {
        let body = html
            .split("<tbody>")
            .nth(1)
            .and_then(|rest| rest.split("</tbody>").next())
            .unwrap_or_default();
        body.matches("<tr>").count()
    }

    #[test]
    fn test_render_contains_sections() {
        let snapshot = MetricsSnapshot::new(
            vec![row("login", "/api/login", "245", "200")],
            "2024-01-15 10:00:00",
        );
        let html = HtmlReport::render(&snapshot);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h2"));
        assert!(html.contains("Load Test Summary Report"));
        assert!(html.contains("Generated: 2024-01-15 10:00:00"));
        assert!(html.contains("Total Requests: 1"));
        assert!(html.contains("<td style=\"padding: 8px; border: 1px solid #dddddd; text-align: left;\">/api/login</td>"));
        assert!(html.contains("Next Steps"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_render_is_self_contained() {
        let html = HtmlReport::render(&MetricsSnapshot::new(vec![], "now"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
    }

    #[test]
    fn test_render_empty_snapshot() {
        let html = HtmlReport::render(&MetricsSnapshot::new(vec![], "now"));
        assert!(html.contains("Total Requests: 0"));
        assert!(html.contains("<tbody>"));
        assert_eq!(body_row_count(&html), 0);
        assert!(!html.contains("Showing first"));
    }

    #[test]
    fn test_render_limits_to_ten_rows() {
        let rows = (0..15)
            .map(|i| row(&format!("test_{i}"), "/x", "1", "200"))
            .collect();
        let html = HtmlReport::render(&MetricsSnapshot::new(rows, "now"));

        assert!(html.contains("Total Requests: 15"));
        assert_eq!(body_row_count(&html), 10);
        assert!(html.contains(">test_9<"));
        assert!(!html.contains(">test_10<"));
        assert!(html.contains("Showing first 10 of 15 rows."));
    }

    #[test]
    fn test_render_missing_columns_use_placeholder() {
        let sparse = MetricRow::from_pairs([("test_name", "only_name"), ("status_code", "")]);
        let html = HtmlReport::render(&MetricsSnapshot::new(vec![sparse], "now"));

        assert!(html.contains(">only_name<"));
        assert_eq!(html.matches(">N/A<").count(), 3);
    }

    #[test]
    fn test_render_escapes_cell_values() {
        let snapshot = MetricsSnapshot::new(
            vec![row("<script>alert(1)</script>", "/a?b=1&c=2", "1", "200")],
            "now",
        );
        let html = HtmlReport::render(&snapshot);

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("/a?b=1&amp;c=2"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_table_headings() {
        let html = HtmlReport::render(&MetricsSnapshot::new(vec![], "now"));
        for heading in ["Test Name", "Endpoint", "Response Time (ms)", "Status"] {
            assert!(html.contains(&format!(">{heading}</th>")), "missing {heading}");
        }
    }
}
