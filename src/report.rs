use chrono::DateTime;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table,
};
use investigate::{IndicesCountersResponse, License, SearchResponse};

/// Table with the shared terminal styling and a bold header row
fn styled_table<I, S>(headers: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .into_iter()
                .map(|h| Cell::new(h.into()).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
    table
}

/// One row per exposure; the password itself is never shown
pub fn render_search(response: &SearchResponse) -> String {
    let mut table = styled_table(["Account", "Type", "Source", "Service", "Password", "Posted"]);
    for record in &response.results {
        table.add_row(vec![
            or_dash(record.identity()),
            or_dash(record.source_type()),
            or_dash(record.source()),
            or_dash(record.service()),
            or_dash(record.password_type()),
            record
                .posted_date()
                .map(format_epoch)
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table.to_string()
}

pub fn render_counters(response: &IndicesCountersResponse) -> String {
    let mut table = styled_table(["Index", "Hits"]);
    for index in &response.data.indices {
        table.add_row(vec![
            or_dash(index.name()),
            index
                .counter()
                .map(|hits| hits.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table.to_string()
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// "Found 3 result(s)" style summary
pub fn results_summary(response: &SearchResponse) -> String {
    if response.results.is_empty() {
        "No results found".to_string()
    } else if response.total > response.results.len() as u64 {
        format!(
            "Found {} result(s), showing {}",
            response.total,
            response.results.len()
        )
    } else {
        format!("Found {} result(s)", response.results.len())
    }
}

pub fn quota_line(license: &License) -> Option<String> {
    let remaining = license.remaining()?;
    let mut line = format!(
        "{} of {} searches left",
        remaining,
        license.limit().unwrap_or_default()
    );
    if let Some(refresh) = license.next_refresh().filter(|r| !r.is_empty()) {
        line.push_str(&format!(", refreshes {}", refresh));
    }
    Some(line)
}

/// Render an epoch timestamp (seconds or milliseconds) as a date
pub fn format_epoch(timestamp: i64) -> String {
    if timestamp <= 0 {
        return "-".to_string();
    }
    let parsed = if timestamp >= 100_000_000_000 {
        DateTime::from_timestamp_millis(timestamp)
    } else {
        DateTime::from_timestamp(timestamp, 0)
    };
    parsed
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}
