use chrono::{Local, TimeZone};
use quakefeed_core::{EventRecord, EventRowView};

/// Prints one line per record, or a placeholder when the list is empty
/// (also the failure presentation: failures deliver an empty list).
pub fn print_records(records: &[EventRecord]) {
    if records.is_empty() {
        println!("No earthquakes found.");
        return;
    }
    for record in records {
        let row = EventRowView::from_record(record);
        println!("{}", format_row(&row));
    }
}

fn format_row(row: &EventRowView) -> String {
    let when = Local
        .timestamp_millis_opt(row.occurred_at_ms)
        .single()
        .map(|dt| dt.format("%b %-d, %Y %-I:%M %p").to_string())
        .unwrap_or_else(|| "unknown time".to_string());

    let mut line = format!(
        "M{} (band {})  {} | {}  {}",
        row.magnitude_label, row.band, row.location_offset, row.location_primary, when
    );
    if let Some(url) = &row.detail_url {
        line.push_str("  ");
        line.push_str(url);
    }
    line
}
