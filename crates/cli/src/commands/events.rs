// Events listing command

use crate::client::Client;
use crate::output::{
    format_eur, format_liters, print_table_header, print_table_row, OutputFormat,
};
use anyhow::{Context, Result};
use flashboard_contracts::Event;
use flashboard_core::{filter_events, EventFilter};

pub async fn run(
    client: &Client,
    output: OutputFormat,
    venue: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let events = client
        .list_events()
        .await
        .context("Failed to fetch events; check the API is reachable and retry")?;

    let filter = EventFilter { venue, date };
    let filtered = filter_events(&events, &filter);

    if output.is_text() {
        print_event_table(&filtered);
        println!();
        println!("{} event(s) shown of {} total", filtered.len(), events.len());
    } else {
        let data: Vec<&Event> = filtered;
        output.print_value(&serde_json::json!({ "data": data, "total": events.len() }));
    }

    Ok(())
}

pub fn print_event_table(events: &[&Event]) {
    if events.is_empty() {
        println!("No events found");
        return;
    }

    print_table_header(&[
        ("ID", 4),
        ("NAME", 18),
        ("DATE", 12),
        ("VENUE", 18),
        ("LITERS", 10),
        ("REVENUE", 12),
    ]);

    for event in events {
        print_table_row(&[
            (&event.id.to_string(), 4),
            (&event.name, 18),
            (&event.date, 12),
            (&event.venue, 18),
            (&format_liters(event.liters), 10),
            (&format_eur(event.revenue_eur), 12),
        ]);
    }
}
