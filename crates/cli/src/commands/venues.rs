// Per-venue totals command

use crate::client::Client;
use crate::output::{
    format_eur, format_liters, print_table_header, print_table_row, OutputFormat,
};
use anyhow::{Context, Result};
use flashboard_core::venue_totals;

pub async fn run(client: &Client, output: OutputFormat) -> Result<()> {
    let events = client
        .list_events()
        .await
        .context("Failed to fetch events; check the API is reachable and retry")?;

    let totals = venue_totals(&events);

    if output.is_text() {
        if totals.is_empty() {
            println!("No venues found");
            return Ok(());
        }

        print_table_header(&[("VENUE", 20), ("LITERS", 10), ("REVENUE", 12)]);
        for entry in &totals {
            print_table_row(&[
                (&entry.venue, 20),
                (&format_liters(entry.liters), 10),
                (&format_eur(entry.revenue_eur), 12),
            ]);
        }
    } else {
        output.print_value(&serde_json::json!({ "data": totals, "total": totals.len() }));
    }

    Ok(())
}
