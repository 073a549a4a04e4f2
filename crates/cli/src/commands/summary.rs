// Summary command

use crate::client::Client;
use crate::output::{format_eur, format_liters, print_field, OutputFormat};
use anyhow::{Context, Result};

pub async fn run(client: &Client, output: OutputFormat) -> Result<()> {
    let summary = client
        .stats_summary()
        .await
        .context("Failed to fetch summary; check the API is reachable and retry")?;

    if output.is_text() {
        print_field("Total liters", &format_liters(summary.total_liters));
        print_field("Total revenue", &format_eur(summary.total_revenue_eur));
        print_field(
            "Venues",
            &format!(
                "{} ({})",
                summary.distinct_venues.len(),
                summary.distinct_venues.join(", ")
            ),
        );
    } else {
        output.print_value(&summary);
    }

    Ok(())
}
