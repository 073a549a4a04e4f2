// Dashboard command: the whole front page in one terminal view
//
// Both endpoints are fetched concurrently; every panel below is derived
// locally from the two responses.

use crate::client::Client;
use crate::commands::events::print_event_table;
use crate::output::{bar, format_eur, format_liters, print_field, OutputFormat};
use anyhow::{Context, Result};
use flashboard_core::{event_bars, filter_events, venue_totals, EventFilter};

const CHART_WIDTH: usize = 40;

pub async fn run(
    client: &Client,
    output: OutputFormat,
    venue: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let (events, summary) = tokio::try_join!(client.list_events(), client.stats_summary())
        .context("Failed to fetch dashboard data; check the API is reachable and retry")?;

    let filter = EventFilter { venue, date };
    let filtered = filter_events(&events, &filter);
    let bars = event_bars(&events);
    let venues = venue_totals(&events);

    if !output.is_text() {
        output.print_value(&serde_json::json!({
            "summary": summary,
            "events": filtered,
            "venues": venues,
        }));
        return Ok(());
    }

    // Summary panel
    println!("== Summary ==");
    print_field("Total liters", &format_liters(summary.total_liters));
    print_field("Total revenue", &format_eur(summary.total_revenue_eur));
    print_field(
        "Distinct venues",
        &summary.distinct_venues.len().to_string(),
    );
    println!();

    // Grouped bars: revenue and liters per event, each scaled to its own max
    println!("== Revenue and liters per event ==");
    let max_revenue = bars.iter().map(|b| b.revenue_eur).fold(0.0, f64::max);
    let max_liters = bars.iter().map(|b| b.liters).fold(0.0, f64::max);
    for row in &bars {
        println!("{}", row.name);
        println!(
            "  EUR {:<width$}  {}",
            bar(row.revenue_eur, max_revenue, CHART_WIDTH),
            format_eur(row.revenue_eur),
            width = CHART_WIDTH
        );
        println!(
            "  L   {:<width$}  {}",
            bar(row.liters, max_liters, CHART_WIDTH),
            format_liters(row.liters),
            width = CHART_WIDTH
        );
    }
    println!();

    // Revenue share per venue
    println!("== Revenue share by venue ==");
    let total_revenue: f64 = venues.iter().map(|v| v.revenue_eur).sum();
    for entry in &venues {
        let share = if total_revenue > 0.0 {
            entry.revenue_eur / total_revenue * 100.0
        } else {
            0.0
        };
        println!(
            "{:<20} {:<width$}  {:>5.1}%  {}",
            entry.venue,
            bar(entry.revenue_eur, total_revenue, CHART_WIDTH),
            share,
            format_eur(entry.revenue_eur),
            width = CHART_WIDTH
        );
    }
    println!();

    // Filtered event table
    println!("== Events ==");
    print_event_table(&filtered);
    println!();
    println!("{} event(s) shown of {} total", filtered.len(), events.len());

    Ok(())
}
