// Derived views over fetched events
//
// These are the client-side projections: filtering, the per-event chart
// rows, and the per-venue aggregation. They only ever read the events they
// are given; no view triggers another fetch.

use flashboard_contracts::Event;
use serde::Serialize;

/// Optional venue/date filters, combined with logical AND.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Case-insensitive substring match on the venue name.
    pub venue: Option<String>,
    /// Substring match on the date string.
    pub date: Option<String>,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        self.venue.is_none() && self.date.is_none()
    }

    fn matches(&self, event: &Event) -> bool {
        let venue_ok = match &self.venue {
            Some(needle) => event
                .venue
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        };
        let date_ok = match &self.date {
            Some(needle) => event.date.contains(needle.as_str()),
            None => true,
        };
        venue_ok && date_ok
    }
}

/// Events passing both filters, original order preserved.
pub fn filter_events<'a>(events: &'a [Event], filter: &EventFilter) -> Vec<&'a Event> {
    events.iter().filter(|e| filter.matches(e)).collect()
}

/// One bar-chart row: truncated display name plus the two measures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventBar {
    pub name: String,
    pub revenue_eur: f64,
    pub liters: f64,
}

const NAME_MAX_CHARS: usize = 15;

fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_MAX_CHARS {
        let head: String = name.chars().take(NAME_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Chart projection over all events, one row per event in order.
pub fn event_bars(events: &[Event]) -> Vec<EventBar> {
    events
        .iter()
        .map(|e| EventBar {
            name: truncate_name(&e.name),
            revenue_eur: e.revenue_eur,
            liters: e.liters,
        })
        .collect()
}

/// Per-venue totals, venues in first-appearance order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueTotals {
    pub venue: String,
    pub liters: f64,
    pub revenue_eur: f64,
}

/// Group events by venue and sum both measures.
pub fn venue_totals(events: &[Event]) -> Vec<VenueTotals> {
    let mut totals: Vec<VenueTotals> = Vec::new();
    for event in events {
        match totals.iter_mut().find(|t| t.venue == event.venue) {
            Some(entry) => {
                entry.liters += event.liters;
                entry.revenue_eur += event.revenue_eur;
            }
            None => totals.push(VenueTotals {
                venue: event.venue.clone(),
                liters: event.liters,
                revenue_eur: event.revenue_eur,
            }),
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const EPSILON: f64 = 1e-9;

    fn seed() -> Vec<Event> {
        Catalog::seed().events().to_vec()
    }

    #[test]
    fn empty_filter_returns_all() {
        let events = seed();
        let filtered = filter_events(&events, &EventFilter::default());
        assert_eq!(filtered.len(), events.len());
    }

    #[test]
    fn venue_filter_is_case_insensitive_substring() {
        let events = seed();
        let filter = EventFilter {
            venue: Some("marsEILLE".to_string()),
            date: None,
        };
        let filtered = filter_events(&events, &filter);
        let ids: Vec<u32> = filtered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn date_filter_is_substring() {
        let events = seed();
        let filter = EventFilter {
            venue: None,
            date: Some("2025-07".to_string()),
        };
        let filtered = filter_events(&events, &filter);
        let ids: Vec<u32> = filtered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn combined_filters_intersect() {
        let events = seed();
        let filter = EventFilter {
            venue: Some("marseille".to_string()),
            date: Some("2025-07-05".to_string()),
        };
        let filtered = filter_events(&events, &filter);
        let ids: Vec<u32> = filtered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3]);

        // A venue match with a non-matching date yields nothing.
        let filter = EventFilter {
            venue: Some("marseille".to_string()),
            date: Some("2025-08".to_string()),
        };
        assert!(filter_events(&events, &filter).is_empty());
    }

    #[test]
    fn marseille_totals_sum_both_delta_events() {
        let events = seed();
        let totals = venue_totals(&events);
        let marseille = totals.iter().find(|t| t.venue == "Marseille").unwrap();
        assert!((marseille.liters - 1130.2).abs() < EPSILON);
        assert!((marseille.revenue_eur - 59700.0).abs() < EPSILON);
    }

    #[test]
    fn venue_totals_keep_first_appearance_order() {
        let events = seed();
        let totals = venue_totals(&events);
        let venues: Vec<&str> = totals.iter().map(|t| t.venue.as_str()).collect();
        assert_eq!(
            venues,
            vec!["Orange Vélodrome", "Marseille", "Montpellier", "Nantes"]
        );
    }

    #[test]
    fn long_names_are_truncated_for_charts() {
        let mut events = seed();
        events[0].name = "A very long event name indeed".to_string();
        let bars = event_bars(&events);
        assert_eq!(bars[0].name, "A very long eve...");
        // Short names pass through untouched.
        assert_eq!(bars[1].name, "Delta J1");
        assert!((bars[1].revenue_eur - 28500.0).abs() < EPSILON);
    }
}
