// Summary aggregation

use flashboard_contracts::{Event, StatsSummary};

/// Compute aggregate totals and the distinct venue set over the given
/// events. Venues keep first-appearance order with duplicates removed.
pub fn summarize(events: &[Event]) -> StatsSummary {
    let total_liters = events.iter().map(|e| e.liters).sum();
    let total_revenue_eur = events.iter().map(|e| e.revenue_eur).sum();

    let mut distinct_venues: Vec<String> = Vec::new();
    for event in events {
        if !distinct_venues.contains(&event.venue) {
            distinct_venues.push(event.venue.clone());
        }
    }

    StatsSummary {
        total_liters,
        total_revenue_eur,
        distinct_venues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn seed_totals() {
        let catalog = Catalog::seed();
        let summary = summarize(catalog.events());
        assert!((summary.total_liters - 2236.4).abs() < EPSILON);
        assert!((summary.total_revenue_eur - 116250.0).abs() < EPSILON);
    }

    #[test]
    fn distinct_venues_keep_first_appearance_order() {
        let catalog = Catalog::seed();
        let summary = summarize(catalog.events());
        assert_eq!(
            summary.distinct_venues,
            vec!["Orange Vélodrome", "Marseille", "Montpellier", "Nantes"]
        );
    }

    #[test]
    fn summary_matches_list_sums() {
        let catalog = Catalog::seed();
        let summary = summarize(catalog.events());
        let liters: f64 = catalog.events().iter().map(|e| e.liters).sum();
        let revenue: f64 = catalog.events().iter().map(|e| e.revenue_eur).sum();
        assert!((summary.total_liters - liters).abs() < EPSILON);
        assert!((summary.total_revenue_eur - revenue).abs() < EPSILON);
    }

    #[test]
    fn empty_input() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_liters, 0.0);
        assert_eq!(summary.total_revenue_eur, 0.0);
        assert!(summary.distinct_venues.is_empty());
    }
}
