// In-memory event catalog
//
// Design Decision: the dataset is fixed at process start and read-only for
// the process lifetime, so the catalog is built once, shared behind Arc,
// and needs no locking.

use flashboard_contracts::Event;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate event id: {0}")]
    DuplicateId(u32),
}

/// Read-only ordered collection of events.
#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Build a catalog, enforcing the unique-id invariant.
    pub fn new(events: Vec<Event>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.id) {
                return Err(CatalogError::DuplicateId(event.id));
            }
        }
        Ok(Self { events })
    }

    /// The seed dataset the service starts with.
    pub fn seed() -> Self {
        let events = vec![
            Event {
                id: 1,
                name: "OM vs Brest".to_string(),
                date: "2025-06-15".to_string(),
                venue: "Orange Vélodrome".to_string(),
                liters: 780.5,
                revenue_eur: 40250.0,
            },
            Event {
                id: 2,
                name: "Delta J1".to_string(),
                date: "2025-07-04".to_string(),
                venue: "Marseille".to_string(),
                liters: 520.2,
                revenue_eur: 28500.0,
            },
            Event {
                id: 3,
                name: "Delta J2".to_string(),
                date: "2025-07-05".to_string(),
                venue: "Marseille".to_string(),
                liters: 610.0,
                revenue_eur: 31200.0,
            },
            Event {
                id: 4,
                name: "Family Piknik".to_string(),
                date: "2025-08-24".to_string(),
                venue: "Montpellier".to_string(),
                liters: 230.0,
                revenue_eur: 11200.0,
            },
            Event {
                id: 5,
                name: "Match amical".to_string(),
                date: "2025-09-02".to_string(),
                venue: "Nantes".to_string(),
                liters: 95.7,
                revenue_eur: 5100.0,
            },
        ];
        // Seed ids are statically unique, so this bypasses new().
        Self { events }
    }

    /// All events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_five_unique_events() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.events().len(), 5);
        let ids: Vec<u32> = catalog.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut events = Catalog::seed().events().to_vec();
        events[4].id = 1;
        let err = Catalog::new(events).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }
}
