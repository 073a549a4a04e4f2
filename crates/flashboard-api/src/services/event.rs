// Event service for business logic

use anyhow::Result;
use flashboard_contracts::{Event, StatsSummary};
use flashboard_core::{summarize, Catalog};
use std::sync::Arc;

pub struct EventService {
    catalog: Arc<Catalog>,
}

impl EventService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// All events, unfiltered, in insertion order.
    pub fn list(&self) -> Result<Vec<Event>> {
        Ok(self.catalog.events().to_vec())
    }

    /// Totals and distinct venues over the whole catalog.
    pub fn summary(&self) -> Result<StatsSummary> {
        Ok(summarize(self.catalog.events()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_returns_insertion_order() {
        let service = EventService::new(Arc::new(Catalog::seed()));
        let events = service.list().unwrap();
        let ids: Vec<u32> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn summary_is_deterministic() {
        let service = EventService::new(Arc::new(Catalog::seed()));
        let first = service.summary().unwrap();
        let second = service.summary().unwrap();
        assert_eq!(first, second);
    }
}
