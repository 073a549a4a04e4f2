// Flashboard domain logic
//
// The catalog is the read-only dataset; stats and views are pure functions
// over event slices so the server and the CLI derive from the same code.

pub mod catalog;
pub mod stats;
pub mod views;

pub use catalog::{Catalog, CatalogError};
pub use stats::summarize;
pub use views::{event_bars, filter_events, venue_totals, EventBar, EventFilter, VenueTotals};
