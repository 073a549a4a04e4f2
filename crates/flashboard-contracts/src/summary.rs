// Summary DTO for the stats endpoint

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate totals over the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatsSummary {
    /// Sum of liters over all events.
    pub total_liters: f64,
    /// Sum of revenue over all events, in euros.
    pub total_revenue_eur: f64,
    /// Distinct venue names in first-appearance order, duplicates removed.
    pub distinct_venues: Vec<String>,
}
