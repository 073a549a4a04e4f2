// Event DTO (one venue/date record with measured sales)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One festival or venue event with measured liters sold and revenue.
///
/// Records are seeded once at process start and never mutated, so the
/// type carries no update semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Unique identifier across the catalog.
    pub id: u32,
    /// Display name of the event.
    #[schema(example = "OM vs Brest")]
    pub name: String,
    /// Calendar date as `YYYY-MM-DD`. Kept as a plain string; filtering is
    /// substring containment, never date arithmetic.
    #[schema(example = "2025-06-15")]
    pub date: String,
    /// Venue display name, also the grouping key for aggregations.
    #[schema(example = "Orange Vélodrome")]
    pub venue: String,
    /// Liters sold, non-negative.
    pub liters: f64,
    /// Revenue in euros, non-negative.
    pub revenue_eur: f64,
}
