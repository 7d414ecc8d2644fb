use serde::{Deserialize, Serialize};

/// Constants the valuation engine prices non-reward benefits with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// Rupees saved per lounge visit.
    pub lounge_value_per_visit: f64,
    /// Visits per year credited to cards with unlimited access.
    pub unlimited_lounge_visits_per_year: u32,
    /// Point value for banks missing from the catalog's point table.
    pub default_point_value: f64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            lounge_value_per_visit: 1_500.0,
            unlimited_lounge_visits_per_year: 12,
            default_point_value: 0.25,
        }
    }
}
