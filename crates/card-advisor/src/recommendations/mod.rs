//! Card recommendation pipeline: catalog, per-card valuation, ranking, and the views and
//! HTTP routes built on top of them.
//!
//! Everything here is synchronous and free of shared mutable state. The catalog is
//! validated once and then only read, so a single `RankingService` can serve concurrent
//! requests without locking.

pub mod catalog;
pub mod format;
pub mod profile;
pub mod ranking;
pub mod report;
pub mod router;
pub mod valuation;

#[cfg(test)]
mod tests;

pub use catalog::{
    CardCatalog, CardDefect, CardRecord, CatalogError, CatalogProvider, LoungeAllowance,
    PointValuationTable,
};
pub use profile::{MonthlySpends, ProfileError, SpendCategory, UserProfile, MAX_MONTHLY_SALARY};
pub use ranking::{rank_cards, RankingFilters, RankingService, Recommendation};
pub use report::{CatalogSummary, ComparisonRow, SpendSummary};
pub use router::recommendation_router;
pub use valuation::{
    FeeStatus, ValuationBreakdown, ValuationConfig, ValuationEngine, ValuationResult,
};
