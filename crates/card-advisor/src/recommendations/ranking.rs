use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{CardRecord, CatalogProvider};
use super::profile::{ProfileError, UserProfile, MAX_MONTHLY_SALARY};
use super::valuation::{ValuationConfig, ValuationEngine, ValuationResult};

/// Optional catalog restrictions applied before valuation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingFilters {
    pub lifetime_free_only: bool,
    pub lounge_required: bool,
}

impl RankingFilters {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            lifetime_free_only: profile.lifetime_free_only,
            lounge_required: profile.needs_lounge,
        }
    }

    pub fn admits(&self, card: &CardRecord) -> bool {
        if self.lifetime_free_only && !card.is_lifetime_free() {
            return false;
        }
        if self.lounge_required && !card.lounge_visits.has_access() {
            return false;
        }
        true
    }
}

/// Value every admitted card and order the eligible ones by net value, best first.
///
/// The profile is validated once up front. The sort is stable, so cards with equal net
/// value keep their catalog order.
pub fn rank_cards(
    engine: &ValuationEngine,
    cards: &[CardRecord],
    profile: &UserProfile,
    filters: RankingFilters,
) -> Result<Vec<ValuationResult>, ProfileError> {
    profile.validate()?;

    let mut results: Vec<ValuationResult> = cards
        .iter()
        .filter(|card| filters.admits(card))
        .map(|card| engine.valuate_validated(card, profile))
        .filter(|result| result.is_eligible)
        .collect();

    results.sort_by(|left, right| right.net_value.total_cmp(&left.net_value));
    Ok(results)
}

/// Ranked cards plus, when nothing qualified, a reference listing of the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub results: Vec<ValuationResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference: Vec<ValuationResult>,
}

impl Recommendation {
    pub fn top(&self) -> Option<&ValuationResult> {
        self.results.first()
    }
}

/// Service composing a catalog provider with the valuation engine.
pub struct RankingService<P> {
    catalog: Arc<P>,
    engine: ValuationEngine,
}

impl<P> RankingService<P>
where
    P: CatalogProvider + 'static,
{
    pub fn new(catalog: Arc<P>, config: ValuationConfig) -> Self {
        let engine = ValuationEngine::new(config, catalog.point_valuation().clone());
        Self { catalog, engine }
    }

    pub fn catalog(&self) -> &P {
        &self.catalog
    }

    pub fn engine(&self) -> &ValuationEngine {
        &self.engine
    }

    /// Rank the catalog for a validated profile with explicit filters.
    pub fn rank(
        &self,
        profile: &UserProfile,
        filters: RankingFilters,
    ) -> Result<Vec<ValuationResult>, ProfileError> {
        let cards = self.catalog.all_cards();
        let results = rank_cards(&self.engine, cards, profile, filters)?;
        debug!(
            catalog = cards.len(),
            eligible = results.len(),
            lifetime_free_only = filters.lifetime_free_only,
            lounge_required = filters.lounge_required,
            "ranked card catalog"
        );
        Ok(results)
    }

    /// Rank with the profile's own preference flags and attach a reference listing when
    /// nothing qualified.
    pub fn recommend(&self, profile: &UserProfile) -> Result<Recommendation, ProfileError> {
        let results = self.rank(profile, RankingFilters::from_profile(profile))?;

        let reference = if results.is_empty() {
            debug!("no eligible cards, building unfiltered reference listing");
            self.reference_listing(profile)?
        } else {
            Vec::new()
        };

        Ok(Recommendation { results, reference })
    }

    /// Every card valued as if the salary requirement were met, without filters or
    /// lounge valuation.
    pub fn reference_listing(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<ValuationResult>, ProfileError> {
        let reference_profile = UserProfile {
            monthly_salary: MAX_MONTHLY_SALARY,
            needs_lounge: false,
            lifetime_free_only: false,
            ..profile.clone()
        };

        rank_cards(
            &self.engine,
            self.catalog.all_cards(),
            &reference_profile,
            RankingFilters::default(),
        )
    }
}
