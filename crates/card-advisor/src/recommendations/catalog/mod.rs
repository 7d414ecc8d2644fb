//! Card catalog: the immutable card records and the bank point table they are valued with.
//!
//! Catalogs are validated once when constructed. Anything that would silently change scoring
//! (rates outside `[0, 1]`, zero milestones, multipliers on the `general` bucket) is rejected
//! before a single ranking request is served.

mod loader;
mod standard;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::profile::SpendCategory;

/// Read-only source of cards and point values consumed by the ranking service.
pub trait CatalogProvider: Send + Sync {
    fn all_cards(&self) -> &[CardRecord];
    fn point_valuation(&self) -> &PointValuationTable;
}

/// Airport lounge entitlement of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoungeAllowance {
    PerQuarter(u32),
    Unlimited,
}

impl LoungeAllowance {
    pub const NONE: LoungeAllowance = LoungeAllowance::PerQuarter(0);

    pub const fn has_access(self) -> bool {
        match self {
            LoungeAllowance::PerQuarter(visits) => visits > 0,
            LoungeAllowance::Unlimited => true,
        }
    }
}

/// Static description of a card as published by the issuer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardRecord {
    pub card_name: String,
    pub bank: String,
    pub card_type: String,
    pub description: String,
    /// Yearly fee in rupees.
    pub annual_fee: u64,
    /// Yearly spend that waives the fee. `0` means the fee is never charged.
    pub fee_waiver_threshold: u64,
    /// Minimum monthly salary in rupees.
    pub min_salary_req: u64,
    /// Reward fraction for `general` and any category without an override.
    pub base_reward_rate: f64,
    /// Sparse per-category overrides of `base_reward_rate`. Never keyed by `general`.
    #[serde(default)]
    pub category_multipliers: BTreeMap<SpendCategory, f64>,
    pub lounge_access: String,
    pub lounge_visits: LoungeAllowance,
    /// Annual-spend threshold -> bonus reward *points*. Converted with the bank's point value.
    #[serde(default)]
    pub milestone_benefits: BTreeMap<u64, u64>,
    #[serde(default)]
    pub fuel_surcharge_waiver: bool,
    #[serde(default)]
    pub joining_fee: u64,
    /// First-year bonus already expressed in *rupees*; never point-converted.
    #[serde(default)]
    pub welcome_benefit: u64,
}

impl CardRecord {
    /// Reward fraction applied to a category, falling back to the base rate.
    pub fn reward_rate(&self, category: SpendCategory) -> f64 {
        match category {
            SpendCategory::General => self.base_reward_rate,
            other => self
                .category_multipliers
                .get(&other)
                .copied()
                .unwrap_or(self.base_reward_rate),
        }
    }

    pub fn is_lifetime_free(&self) -> bool {
        self.annual_fee == 0
    }

    fn validate(&self) -> Result<(), CardDefect> {
        if self.card_name.trim().is_empty() {
            return Err(CardDefect::BlankName);
        }
        if self.bank.trim().is_empty() {
            return Err(CardDefect::BlankBank);
        }
        if !is_fraction(self.base_reward_rate) {
            return Err(CardDefect::BaseRateOutOfRange(self.base_reward_rate));
        }
        for (category, rate) in &self.category_multipliers {
            if *category == SpendCategory::General {
                return Err(CardDefect::GeneralMultiplier);
            }
            if !is_fraction(*rate) {
                return Err(CardDefect::MultiplierOutOfRange {
                    category: *category,
                    rate: *rate,
                });
            }
        }
        for (threshold, points) in &self.milestone_benefits {
            if *threshold == 0 {
                return Err(CardDefect::ZeroMilestoneThreshold);
            }
            if *points == 0 {
                return Err(CardDefect::ZeroMilestonePoints {
                    threshold: *threshold,
                });
            }
        }
        Ok(())
    }
}

fn is_fraction(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

/// Rupee value of one reward point, per bank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointValuationTable {
    rates: BTreeMap<String, f64>,
}

impl PointValuationTable {
    pub fn new(rates: BTreeMap<String, f64>) -> Self {
        Self { rates }
    }

    pub fn point_value(&self, bank: &str, default: f64) -> f64 {
        self.rates.get(bank).copied().unwrap_or(default)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(bank, rate)| (bank.as_str(), *rate))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (bank, rate) in &self.rates {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(CatalogError::InvalidPointValue {
                    bank: bank.clone(),
                    value: *rate,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, f64)> for PointValuationTable {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Validated, immutable catalog shared by every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardCatalog {
    point_valuation: PointValuationTable,
    cards: Vec<CardRecord>,
}

impl CardCatalog {
    pub fn new(
        cards: Vec<CardRecord>,
        point_valuation: PointValuationTable,
    ) -> Result<Self, CatalogError> {
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }

        point_valuation.validate()?;

        let mut seen = BTreeSet::new();
        for card in &cards {
            card.validate().map_err(|defect| CatalogError::InvalidCard {
                card: card.card_name.clone(),
                defect,
            })?;
            if !seen.insert(card.card_name.as_str()) {
                return Err(CatalogError::DuplicateCard(card.card_name.clone()));
            }
        }

        Ok(Self {
            point_valuation,
            cards,
        })
    }

    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(standard::cards(), standard::point_valuation())
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn find(&self, card_name: &str) -> Option<&CardRecord> {
        self.cards.iter().find(|card| card.card_name == card_name)
    }

    pub fn lifetime_free_cards(&self) -> Vec<&CardRecord> {
        self.cards
            .iter()
            .filter(|card| card.is_lifetime_free())
            .collect()
    }

    pub fn cards_by_bank(&self, bank: &str) -> Vec<&CardRecord> {
        self.cards
            .iter()
            .filter(|card| card.bank.eq_ignore_ascii_case(bank))
            .collect()
    }

    pub fn eligible_cards(&self, monthly_salary: u64) -> Vec<&CardRecord> {
        self.cards
            .iter()
            .filter(|card| card.min_salary_req <= monthly_salary)
            .collect()
    }

    pub fn cards_with_lounge_access(&self) -> Vec<&CardRecord> {
        self.cards
            .iter()
            .filter(|card| card.lounge_visits.has_access())
            .collect()
    }
}

impl CatalogProvider for CardCatalog {
    fn all_cards(&self) -> &[CardRecord] {
        &self.cards
    }

    fn point_valuation(&self) -> &PointValuationTable {
        &self.point_valuation
    }
}

/// What is wrong with a single card record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CardDefect {
    #[error("card name is blank")]
    BlankName,
    #[error("bank is blank")]
    BlankBank,
    #[error("base reward rate {0} is outside [0, 1]")]
    BaseRateOutOfRange(f64),
    #[error("{} multiplier {rate} is outside [0, 1]", .category.label())]
    MultiplierOutOfRange { category: SpendCategory, rate: f64 },
    #[error("general spend always uses the base rate and cannot carry a multiplier")]
    GeneralMultiplier,
    #[error("milestone threshold must be positive")]
    ZeroMilestoneThreshold,
    #[error("milestone at {threshold} grants zero points")]
    ZeroMilestonePoints { threshold: u64 },
}

/// Load-time failures. None of these are recoverable per request.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog contains no cards")]
    Empty,
    #[error("card '{card}' is invalid: {defect}")]
    InvalidCard { card: String, defect: CardDefect },
    #[error("card '{0}' is listed more than once")]
    DuplicateCard(String),
    #[error("point value for bank '{bank}' must be a positive number, found {value}")]
    InvalidPointValue { bank: String, value: f64 },
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
