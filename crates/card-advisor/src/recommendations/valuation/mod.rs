mod config;
pub(crate) mod policy;
pub(crate) mod rules;

pub use config::ValuationConfig;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{CardRecord, PointValuationTable};
use super::profile::{ProfileError, SpendCategory, UserProfile};

/// How the annual fee was settled for a given spend level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FeeStatus {
    /// Annual spend fell short of the waiver threshold.
    Payable,
    WaivedBySpend { threshold: u64 },
    /// Card lists a fee but waives it unconditionally.
    AlwaysWaived,
    /// No annual fee at all.
    Free,
}

impl FeeStatus {
    pub const fn is_payable(self) -> bool {
        matches!(self, FeeStatus::Payable)
    }

    pub const fn is_waived(self) -> bool {
        matches!(self, FeeStatus::WaivedBySpend { .. } | FeeStatus::AlwaysWaived)
    }
}

/// Every intermediate figure behind a net value, kept for display and audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationBreakdown {
    pub annual_fee: u64,
    pub effective_fee: u64,
    pub fee_waived: bool,
    pub fee_status: FeeStatus,
    pub total_rewards: f64,
    pub category_rewards: BTreeMap<SpendCategory, f64>,
    pub milestone_value: f64,
    pub achieved_milestones: Vec<String>,
    pub lounge_value: f64,
    pub welcome_value: f64,
    pub gross_benefits: f64,
    pub total_annual_spend: u64,
}

/// Outcome of valuing one card for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub card_name: String,
    pub bank: String,
    pub card_type: String,
    pub lounge_access: String,
    pub description: String,
    pub is_eligible: bool,
    pub net_value: f64,
    pub effective_reward_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ValuationBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_recommended: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ineligibility_reason: Option<String>,
}

impl ValuationResult {
    fn ineligible(card: &CardRecord) -> Self {
        Self {
            card_name: card.card_name.clone(),
            bank: card.bank.clone(),
            card_type: card.card_type.clone(),
            lounge_access: card.lounge_access.clone(),
            description: card.description.clone(),
            is_eligible: false,
            net_value: 0.0,
            effective_reward_rate: 0.0,
            breakdown: None,
            why_recommended: None,
            ineligibility_reason: Some(policy::ineligibility_reason(card)),
        }
    }
}

/// Stateless pricer turning a (card, profile) pair into a net annual benefit.
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    config: ValuationConfig,
    point_valuation: PointValuationTable,
}

impl ValuationEngine {
    pub fn new(config: ValuationConfig, point_valuation: PointValuationTable) -> Self {
        Self {
            config,
            point_valuation,
        }
    }

    pub fn point_value(&self, bank: &str) -> f64 {
        self.point_valuation
            .point_value(bank, self.config.default_point_value)
    }

    /// Validate the profile, then price the card for it.
    pub fn valuate(
        &self,
        card: &CardRecord,
        profile: &UserProfile,
    ) -> Result<ValuationResult, ProfileError> {
        profile.validate()?;
        Ok(self.valuate_validated(card, profile))
    }

    /// Price a card for a profile that already passed `UserProfile::validate`.
    pub(crate) fn valuate_validated(
        &self,
        card: &CardRecord,
        profile: &UserProfile,
    ) -> ValuationResult {
        if !rules::is_eligible(card, profile.monthly_salary) {
            return ValuationResult::ineligible(card);
        }

        let breakdown =
            rules::build_breakdown(card, profile, &self.config, self.point_value(&card.bank));

        let net_value = breakdown.gross_benefits - breakdown.effective_fee as f64;
        let effective_reward_rate = if breakdown.total_annual_spend > 0 {
            breakdown.total_rewards / breakdown.total_annual_spend as f64 * 100.0
        } else {
            0.0
        };
        let why_recommended = policy::explain(card, &breakdown);

        ValuationResult {
            card_name: card.card_name.clone(),
            bank: card.bank.clone(),
            card_type: card.card_type.clone(),
            lounge_access: card.lounge_access.clone(),
            description: card.description.clone(),
            is_eligible: true,
            net_value,
            effective_reward_rate,
            breakdown: Some(breakdown),
            why_recommended: Some(why_recommended),
            ineligibility_reason: None,
        }
    }
}
