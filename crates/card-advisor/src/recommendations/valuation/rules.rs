use std::collections::BTreeMap;

use super::super::catalog::{CardRecord, LoungeAllowance};
use super::super::format::{format_amount, format_rupees};
use super::super::profile::{MonthlySpends, SpendCategory, UserProfile};
use super::config::ValuationConfig;
use super::{FeeStatus, ValuationBreakdown};

pub(crate) fn is_eligible(card: &CardRecord, monthly_salary: u64) -> bool {
    monthly_salary >= card.min_salary_req
}

pub(crate) fn fee_status(card: &CardRecord, total_annual_spend: u64) -> FeeStatus {
    if card.annual_fee == 0 {
        FeeStatus::Free
    } else if card.fee_waiver_threshold == 0 {
        FeeStatus::AlwaysWaived
    } else if total_annual_spend >= card.fee_waiver_threshold {
        FeeStatus::WaivedBySpend {
            threshold: card.fee_waiver_threshold,
        }
    } else {
        FeeStatus::Payable
    }
}

pub(crate) fn category_rewards(
    card: &CardRecord,
    annual_spends: &MonthlySpends,
) -> (f64, BTreeMap<SpendCategory, f64>) {
    let mut rewards = BTreeMap::new();
    let mut total = 0.0;

    for (category, amount) in annual_spends.iter() {
        let reward = amount as f64 * card.reward_rate(category);
        rewards.insert(category, reward);
        total += reward;
    }

    (total, rewards)
}

/// Every threshold is checked on its own; reaching a higher one never hides a lower one.
pub(crate) fn milestone_rewards(
    card: &CardRecord,
    total_annual_spend: u64,
    point_value: f64,
) -> (f64, Vec<String>) {
    let mut value = 0.0;
    let mut achieved = Vec::new();

    for (&threshold, &points) in &card.milestone_benefits {
        if total_annual_spend < threshold {
            continue;
        }
        let worth = points as f64 * point_value;
        value += worth;
        achieved.push(format!(
            "₹{} spend → {} points ({})",
            format_amount(threshold),
            format_amount(points),
            format_rupees(worth)
        ));
    }

    (value, achieved)
}

pub(crate) fn lounge_value(
    allowance: LoungeAllowance,
    needs_lounge: bool,
    config: &ValuationConfig,
) -> f64 {
    if !needs_lounge {
        return 0.0;
    }

    let visits_per_year = match allowance {
        LoungeAllowance::Unlimited => config.unlimited_lounge_visits_per_year,
        LoungeAllowance::PerQuarter(visits) => visits.saturating_mul(4),
    };

    visits_per_year as f64 * config.lounge_value_per_visit
}

pub(crate) fn welcome_value(card: &CardRecord, is_first_year: bool) -> f64 {
    if is_first_year {
        card.welcome_benefit as f64
    } else {
        0.0
    }
}

pub(crate) fn build_breakdown(
    card: &CardRecord,
    profile: &UserProfile,
    config: &ValuationConfig,
    point_value: f64,
) -> ValuationBreakdown {
    let annual_spends = profile.monthly_spends.annualized();
    let total_annual_spend = annual_spends.total();

    let fee_status = fee_status(card, total_annual_spend);
    let effective_fee = if fee_status.is_payable() {
        card.annual_fee
    } else {
        0
    };

    let (total_rewards, category_rewards) = category_rewards(card, &annual_spends);
    let (milestone_value, achieved_milestones) =
        milestone_rewards(card, total_annual_spend, point_value);
    let lounge_value = lounge_value(card.lounge_visits, profile.needs_lounge, config);
    let welcome_value = welcome_value(card, profile.is_first_year);

    let gross_benefits = total_rewards + milestone_value + lounge_value + welcome_value;

    ValuationBreakdown {
        annual_fee: card.annual_fee,
        effective_fee,
        fee_waived: fee_status.is_waived(),
        fee_status,
        total_rewards,
        category_rewards,
        milestone_value,
        achieved_milestones,
        lounge_value,
        welcome_value,
        gross_benefits,
        total_annual_spend,
    }
}
