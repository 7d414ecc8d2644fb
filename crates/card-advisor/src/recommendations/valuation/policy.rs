use super::super::catalog::{CardRecord, LoungeAllowance};
use super::super::format::format_amount;
use super::super::profile::SpendCategory;
use super::{FeeStatus, ValuationBreakdown};

pub(crate) const BASIC_REWARDS: &str = "Basic rewards on all spends";

pub(crate) fn ineligibility_reason(card: &CardRecord) -> String {
    format!(
        "Requires minimum salary of ₹{}/month",
        format_amount(card.min_salary_req)
    )
}

/// Highest-earning category; the first one in iteration order wins ties.
pub(crate) fn best_category(breakdown: &ValuationBreakdown) -> Option<(SpendCategory, f64)> {
    let mut best: Option<(SpendCategory, f64)> = None;
    for category in SpendCategory::ALL {
        let Some(&reward) = breakdown.category_rewards.get(&category) else {
            continue;
        };
        match best {
            Some((_, current)) if reward <= current => {}
            _ => best = Some((category, reward)),
        }
    }
    best
}

pub(crate) fn explain(card: &CardRecord, breakdown: &ValuationBreakdown) -> String {
    let mut reasons = Vec::new();

    if let Some((category, reward)) = best_category(breakdown) {
        if reward > 0.0 {
            reasons.push(format!(
                "{:.1}% rewards on {} spend",
                card.reward_rate(category) * 100.0,
                category.label()
            ));
        }
    }

    match breakdown.fee_status {
        FeeStatus::WaivedBySpend { threshold } => {
            reasons.push(format!("Fee waived (spend > ₹{})", format_amount(threshold)))
        }
        FeeStatus::AlwaysWaived => reasons.push("Annual fee always waived".to_string()),
        FeeStatus::Free => reasons.push("Lifetime free card".to_string()),
        FeeStatus::Payable => {}
    }

    if !breakdown.achieved_milestones.is_empty() {
        reasons.push(format!(
            "{} milestone benefit(s) achieved",
            breakdown.achieved_milestones.len()
        ));
    }

    if breakdown.lounge_value > 0.0 {
        match card.lounge_visits {
            LoungeAllowance::Unlimited => reasons.push("Unlimited lounge access".to_string()),
            LoungeAllowance::PerQuarter(visits) => {
                reasons.push(format!("{} lounge visits/year", visits.saturating_mul(4)))
            }
        }
    }

    if reasons.is_empty() {
        BASIC_REWARDS.to_string()
    } else {
        reasons.join(" | ")
    }
}
