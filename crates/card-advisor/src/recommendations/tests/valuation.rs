use super::common::*;
use crate::recommendations::catalog::LoungeAllowance;
use crate::recommendations::profile::{MonthlySpends, ProfileError, SpendCategory};
use crate::recommendations::valuation::FeeStatus;

#[test]
fn ineligible_card_short_circuits_with_reason() {
    let catalog = standard_catalog();
    let infinia = catalog.find("HDFC Infinia").expect("card present");

    let result = engine()
        .valuate(infinia, &profile(75_000))
        .expect("valid profile");

    assert!(!result.is_eligible);
    assert_eq!(result.net_value, 0.0);
    assert!(result.breakdown.is_none());
    assert!(result.why_recommended.is_none());
    assert_eq!(
        result.ineligibility_reason.as_deref(),
        Some("Requires minimum salary of ₹300,000/month")
    );
}

#[test]
fn eligibility_is_monotonic_in_salary() {
    let catalog = standard_catalog();
    let engine = engine();

    for card in catalog.cards() {
        let at_minimum = engine
            .valuate(card, &profile(card.min_salary_req.max(1)))
            .expect("valid profile");
        let above = engine
            .valuate(card, &profile(card.min_salary_req + 50_000))
            .expect("valid profile");
        assert!(at_minimum.is_eligible, "{} at minimum", card.card_name);
        assert!(above.is_eligible, "{} above minimum", card.card_name);
    }
}

#[test]
fn simplyclick_breakdown_matches_hand_calculation() {
    let catalog = standard_catalog();
    let card = catalog.find("SBI SimplyCLICK").expect("card present");

    let result = engine()
        .valuate(card, &profile(75_000))
        .expect("valid profile");

    let breakdown = result.breakdown.expect("eligible breakdown");
    assert_eq!(breakdown.total_annual_spend, 480_000);
    assert_eq!(breakdown.annual_fee, 499);
    assert_eq!(breakdown.effective_fee, 0);
    assert!(breakdown.fee_waived);
    assert_eq!(
        breakdown.fee_status,
        FeeStatus::WaivedBySpend { threshold: 100_000 }
    );
    assert_close(breakdown.total_rewards, 7_500.0);
    assert_close(breakdown.category_rewards[&SpendCategory::General], 2_250.0);
    assert_close(breakdown.category_rewards[&SpendCategory::Online], 3_000.0);
    assert_close(breakdown.milestone_value, 1_000.0);
    assert_eq!(
        breakdown.achieved_milestones,
        vec![
            "₹100,000 spend → 2,000 points (₹500)".to_string(),
            "₹200,000 spend → 2,000 points (₹500)".to_string(),
        ]
    );
    assert_eq!(breakdown.lounge_value, 0.0);
    assert_eq!(breakdown.welcome_value, 500.0);
    assert_close(breakdown.gross_benefits, 9_000.0);
    assert_close(result.net_value, 9_000.0);
    assert_close(result.effective_reward_rate, 1.5625);
    assert_eq!(
        result.why_recommended.as_deref(),
        Some(
            "2.5% rewards on online spend | Fee waived (spend > ₹100,000) | 2 milestone benefit(s) achieved"
        )
    );
}

#[test]
fn infinia_fee_is_payable_below_waiver_threshold() {
    let catalog = standard_catalog();
    let card = catalog.find("HDFC Infinia").expect("card present");
    let mut rich = profile(500_000);
    rich.monthly_spends.travel = 0;
    rich.monthly_spends.dining = 0;
    rich.monthly_spends.online = 0;
    rich.monthly_spends.utilities = 0;

    let result = engine().valuate(card, &rich).expect("valid profile");

    let breakdown = result.breakdown.expect("eligible breakdown");
    assert_eq!(breakdown.total_annual_spend, 180_000);
    assert!(!breakdown.fee_waived);
    assert_eq!(breakdown.fee_status, FeeStatus::Payable);
    assert_eq!(breakdown.effective_fee, 12_500);
}

#[test]
fn zero_threshold_means_fee_is_never_charged() {
    let engine = engine();
    let mut card = plain_card("always-waived");
    card.fee_waiver_threshold = 0;

    for salary_profile in [zero_spend_profile(50_000), profile(50_000)] {
        let breakdown = engine
            .valuate(&card, &salary_profile)
            .expect("valid profile")
            .breakdown
            .expect("eligible breakdown");
        assert_eq!(breakdown.effective_fee, 0);
        assert_eq!(breakdown.fee_status, FeeStatus::AlwaysWaived);
    }
}

#[test]
fn zero_fee_card_is_free_not_waived() {
    let catalog = standard_catalog();
    let card = catalog.find("RBL Shoprite").expect("card present");

    let result = engine()
        .valuate(card, &profile(30_000))
        .expect("valid profile");

    let breakdown = result.breakdown.expect("eligible breakdown");
    assert!(!breakdown.fee_waived);
    assert_eq!(breakdown.fee_status, FeeStatus::Free);
    assert!(result
        .why_recommended
        .as_deref()
        .is_some_and(|why| why.contains("Lifetime free card")));
}

#[test]
fn milestones_fire_independently() {
    let engine = engine();
    let mut card = plain_card("milestones");
    card.milestone_benefits.insert(100_000, 1_000);
    card.milestone_benefits.insert(400_000, 4_000);
    card.milestone_benefits.insert(1_000_000, 10_000);

    let breakdown = engine
        .valuate(&card, &profile(50_000))
        .expect("valid profile")
        .breakdown
        .expect("eligible breakdown");

    // 480,000 annual spend clears the first two thresholds; unknown bank uses 0.25/point.
    assert_eq!(breakdown.achieved_milestones.len(), 2);
    assert_close(breakdown.milestone_value, 1_250.0);
}

#[test]
fn lounge_value_depends_on_need_and_allowance() {
    let engine = engine();
    let mut lounge_profile = profile(50_000);
    lounge_profile.needs_lounge = true;

    let mut quarterly = plain_card("quarterly");
    quarterly.lounge_visits = LoungeAllowance::PerQuarter(2);
    let mut unlimited = plain_card("unlimited");
    unlimited.lounge_visits = LoungeAllowance::Unlimited;

    let quarterly_result = engine
        .valuate(&quarterly, &lounge_profile)
        .expect("valid profile");
    let unlimited_result = engine
        .valuate(&unlimited, &lounge_profile)
        .expect("valid profile");
    let without_need = engine
        .valuate(&unlimited, &profile(50_000))
        .expect("valid profile");

    let lounge = |result: &crate::recommendations::ValuationResult| {
        result.breakdown.as_ref().expect("breakdown").lounge_value
    };
    assert_eq!(lounge(&quarterly_result), 12_000.0);
    assert_eq!(lounge(&unlimited_result), 18_000.0);
    assert_eq!(lounge(&without_need), 0.0);
    assert!(quarterly_result
        .why_recommended
        .as_deref()
        .is_some_and(|why| why.ends_with("8 lounge visits/year")));
    assert!(unlimited_result
        .why_recommended
        .as_deref()
        .is_some_and(|why| why.ends_with("Unlimited lounge access")));
}

#[test]
fn welcome_benefit_is_flat_rupees_in_first_year_only() {
    let catalog = standard_catalog();
    let card = catalog.find("Amex Platinum Travel").expect("card present");
    let mut renewal = profile(75_000);
    renewal.is_first_year = false;

    let first_year = engine()
        .valuate(card, &profile(75_000))
        .expect("valid profile");
    let later_year = engine().valuate(card, &renewal).expect("valid profile");

    assert_eq!(
        first_year.breakdown.as_ref().expect("breakdown").welcome_value,
        5_000.0
    );
    assert_eq!(
        later_year.breakdown.as_ref().expect("breakdown").welcome_value,
        0.0
    );
    assert_close(first_year.net_value - later_year.net_value, 5_000.0);
    assert_close(first_year.net_value, 27_200.0);
}

#[test]
fn zero_spend_yields_zero_rate_without_fault() {
    let catalog = standard_catalog();
    let engine = engine();
    let profile = zero_spend_profile(500_000);

    for card in catalog.cards() {
        let result = engine.valuate(card, &profile).expect("valid profile");
        let breakdown = result.breakdown.as_ref().expect("eligible breakdown");
        assert_eq!(breakdown.total_annual_spend, 0);
        assert_eq!(breakdown.total_rewards, 0.0);
        assert_eq!(result.effective_reward_rate, 0.0);
        assert_close(
            result.net_value,
            breakdown.welcome_value - breakdown.effective_fee as f64,
        );
    }
}

#[test]
fn explanation_defaults_to_basic_rewards() {
    let mut card = plain_card("bare");
    card.fee_waiver_threshold = 10_000_000;

    let result = engine()
        .valuate(&card, &zero_spend_profile(50_000))
        .expect("valid profile");

    assert_eq!(
        result.why_recommended.as_deref(),
        Some("Basic rewards on all spends")
    );
}

#[test]
fn best_category_tie_goes_to_first_category() {
    let mut card = plain_card("flat");
    card.category_multipliers.clear();
    card.fee_waiver_threshold = 10_000_000;
    let mut even = zero_spend_profile(50_000);
    even.monthly_spends.general = 1_000;
    even.monthly_spends.travel = 1_000;

    let result = engine().valuate(&card, &even).expect("valid profile");

    assert_eq!(
        result.why_recommended.as_deref(),
        Some("1.0% rewards on general spend")
    );
}

#[test]
fn valuate_rejects_spend_above_category_cap() {
    let catalog = standard_catalog();
    let card = catalog.find("SBI SimplyCLICK").expect("card present");
    let mut heavy = profile(75_000);
    heavy.monthly_spends.utilities = 5_000_000;

    assert_eq!(
        engine().valuate(card, &heavy),
        Err(ProfileError::SpendAboveLimit {
            category: SpendCategory::Utilities,
            amount: 5_000_000,
            max: 200_000,
        })
    );
}

#[test]
fn annualized_spend_saturates_instead_of_overflowing() {
    let spends = MonthlySpends {
        general: u64::MAX / 10,
        travel: u64::MAX / 10,
        ..MonthlySpends::default()
    };

    assert_eq!(spends.annualized().general, u64::MAX);
    assert_eq!(spends.total(), (u64::MAX / 10) * 2);
    assert_eq!(spends.annualized().total(), u64::MAX);
}
