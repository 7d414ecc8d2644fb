use std::collections::BTreeMap;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::recommendations::catalog::{CardCatalog, CardRecord, LoungeAllowance};
use crate::recommendations::profile::{MonthlySpends, SpendCategory, UserProfile};
use crate::recommendations::ranking::RankingService;
use crate::recommendations::valuation::{ValuationConfig, ValuationEngine};

pub(super) fn standard_catalog() -> CardCatalog {
    CardCatalog::standard().expect("standard catalog validates")
}

pub(super) fn engine() -> ValuationEngine {
    let catalog = standard_catalog();
    ValuationEngine::new(
        ValuationConfig::default(),
        crate::recommendations::catalog::CatalogProvider::point_valuation(&catalog).clone(),
    )
}

pub(super) fn service() -> Arc<RankingService<CardCatalog>> {
    Arc::new(RankingService::new(
        Arc::new(standard_catalog()),
        ValuationConfig::default(),
    ))
}

pub(super) fn everyday_spends() -> MonthlySpends {
    MonthlySpends {
        general: 15_000,
        travel: 5_000,
        dining: 5_000,
        online: 10_000,
        utilities: 5_000,
    }
}

pub(super) fn profile(monthly_salary: u64) -> UserProfile {
    UserProfile {
        monthly_salary,
        monthly_spends: everyday_spends(),
        needs_lounge: false,
        lifetime_free_only: false,
        is_first_year: true,
    }
}

pub(super) fn zero_spend_profile(monthly_salary: u64) -> UserProfile {
    UserProfile {
        monthly_spends: MonthlySpends::default(),
        ..profile(monthly_salary)
    }
}

/// Minimal card used to exercise individual rules without catalog noise.
pub(super) fn plain_card(name: &str) -> CardRecord {
    CardRecord {
        card_name: name.to_string(),
        bank: "Test Bank".to_string(),
        card_type: "Regular".to_string(),
        description: "fixture".to_string(),
        annual_fee: 1_000,
        fee_waiver_threshold: 200_000,
        min_salary_req: 25_000,
        base_reward_rate: 0.01,
        category_multipliers: BTreeMap::from([(SpendCategory::Online, 0.05)]),
        lounge_access: "None".to_string(),
        lounge_visits: LoungeAllowance::NONE,
        milestone_benefits: BTreeMap::new(),
        fuel_surcharge_waiver: false,
        joining_fee: 0,
        welcome_benefit: 0,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn response_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}
