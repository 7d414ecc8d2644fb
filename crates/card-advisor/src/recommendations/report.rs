//! Presentation-ready views over ranking output.

use std::io::Write;

use serde::Serialize;

use super::catalog::CatalogProvider;
use super::format::format_rupees;
use super::profile::{MonthlySpends, SpendCategory};
use super::valuation::ValuationResult;

/// One line of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub card_name: String,
    pub bank: String,
    pub annual_fee: u64,
    pub effective_fee: u64,
    pub fee_waived: bool,
    pub net_value: f64,
    pub effective_reward_rate: f64,
    pub lounge_access: String,
}

impl ComparisonRow {
    /// `None` for ineligible results, which carry no breakdown.
    pub fn from_result(result: &ValuationResult) -> Option<Self> {
        let breakdown = result.breakdown.as_ref()?;
        Some(Self {
            card_name: result.card_name.clone(),
            bank: result.bank.clone(),
            annual_fee: breakdown.annual_fee,
            effective_fee: breakdown.effective_fee,
            fee_waived: breakdown.fee_waived,
            net_value: result.net_value,
            effective_reward_rate: result.effective_reward_rate,
            lounge_access: result.lounge_access.clone(),
        })
    }
}

pub fn comparison_rows(results: &[ValuationResult]) -> Vec<ComparisonRow> {
    results.iter().filter_map(ComparisonRow::from_result).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySpend {
    pub category: SpendCategory,
    pub monthly: u64,
    pub annual: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendSummary {
    pub categories: Vec<CategorySpend>,
    pub total_monthly: u64,
    pub total_annual: u64,
}

impl SpendSummary {
    pub fn from_spends(spends: &MonthlySpends) -> Self {
        let categories = spends
            .iter()
            .map(|(category, monthly)| CategorySpend {
                category,
                monthly,
                annual: monthly * 12,
            })
            .collect();
        let total_monthly = spends.total();

        Self {
            categories,
            total_monthly,
            total_annual: total_monthly * 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankPointValue {
    pub bank: String,
    pub point_value: f64,
}

/// Headline figures about the catalog itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub total_cards: usize,
    pub lifetime_free_cards: usize,
    pub cards_with_lounge_access: usize,
    pub point_values: Vec<BankPointValue>,
}

impl CatalogSummary {
    pub fn from_provider<P: CatalogProvider + ?Sized>(catalog: &P) -> Self {
        let cards = catalog.all_cards();

        Self {
            total_cards: cards.len(),
            lifetime_free_cards: cards.iter().filter(|card| card.is_lifetime_free()).count(),
            cards_with_lounge_access: cards
                .iter()
                .filter(|card| card.lounge_visits.has_access())
                .count(),
            point_values: catalog
                .point_valuation()
                .iter()
                .map(|(bank, point_value)| BankPointValue {
                    bank: bank.to_string(),
                    point_value,
                })
                .collect(),
        }
    }
}

/// Write the comparison table as CSV, one row per result in ranked order.
pub fn write_comparison_csv<W: Write>(
    writer: W,
    results: &[ValuationResult],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "Rank",
        "Card Name",
        "Bank",
        "Annual Fee",
        "Effective Fee",
        "Net Benefit",
        "Reward Rate",
        "Lounge Access",
    ])?;

    for (index, row) in comparison_rows(results).iter().enumerate() {
        let effective_fee = if row.fee_waived {
            "0 (waived)".to_string()
        } else {
            row.effective_fee.to_string()
        };
        csv_writer.write_record([
            (index + 1).to_string(),
            row.card_name.clone(),
            row.bank.clone(),
            row.annual_fee.to_string(),
            effective_fee,
            format!("{:.0}", row.net_value),
            format!("{:.2}%", row.effective_reward_rate),
            row.lounge_access.clone(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Single-line headline for a ranked result, e.g. `HDFC Regalia Gold (HDFC): ₹18,400`.
pub fn headline(result: &ValuationResult) -> String {
    format!(
        "{} ({}): {}",
        result.card_name,
        result.bank,
        format_rupees(result.net_value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations::catalog::CardCatalog;
    use crate::recommendations::ranking::{rank_cards, RankingFilters};
    use crate::recommendations::profile::UserProfile;
    use crate::recommendations::valuation::{ValuationConfig, ValuationEngine};

    fn ranked() -> Vec<ValuationResult> {
        let catalog = CardCatalog::standard().expect("standard catalog validates");
        let engine = ValuationEngine::new(
            ValuationConfig::default(),
            catalog.point_valuation().clone(),
        );
        let profile = UserProfile {
            monthly_salary: 75_000,
            monthly_spends: MonthlySpends {
                general: 15_000,
                travel: 5_000,
                dining: 5_000,
                online: 10_000,
                utilities: 5_000,
            },
            needs_lounge: false,
            lifetime_free_only: true,
            is_first_year: true,
        };
        rank_cards(
            &engine,
            catalog.all_cards(),
            &profile,
            RankingFilters::from_profile(&profile),
        )
        .expect("valid profile")
    }

    #[test]
    fn spend_summary_totals_monthly_and_annual() {
        let spends = MonthlySpends {
            general: 10_000,
            dining: 2_500,
            ..MonthlySpends::default()
        };

        let summary = SpendSummary::from_spends(&spends);

        assert_eq!(summary.categories.len(), 5);
        assert_eq!(summary.categories[0].category, SpendCategory::General);
        assert_eq!(summary.categories[0].annual, 120_000);
        assert_eq!(summary.total_monthly, 12_500);
        assert_eq!(summary.total_annual, 150_000);
    }

    #[test]
    fn comparison_csv_has_header_and_ranked_rows() {
        let results = ranked();
        let mut buffer = Vec::new();

        write_comparison_csv(&mut buffer, &results).expect("csv writes");

        let text = String::from_utf8(buffer).expect("utf8 csv");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), results.len() + 1);
        assert!(lines[0].starts_with("Rank,Card Name,Bank"));
        assert!(lines[1].starts_with("1,Axis Flipkart,Axis,0,0,11400,"));
    }

    #[test]
    fn catalog_summary_counts_cards() {
        let catalog = CardCatalog::standard().expect("standard catalog validates");

        let summary = CatalogSummary::from_provider(&catalog);

        assert_eq!(summary.total_cards, 12);
        assert_eq!(summary.lifetime_free_cards, 3);
        assert_eq!(summary.cards_with_lounge_access, 9);
        assert_eq!(summary.point_values.len(), 7);
    }

    #[test]
    fn headline_formats_net_value() {
        let results = ranked();

        assert_eq!(headline(&results[0]), "Axis Flipkart (Axis): ₹11,400");
    }
}
