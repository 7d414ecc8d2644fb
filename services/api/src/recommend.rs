use crate::infra::{load_catalog, resolve_catalog_path};
use card_advisor::error::AppError;
use card_advisor::recommendations::format::{format_amount, format_compact_currency, format_rupees};
use card_advisor::recommendations::report::{comparison_rows, headline, write_comparison_csv};
use card_advisor::recommendations::{
    CardCatalog, CatalogProvider, CatalogSummary, MonthlySpends, RankingService, SpendSummary,
    UserProfile, ValuationConfig, ValuationResult,
};
use chrono::Local;
use clap::Args;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Monthly salary in rupees
    #[arg(long, default_value_t = 75_000)]
    pub(crate) salary: u64,
    /// Monthly general/retail spend
    #[arg(long, default_value_t = 15_000)]
    pub(crate) general: u64,
    /// Monthly travel spend
    #[arg(long, default_value_t = 5_000)]
    pub(crate) travel: u64,
    /// Monthly dining and food-ordering spend
    #[arg(long, default_value_t = 5_000)]
    pub(crate) dining: u64,
    /// Monthly online shopping spend
    #[arg(long, default_value_t = 10_000)]
    pub(crate) online: u64,
    /// Monthly utility bills
    #[arg(long, default_value_t = 5_000)]
    pub(crate) utilities: u64,
    /// Only consider cards with lounge access and value the visits
    #[arg(long)]
    pub(crate) needs_lounge: bool,
    /// Only consider cards without an annual fee
    #[arg(long)]
    pub(crate) lifetime_free_only: bool,
    /// Leave first-year welcome benefits out of the valuation
    #[arg(long)]
    pub(crate) no_welcome: bool,
    /// JSON catalog to use instead of the configured or built-in one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Write the comparison table as CSV to this path instead of printing a report
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Limit the detailed breakdown to the first N cards
    #[arg(long)]
    pub(crate) top: Option<usize>,
}

impl RecommendArgs {
    fn profile(&self) -> UserProfile {
        UserProfile {
            monthly_salary: self.salary,
            monthly_spends: MonthlySpends {
                general: self.general,
                travel: self.travel,
                dining: self.dining,
                online: self.online,
                utilities: self.utilities,
            },
            needs_lounge: self.needs_lounge,
            lifetime_free_only: self.lifetime_free_only,
            is_first_year: !self.no_welcome,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// JSON catalog to use instead of the configured or built-in one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Only list cards issued by this bank
    #[arg(long)]
    pub(crate) bank: Option<String>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let catalog = load_catalog(resolve_catalog_path(args.catalog.clone())?.as_deref())?;
    let service = RankingService::new(Arc::new(catalog), ValuationConfig::default());
    let profile = args.profile();
    let recommendation = service.recommend(&profile)?;

    if let Some(path) = &args.csv {
        let rows = if recommendation.results.is_empty() {
            &recommendation.reference
        } else {
            &recommendation.results
        };
        write_comparison_csv(File::create(path)?, rows)?;
        println!(
            "Wrote {} card(s) to {}",
            comparison_rows(rows).len(),
            path.display()
        );
        return Ok(());
    }

    println!(
        "Credit card recommendation ({})",
        Local::now().format("%Y-%m-%d %H:%M")
    );
    render_spend_summary(&SpendSummary::from_spends(&profile.monthly_spends));

    let Some(winner) = recommendation.top() else {
        println!("\nNo eligible cards found.");
        println!("- Salary below every card's minimum, or the filters exclude all cards.");
        println!("\nAll available cards (for reference)");
        render_comparison(&recommendation.reference);
        return Ok(());
    };

    println!("\nBest match: {}", headline(winner));
    if let Some(why) = &winner.why_recommended {
        println!("  {why}");
    }
    println!("  {}", winner.description);

    println!("\nComparison");
    render_comparison(&recommendation.results);

    let limit = args.top.unwrap_or(recommendation.results.len());
    println!("\nDetailed breakdown");
    for (rank, result) in recommendation.results.iter().take(limit).enumerate() {
        render_breakdown(rank + 1, result);
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = load_catalog(resolve_catalog_path(args.catalog)?.as_deref())?;
    render_catalog(&catalog, args.bank.as_deref());
    Ok(())
}

fn render_spend_summary(summary: &SpendSummary) {
    println!("\nSpending profile");
    for entry in &summary.categories {
        println!(
            "- {:<10} ₹{}/mo | ₹{}/yr",
            entry.category.label(),
            format_amount(entry.monthly),
            format_amount(entry.annual)
        );
    }
    println!(
        "- {:<10} ₹{}/mo | ₹{}/yr",
        "total",
        format_amount(summary.total_monthly),
        format_amount(summary.total_annual)
    );
}

fn render_comparison(results: &[ValuationResult]) {
    for (index, row) in comparison_rows(results).iter().enumerate() {
        let effective_fee = if row.fee_waived {
            "₹0 (waived)".to_string()
        } else {
            format!("₹{}", format_amount(row.effective_fee))
        };
        println!(
            "  {:>2}. {} ({}) | fee ₹{} -> {} | net {} | {:.2}% rewards | lounge: {}",
            index + 1,
            row.card_name,
            row.bank,
            format_amount(row.annual_fee),
            effective_fee,
            format_rupees(row.net_value),
            row.effective_reward_rate,
            row.lounge_access
        );
    }
}

fn render_breakdown(rank: usize, result: &ValuationResult) {
    let Some(breakdown) = &result.breakdown else {
        return;
    };

    println!(
        "#{rank} {} [{}] net {}",
        result.card_name,
        result.card_type,
        format_compact_currency(result.net_value)
    );
    println!(
        "  Rewards {} on ₹{} annual spend",
        format_rupees(breakdown.total_rewards),
        format_amount(breakdown.total_annual_spend)
    );
    for (category, reward) in &breakdown.category_rewards {
        if *reward > 0.0 {
            println!("    - {}: {}", category.label(), format_rupees(*reward));
        }
    }
    if breakdown.milestone_value > 0.0 {
        println!("  Milestones {}", format_rupees(breakdown.milestone_value));
        for milestone in &breakdown.achieved_milestones {
            println!("    - {milestone}");
        }
    }
    if breakdown.lounge_value > 0.0 {
        println!("  Lounge value {}", format_rupees(breakdown.lounge_value));
    }
    if breakdown.welcome_value > 0.0 {
        println!("  Welcome benefit {}", format_rupees(breakdown.welcome_value));
    }
    let fee = if breakdown.fee_waived {
        format!("₹{} (waived)", format_amount(breakdown.annual_fee))
    } else {
        format!("₹{}", format_amount(breakdown.effective_fee))
    };
    println!(
        "  Gross {} | fee {}",
        format_rupees(breakdown.gross_benefits),
        fee
    );
}

fn render_catalog(catalog: &CardCatalog, bank: Option<&str>) {
    let summary = CatalogSummary::from_provider(catalog);
    println!(
        "{} cards | {} lifetime free | {} with lounge access",
        summary.total_cards, summary.lifetime_free_cards, summary.cards_with_lounge_access
    );
    let point_values: Vec<String> = summary
        .point_values
        .iter()
        .map(|entry| format!("{} ₹{:.2}", entry.bank, entry.point_value))
        .collect();
    println!("Point values: {}", point_values.join(" | "));

    let cards = match bank {
        Some(bank) => catalog.cards_by_bank(bank),
        None => catalog.all_cards().iter().collect(),
    };
    for card in cards {
        println!(
            "- {} ({}, {}) | fee ₹{} | min salary ₹{}/mo | lounge: {}",
            card.card_name,
            card.bank,
            card.card_type,
            format_amount(card.annual_fee),
            format_amount(card.min_salary_req),
            card.lounge_access
        );
    }
}
