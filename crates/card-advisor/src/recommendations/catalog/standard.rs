//! Built-in catalog of popular Indian credit cards.

use std::collections::BTreeMap;

use super::{CardRecord, LoungeAllowance, PointValuationTable};
use crate::recommendations::profile::SpendCategory::{self, Dining, Online, Travel, Utilities};

pub(super) fn point_valuation() -> PointValuationTable {
    [
        ("HDFC", 0.50),
        ("SBI", 0.25),
        ("Axis", 0.50),
        ("ICICI", 0.25),
        ("Amex", 0.50),
        ("RBL", 0.25),
        ("IndusInd", 0.50),
    ]
    .into_iter()
    .map(|(bank, rate)| (bank.to_string(), rate))
    .collect()
}

struct CardEntry {
    card_name: &'static str,
    bank: &'static str,
    card_type: &'static str,
    description: &'static str,
    annual_fee: u64,
    fee_waiver_threshold: u64,
    min_salary_req: u64,
    base_reward_rate: f64,
    multipliers: [f64; 4],
    lounge_access: &'static str,
    lounge_visits: LoungeAllowance,
    milestones: &'static [(u64, u64)],
    fuel_surcharge_waiver: bool,
    joining_fee: u64,
    welcome_benefit: u64,
}

impl CardEntry {
    fn build(self) -> CardRecord {
        const OVERRIDES: [SpendCategory; 4] = [Travel, Dining, Online, Utilities];

        CardRecord {
            card_name: self.card_name.to_string(),
            bank: self.bank.to_string(),
            card_type: self.card_type.to_string(),
            description: self.description.to_string(),
            annual_fee: self.annual_fee,
            fee_waiver_threshold: self.fee_waiver_threshold,
            min_salary_req: self.min_salary_req,
            base_reward_rate: self.base_reward_rate,
            category_multipliers: OVERRIDES.into_iter().zip(self.multipliers).collect(),
            lounge_access: self.lounge_access.to_string(),
            lounge_visits: self.lounge_visits,
            milestone_benefits: self.milestones.iter().copied().collect::<BTreeMap<_, _>>(),
            fuel_surcharge_waiver: self.fuel_surcharge_waiver,
            joining_fee: self.joining_fee,
            welcome_benefit: self.welcome_benefit,
        }
    }
}

// Multipliers are listed as [travel, dining, online, utilities].
pub(super) fn cards() -> Vec<CardRecord> {
    vec![
        CardEntry {
            card_name: "HDFC Infinia",
            bank: "HDFC",
            card_type: "Super Premium",
            description: "India's most premium card with unmatched rewards and luxury benefits",
            annual_fee: 12_500,
            fee_waiver_threshold: 1_000_000,
            min_salary_req: 300_000,
            base_reward_rate: 0.033,
            multipliers: [0.05, 0.033, 0.033, 0.033],
            lounge_access: "Unlimited domestic & international",
            lounge_visits: LoungeAllowance::Unlimited,
            milestones: &[(800_000, 10_000), (1_500_000, 25_000)],
            fuel_surcharge_waiver: true,
            joining_fee: 12_500,
            welcome_benefit: 12_500,
        },
        CardEntry {
            card_name: "HDFC Regalia Gold",
            bank: "HDFC",
            card_type: "Premium",
            description: "Great all-rounder for mid-income professionals",
            annual_fee: 2_500,
            fee_waiver_threshold: 300_000,
            min_salary_req: 60_000,
            base_reward_rate: 0.02,
            multipliers: [0.04, 0.02, 0.02, 0.02],
            lounge_access: "8 per year (domestic & international)",
            lounge_visits: LoungeAllowance::PerQuarter(2),
            milestones: &[(500_000, 5_000)],
            fuel_surcharge_waiver: true,
            joining_fee: 2_500,
            welcome_benefit: 2_500,
        },
        CardEntry {
            card_name: "HDFC Diners Black",
            bank: "HDFC",
            card_type: "Super Premium",
            description: "Best for dining and travel with 10x rewards on SmartBuy",
            annual_fee: 10_000,
            fee_waiver_threshold: 500_000,
            min_salary_req: 175_000,
            base_reward_rate: 0.033,
            multipliers: [0.10, 0.10, 0.033, 0.033],
            lounge_access: "Unlimited via Diners Club network",
            lounge_visits: LoungeAllowance::Unlimited,
            milestones: &[(400_000, 10_000), (800_000, 25_000)],
            fuel_surcharge_waiver: true,
            joining_fee: 10_000,
            welcome_benefit: 10_000,
        },
        CardEntry {
            card_name: "SBI Cashback Card",
            bank: "SBI",
            card_type: "Regular",
            description: "Best for online shoppers with 5% cashback on online purchases",
            annual_fee: 999,
            fee_waiver_threshold: 200_000,
            min_salary_req: 30_000,
            base_reward_rate: 0.01,
            multipliers: [0.01, 0.01, 0.05, 0.01],
            lounge_access: "4 per year (domestic)",
            lounge_visits: LoungeAllowance::PerQuarter(1),
            milestones: &[],
            fuel_surcharge_waiver: true,
            joining_fee: 999,
            welcome_benefit: 0,
        },
        CardEntry {
            card_name: "SBI SimplyCLICK",
            bank: "SBI",
            card_type: "Entry Level",
            description: "Perfect entry-level card for online shopping enthusiasts",
            annual_fee: 499,
            fee_waiver_threshold: 100_000,
            min_salary_req: 25_000,
            base_reward_rate: 0.0125,
            multipliers: [0.0125, 0.0125, 0.025, 0.0125],
            lounge_access: "None",
            lounge_visits: LoungeAllowance::NONE,
            milestones: &[(100_000, 2_000), (200_000, 2_000)],
            fuel_surcharge_waiver: true,
            joining_fee: 499,
            welcome_benefit: 500,
        },
        CardEntry {
            card_name: "Axis Atlas",
            bank: "Axis",
            card_type: "Travel Premium",
            description: "Best travel card for frequent flyers with EDGE miles",
            annual_fee: 5_000,
            fee_waiver_threshold: 1_500_000,
            min_salary_req: 125_000,
            base_reward_rate: 0.02,
            multipliers: [0.05, 0.02, 0.02, 0.02],
            lounge_access: "8 international + 8 domestic per year",
            lounge_visits: LoungeAllowance::PerQuarter(4),
            milestones: &[(750_000, 7_500), (1_500_000, 12_500)],
            fuel_surcharge_waiver: true,
            joining_fee: 5_000,
            welcome_benefit: 5_000,
        },
        CardEntry {
            card_name: "Axis Flipkart",
            bank: "Axis",
            card_type: "Lifetime Free",
            description: "Lifetime free card with excellent Flipkart rewards",
            annual_fee: 0,
            fee_waiver_threshold: 0,
            min_salary_req: 15_000,
            base_reward_rate: 0.015,
            multipliers: [0.015, 0.015, 0.05, 0.015],
            lounge_access: "4 per year (domestic)",
            lounge_visits: LoungeAllowance::PerQuarter(1),
            milestones: &[],
            fuel_surcharge_waiver: true,
            joining_fee: 0,
            welcome_benefit: 0,
        },
        CardEntry {
            card_name: "ICICI Amazon Pay",
            bank: "ICICI",
            card_type: "Co-branded",
            description: "Best for Amazon shoppers with 5% cashback for Prime members",
            annual_fee: 500,
            fee_waiver_threshold: 0,
            min_salary_req: 20_000,
            base_reward_rate: 0.01,
            multipliers: [0.01, 0.01, 0.05, 0.02],
            lounge_access: "None",
            lounge_visits: LoungeAllowance::NONE,
            milestones: &[],
            fuel_surcharge_waiver: true,
            joining_fee: 0,
            welcome_benefit: 500,
        },
        CardEntry {
            card_name: "ICICI Coral",
            bank: "ICICI",
            card_type: "Entry Premium",
            description: "Good starter card with dining benefits and lounge access",
            annual_fee: 500,
            fee_waiver_threshold: 150_000,
            min_salary_req: 30_000,
            base_reward_rate: 0.01,
            multipliers: [0.01, 0.02, 0.01, 0.01],
            lounge_access: "1 per quarter (domestic)",
            lounge_visits: LoungeAllowance::PerQuarter(1),
            milestones: &[],
            fuel_surcharge_waiver: true,
            joining_fee: 500,
            welcome_benefit: 500,
        },
        CardEntry {
            card_name: "Amex Platinum Travel",
            bank: "Amex",
            card_type: "Travel",
            description: "Best for travelers with Amex network and milestone rewards",
            annual_fee: 3_500,
            fee_waiver_threshold: 0,
            min_salary_req: 50_000,
            base_reward_rate: 0.01,
            multipliers: [0.05, 0.01, 0.01, 0.01],
            lounge_access: "4 per quarter (domestic)",
            lounge_visits: LoungeAllowance::PerQuarter(4),
            milestones: &[(190_000, 10_000), (400_000, 20_000)],
            fuel_surcharge_waiver: false,
            joining_fee: 3_500,
            welcome_benefit: 5_000,
        },
        CardEntry {
            card_name: "RBL Shoprite",
            bank: "RBL",
            card_type: "Lifetime Free",
            description: "Completely free card with decent rewards for everyday spends",
            annual_fee: 0,
            fee_waiver_threshold: 0,
            min_salary_req: 15_000,
            base_reward_rate: 0.0125,
            multipliers: [0.0125, 0.0125, 0.025, 0.0125],
            lounge_access: "None",
            lounge_visits: LoungeAllowance::NONE,
            milestones: &[],
            fuel_surcharge_waiver: true,
            joining_fee: 0,
            welcome_benefit: 0,
        },
        CardEntry {
            card_name: "IndusInd Tiger",
            bank: "IndusInd",
            card_type: "Lifetime Free",
            description: "Great lifetime free card with lounge access and weekend rewards",
            annual_fee: 0,
            fee_waiver_threshold: 0,
            min_salary_req: 20_000,
            base_reward_rate: 0.0175,
            multipliers: [0.0175, 0.0175, 0.035, 0.0175],
            lounge_access: "2 per quarter (domestic)",
            lounge_visits: LoungeAllowance::PerQuarter(2),
            milestones: &[(50_000, 500), (100_000, 1_000)],
            fuel_surcharge_waiver: true,
            joining_fee: 0,
            welcome_benefit: 0,
        },
    ]
    .into_iter()
    .map(CardEntry::build)
    .collect()
}
