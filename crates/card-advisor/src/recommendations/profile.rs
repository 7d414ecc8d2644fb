use serde::{Deserialize, Serialize};

/// Highest monthly salary accepted from callers.
pub const MAX_MONTHLY_SALARY: u64 = 10_000_000;

/// Spend buckets tracked for every profile.
///
/// Declaration order is the iteration order used when rewards are computed and when the
/// explanation picks its best category, so keep `ALL` in sync with the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendCategory {
    General,
    Travel,
    Dining,
    Online,
    Utilities,
}

impl SpendCategory {
    pub const ALL: [SpendCategory; 5] = [
        SpendCategory::General,
        SpendCategory::Travel,
        SpendCategory::Dining,
        SpendCategory::Online,
        SpendCategory::Utilities,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SpendCategory::General => "general",
            SpendCategory::Travel => "travel",
            SpendCategory::Dining => "dining",
            SpendCategory::Online => "online",
            SpendCategory::Utilities => "utilities",
        }
    }

    /// Upper bound on the monthly amount accepted for the category.
    pub const fn monthly_cap(self) -> u64 {
        match self {
            SpendCategory::General | SpendCategory::Travel | SpendCategory::Online => 1_000_000,
            SpendCategory::Dining => 500_000,
            SpendCategory::Utilities => 200_000,
        }
    }
}

/// Monthly spend per category, in whole rupees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonthlySpends {
    pub general: u64,
    pub travel: u64,
    pub dining: u64,
    pub online: u64,
    pub utilities: u64,
}

impl MonthlySpends {
    pub const fn get(&self, category: SpendCategory) -> u64 {
        match category {
            SpendCategory::General => self.general,
            SpendCategory::Travel => self.travel,
            SpendCategory::Dining => self.dining,
            SpendCategory::Online => self.online,
            SpendCategory::Utilities => self.utilities,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpendCategory, u64)> + '_ {
        SpendCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    pub fn total(&self) -> u64 {
        self.iter()
            .fold(0, |total: u64, (_, amount)| total.saturating_add(amount))
    }

    /// Same buckets multiplied out to a full year, saturating at `u64::MAX`.
    pub fn annualized(&self) -> MonthlySpends {
        MonthlySpends {
            general: self.general.saturating_mul(12),
            travel: self.travel.saturating_mul(12),
            dining: self.dining.saturating_mul(12),
            online: self.online.saturating_mul(12),
            utilities: self.utilities.saturating_mul(12),
        }
    }
}

/// Request-scoped description of the user being advised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub monthly_salary: u64,
    pub monthly_spends: MonthlySpends,
    #[serde(default)]
    pub needs_lounge: bool,
    #[serde(default)]
    pub lifetime_free_only: bool,
    #[serde(default)]
    pub is_first_year: bool,
}

impl UserProfile {
    /// Reject out-of-range input instead of clamping it.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.monthly_salary == 0 {
            return Err(ProfileError::ZeroSalary);
        }
        if self.monthly_salary > MAX_MONTHLY_SALARY {
            return Err(ProfileError::SalaryAboveLimit {
                salary: self.monthly_salary,
                max: MAX_MONTHLY_SALARY,
            });
        }

        for (category, amount) in self.monthly_spends.iter() {
            if amount > category.monthly_cap() {
                return Err(ProfileError::SpendAboveLimit {
                    category,
                    amount,
                    max: category.monthly_cap(),
                });
            }
        }

        Ok(())
    }
}

/// Caller errors raised while validating a profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("monthly salary must be greater than zero")]
    ZeroSalary,
    #[error("monthly salary {salary} exceeds the supported maximum of {max}")]
    SalaryAboveLimit { salary: u64, max: u64 },
    #[error("monthly {} spend {amount} exceeds the supported maximum of {max}", .category.label())]
    SpendAboveLimit {
        category: SpendCategory,
        amount: u64,
        max: u64,
    },
}
