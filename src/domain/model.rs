use crate::utils::error::{PuzzleError, Result};
use crate::utils::validation::{validate_positive_number, validate_tolerance, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One admissible purchase: how many roosters, hens and chicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Combination {
    pub roosters: u32,
    pub hens: u32,
    pub chicks: u32,
}

impl Combination {
    pub fn new(roosters: u32, hens: u32, chicks: u32) -> Self {
        Self {
            roosters,
            hens,
            chicks,
        }
    }

    pub fn total_birds(&self) -> u32 {
        self.roosters + self.hens + self.chicks
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} roosters, {} hens, {} chicks",
            self.roosters, self.hens, self.chicks
        )
    }
}

/// How a candidate's total cost is compared against the budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCheck {
    /// `abs(total_cost - budget) < tolerance` on floating-point cost.
    #[default]
    Tolerance,
    /// Chicks must fill whole batches and the integer cost must hit the budget.
    Exact,
}

impl CostCheck {
    pub fn as_str(&self) -> &'static str {
        match self {
            CostCheck::Tolerance => "tolerance",
            CostCheck::Exact => "exact",
        }
    }
}

impl FromStr for CostCheck {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tolerance" => Ok(CostCheck::Tolerance),
            "exact" => Ok(CostCheck::Exact),
            other => Err(PuzzleError::InvalidConfigValueError {
                field: "puzzle.check".to_string(),
                value: other.to_string(),
                reason: "Unsupported check. Valid checks: tolerance, exact".to_string(),
            }),
        }
    }
}

/// Prices, quantities and the cost check that define one puzzle instance.
///
/// `Default` is the classic puzzle: roosters cost 5, hens cost 3, three
/// chicks cost 1, and exactly 100 birds must be bought with 100 coins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleParams {
    pub rooster_price: u32,
    pub hen_price: u32,
    pub chick_batch_size: u32,
    pub chick_batch_price: u32,
    pub budget: u32,
    pub total_birds: u32,
    pub tolerance: f64,
    pub check: CostCheck,
}

impl PuzzleParams {
    pub const CLASSIC_TOLERANCE: f64 = 1e-4;
    /// Largest number of `(roosters, hens)` pairs a puzzle may ask the solver to visit.
    pub const MAX_SEARCH_SPACE: u64 = 100_000_000;

    pub fn classic() -> Self {
        Self {
            rooster_price: 5,
            hen_price: 3,
            chick_batch_size: 3,
            chick_batch_price: 1,
            budget: 100,
            total_birds: 100,
            tolerance: Self::CLASSIC_TOLERANCE,
            check: CostCheck::Tolerance,
        }
    }

    pub fn max_roosters(&self) -> u32 {
        self.budget / self.rooster_price
    }

    pub fn max_hens(&self) -> u32 {
        self.budget / self.hen_price
    }

    /// Number of `(roosters, hens)` pairs, `None` if it does not fit in a u64.
    pub fn checked_search_space(&self) -> Option<u64> {
        (u64::from(self.max_roosters()) + 1).checked_mul(u64::from(self.max_hens()) + 1)
    }
}

impl Default for PuzzleParams {
    fn default() -> Self {
        Self::classic()
    }
}

impl Validate for PuzzleParams {
    fn validate(&self) -> Result<()> {
        validate_positive_number("puzzle.rooster_price", self.rooster_price, 1)?;
        validate_positive_number("puzzle.hen_price", self.hen_price, 1)?;
        validate_positive_number("puzzle.chick_batch_size", self.chick_batch_size, 1)?;
        validate_positive_number("puzzle.chick_batch_price", self.chick_batch_price, 1)?;
        validate_positive_number("puzzle.total_birds", self.total_birds, 1)?;
        validate_tolerance("puzzle.tolerance", self.tolerance)?;

        match self.checked_search_space() {
            Some(size) if size <= Self::MAX_SEARCH_SPACE => Ok(()),
            _ => Err(PuzzleError::InvalidConfigValueError {
                field: "puzzle.budget".to_string(),
                value: self.budget.to_string(),
                reason: format!(
                    "Budget allows more than {} rooster/hen pairs at these prices",
                    Self::MAX_SEARCH_SPACE
                ),
            }),
        }
    }
}

/// Counters collected while walking the search space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub candidates_visited: u64,
    pub rejected_no_chicks: u64,
    pub rejected_cost: u64,
    pub accepted: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub combinations: Vec<Combination>,
    pub stats: SearchStats,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}
