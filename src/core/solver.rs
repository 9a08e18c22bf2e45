use crate::domain::model::{Combination, CostCheck, PuzzleParams, SearchStats, Solution};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Outcome of checking one `(roosters, hens)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Candidate {
    NoChicks,
    CostMismatch,
    Accepted(Combination),
}

/// Brute-force enumerator over every `(roosters, hens)` pair the budget allows.
#[derive(Debug, Clone)]
pub struct Solver {
    params: PuzzleParams,
}

impl Solver {
    pub fn new(params: PuzzleParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn classic() -> Self {
        Self {
            params: PuzzleParams::classic(),
        }
    }

    pub fn params(&self) -> &PuzzleParams {
        &self.params
    }

    /// Number of `(roosters, hens)` pairs the search visits.
    pub fn search_space(&self) -> u64 {
        (u64::from(self.params.max_roosters()) + 1)
            .saturating_mul(u64::from(self.params.max_hens()) + 1)
    }

    pub fn total_cost(&self, roosters: u32, hens: u32, chicks: u32) -> f64 {
        let p = &self.params;
        f64::from(roosters) * f64::from(p.rooster_price)
            + f64::from(hens) * f64::from(p.hen_price)
            + f64::from(chicks) / f64::from(p.chick_batch_size) * f64::from(p.chick_batch_price)
    }

    fn within_budget(&self, combination: &Combination) -> bool {
        let p = &self.params;
        match p.check {
            CostCheck::Tolerance => {
                let cost =
                    self.total_cost(combination.roosters, combination.hens, combination.chicks);
                (cost - f64::from(p.budget)).abs() < p.tolerance
            }
            CostCheck::Exact => {
                if combination.chicks % p.chick_batch_size != 0 {
                    return false;
                }
                let cost = u64::from(combination.roosters) * u64::from(p.rooster_price)
                    + u64::from(combination.hens) * u64::from(p.hen_price)
                    + u64::from(combination.chicks / p.chick_batch_size)
                        * u64::from(p.chick_batch_price);
                cost == u64::from(p.budget)
            }
        }
    }

    fn evaluate(&self, roosters: u32, hens: u32) -> Candidate {
        let chicks = i64::from(self.params.total_birds) - i64::from(roosters) - i64::from(hens);
        if chicks <= 0 {
            return Candidate::NoChicks;
        }

        // chicks <= total_birds, fits in u32
        let combination = Combination::new(roosters, hens, chicks as u32);
        if self.within_budget(&combination) {
            Candidate::Accepted(combination)
        } else {
            Candidate::CostMismatch
        }
    }

    fn pairs(&self) -> impl Iterator<Item = (u32, u32)> {
        let max_hens = self.params.max_hens();
        (0..=self.params.max_roosters())
            .flat_map(move |roosters| (0..=max_hens).map(move |hens| (roosters, hens)))
    }

    /// Accepted combinations, ascending by roosters then hens.
    pub fn combinations(&self) -> impl Iterator<Item = Combination> + '_ {
        self.pairs()
            .filter_map(move |(roosters, hens)| match self.evaluate(roosters, hens) {
                Candidate::Accepted(combination) => Some(combination),
                Candidate::NoChicks | Candidate::CostMismatch => None,
            })
    }

    pub fn solve(&self) -> Solution {
        let mut stats = SearchStats::default();
        let mut combinations = Vec::new();

        for (roosters, hens) in self.pairs() {
            stats.candidates_visited += 1;
            match self.evaluate(roosters, hens) {
                Candidate::NoChicks => stats.rejected_no_chicks += 1,
                Candidate::CostMismatch => stats.rejected_cost += 1,
                Candidate::Accepted(combination) => {
                    tracing::debug!("Accepted {}", combination);
                    stats.accepted += 1;
                    combinations.push(combination);
                }
            }
        }

        tracing::debug!(
            "Visited {} candidates: {} accepted, {} without chicks, {} off budget",
            stats.candidates_visited,
            stats.accepted,
            stats.rejected_no_chicks,
            stats.rejected_cost
        );

        Solution {
            combinations,
            stats,
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::classic()
    }
}

/// Solves the classic hundred chickens puzzle.
pub fn solve_classic() -> Vec<Combination> {
    Solver::classic().combinations().collect()
}
