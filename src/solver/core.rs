use log::{debug, info};

use crate::expression::{Expression, Number};
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::table::SolutionTable;
use crate::solver::trees::generate_trees;
use crate::utils::{generate_groupings, unique_permutations, validate_digits, year_to_digits};

/// Exhaustive search over permutations, groupings and expression trees
#[derive(Debug, Clone, Default)]
pub struct YearSolver {
    config: SolverConfig,
}

#[derive(Debug, Default)]
struct SearchStats {
    groupings: usize,
    trees: usize,
    improvements: usize,
}

impl YearSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// # Errors
    ///
    /// Returns an error for year zero or an empty target range.
    pub fn solve_year(&self, year: u64) -> Result<SolutionTable, SolverError> {
        let digits = year_to_digits(year)?;
        self.solve_digits(&digits)
    }

    /// Find the cheapest expression for every target over `digits`,
    /// most significant digit first.
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` is empty, holds a value above 9, or the
    /// configured target range is empty.
    pub fn solve_digits(&self, digits: &[u8]) -> Result<SolutionTable, SolverError> {
        validate_digits(digits)?;
        self.config.validate()?;
        Ok(self.search(digits))
    }

    fn search(&self, digits: &[u8]) -> SolutionTable {
        let mut table = SolutionTable::new(&self.config);
        let mut stats = SearchStats::default();

        let orderings = unique_permutations(digits);
        info!(
            "Searching {} orderings of {:?} for targets {:?}",
            orderings.len(),
            digits,
            self.config.targets()
        );

        for ordering in &orderings {
            self.search_ordering(ordering, &mut table, &mut stats);
        }

        info!(
            "Solved {} targets: {} groupings, {} trees evaluated, {} improvements",
            table.len(),
            stats.groupings,
            stats.trees,
            stats.improvements
        );
        table
    }

    fn search_ordering(
        &self,
        digits: &[u8],
        table: &mut SolutionTable,
        stats: &mut SearchStats,
    ) {
        let groupings = generate_groupings(digits);
        debug!("Ordering {:?} has {} groupings", digits, groupings.len());

        for grouping in &groupings {
            stats.groupings += 1;
            self.search_grouping(grouping, table, stats);
        }
    }

    fn search_grouping(
        &self,
        grouping: &[Number],
        table: &mut SolutionTable,
        stats: &mut SearchStats,
    ) {
        let trees: Vec<Expression> = generate_trees(grouping);
        debug!("Grouping {:?} yields {} trees", grouping, trees.len());

        for tree in &trees {
            stats.trees += 1;
            let evaluation = tree.evaluate_with_limit(self.config.max_exponent);
            if table.offer(evaluation, tree) {
                stats.improvements += 1;
            }
        }
    }
}
