use std::collections::BTreeMap;
use std::fmt;

use log::trace;

use crate::expression::{Evaluation, Expression, Value};
use crate::solver::config::SolverConfig;

/// Best expression found for one target
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub value: Value,
    pub cost: u32,
    pub expression: Expression,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Best solution per target, kept for one search run
#[derive(Debug, Clone)]
pub struct SolutionTable {
    entries: BTreeMap<i64, Solution>,
    min_target: i64,
    max_target: i64,
    epsilon: f64,
}

impl SolutionTable {
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            entries: BTreeMap::new(),
            min_target: config.min_target,
            max_target: config.max_target,
            epsilon: config.epsilon,
        }
    }

    /// Record `expression` if it reaches a target more cheaply than the
    /// current entry. Equal cost keeps the entry already there.
    ///
    /// Returns whether the table changed.
    pub fn offer(&mut self, evaluation: Evaluation, expression: &Expression) -> bool {
        if evaluation.is_disqualified() {
            return false;
        }

        let Some(target) = evaluation
            .value
            .as_integer(self.epsilon)
            .and_then(|k| i64::try_from(k).ok())
        else {
            return false;
        };

        if !(self.min_target..=self.max_target).contains(&target) {
            return false;
        }

        if let Some(existing) = self.entries.get(&target)
            && existing.cost <= evaluation.cost
        {
            return false;
        }

        trace!(
            "Target {} improved to '{}' ({} ops)",
            target, expression, evaluation.cost
        );
        self.entries.insert(
            target,
            Solution {
                value: evaluation.value,
                cost: evaluation.cost,
                expression: expression.clone(),
            },
        );
        true
    }

    pub fn get(&self, target: i64) -> Option<&Solution> {
        self.entries.get(&target)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Solved targets in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &Solution)> {
        self.entries.iter().map(|(&target, solution)| (target, solution))
    }

    /// Targets in the configured range with no solution
    pub fn missing_targets(&self) -> Vec<i64> {
        (self.min_target..=self.max_target)
            .filter(|target| !self.entries.contains_key(target))
            .collect()
    }
}

impl Default for SolutionTable {
    fn default() -> Self {
        Self::new(&SolverConfig::default())
    }
}
