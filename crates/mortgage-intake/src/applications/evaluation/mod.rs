mod config;
mod rules;

pub use config::EvaluationConfig;

use super::domain::{ApplicationSnapshot, RequiredFieldSet};

/// Stateless evaluator applying the requirement rule table to a snapshot.
///
/// Pure mapping: identical snapshots always yield identical, order-stable
/// sets, and concurrent calls are fully independent. The evaluator never
/// fails on a well-typed snapshot; malformed input is the caller's problem
/// and must be rejected before a snapshot is built.
pub struct RequirementEvaluator {
    config: EvaluationConfig,
}

impl RequirementEvaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Walk the rule table once, collecting the tag of every rule whose
    /// predicate holds. Output order is table declaration order.
    pub fn evaluate(&self, snapshot: &ApplicationSnapshot) -> RequiredFieldSet {
        let tags = rules::RULE_TABLE
            .iter()
            .filter(|rule| (rule.predicate)(snapshot, &self.config))
            .map(|rule| rule.tag)
            .collect();

        RequiredFieldSet::from_tags(tags)
    }
}
