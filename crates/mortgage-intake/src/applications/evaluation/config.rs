use serde::{Deserialize, Serialize};

/// Rule parameters injected into the evaluator at construction time.
///
/// The conforming loan limit is never a literal inside a predicate;
/// deployments change it through configuration alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub conforming_loan_limit_cents: u64,
}
