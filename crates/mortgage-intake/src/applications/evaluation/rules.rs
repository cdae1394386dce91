use super::super::domain::{ApplicationSnapshot, RequirementTag};
use super::config::EvaluationConfig;

/// One row of the rule table: a tag and the predicate that attaches it.
///
/// Rules are independent and commutative. No predicate may read another
/// rule's outcome; adding a rule means adding a row here and nothing else.
pub(crate) struct RequirementRule {
    pub(crate) tag: RequirementTag,
    pub(crate) predicate: fn(&ApplicationSnapshot, &EvaluationConfig) -> bool,
}

/// Declaration order doubles as display order for the resulting set.
pub(crate) static RULE_TABLE: [RequirementRule; 5] = [
    RequirementRule {
        tag: RequirementTag::GovernmentAssistance,
        predicate: requires_government_assistance,
    },
    RequirementRule {
        tag: RequirementTag::CaliforniaDisclosure,
        predicate: requires_california_disclosure,
    },
    RequirementRule {
        tag: RequirementTag::NewYorkDisclosure,
        predicate: requires_new_york_disclosure,
    },
    RequirementRule {
        tag: RequirementTag::JumboLoanDisclosure,
        predicate: requires_jumbo_loan_disclosure,
    },
    RequirementRule {
        tag: RequirementTag::FirstTimeBuyerCertification,
        predicate: requires_first_time_buyer_certification,
    },
];

fn requires_government_assistance(snapshot: &ApplicationSnapshot, _: &EvaluationConfig) -> bool {
    snapshot.loan_type.is_government_program()
}

fn requires_california_disclosure(snapshot: &ApplicationSnapshot, _: &EvaluationConfig) -> bool {
    region_matches(&snapshot.region, "California", "CA")
}

fn requires_new_york_disclosure(snapshot: &ApplicationSnapshot, _: &EvaluationConfig) -> bool {
    region_matches(&snapshot.region, "New York", "NY")
}

fn requires_jumbo_loan_disclosure(
    snapshot: &ApplicationSnapshot,
    config: &EvaluationConfig,
) -> bool {
    snapshot.loan_amount_cents > config.conforming_loan_limit_cents
}

fn requires_first_time_buyer_certification(
    snapshot: &ApplicationSnapshot,
    _: &EvaluationConfig,
) -> bool {
    snapshot.first_time_buyer
}

/// Borrowers type either the full state name or the postal abbreviation, in
/// whatever casing; both forms must match.
fn region_matches(region: &str, full_name: &str, abbreviation: &str) -> bool {
    let trimmed = region.trim();
    trimmed.eq_ignore_ascii_case(full_name) || trimmed.eq_ignore_ascii_case(abbreviation)
}
