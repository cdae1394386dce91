//! Caller-side validation and normalization.
//!
//! Malformed input is rejected here, before a snapshot ever reaches the
//! requirement engine; the engine itself never fails on a well-typed
//! snapshot.

use super::domain::{
    ApplicationDraft, ApplicationSnapshot, CoBorrowerInfo, LoanType, MortgageApplication,
};

pub const MIN_CREDIT_SCORE: u16 = 300;
pub const MAX_CREDIT_SCORE: u16 = 850;

const SUPPORTED_LOAN_TERMS_YEARS: [u8; 4] = [10, 15, 20, 30];

/// Rejection raised when an inbound payload fails a field constraint.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be positive")]
    NonPositiveAmount { field: &'static str },
    #[error("interestRate must be between 0 and 100, found {found}")]
    InterestRateOutOfRange { found: f64 },
    #[error("{field} must be between 300 and 850, found {found}")]
    CreditScoreOutOfRange { field: &'static str, found: u16 },
    #[error("loanTermYears must be one of 10, 15, 20, or 30, found {found}")]
    UnsupportedLoanTerm { found: u8 },
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },
}

/// Check every constraint a complete application must satisfy before it is
/// persisted or evaluated.
pub fn validate_application(application: &MortgageApplication) -> Result<(), ValidationError> {
    require_positive(application.loan_amount_cents, "loanAmountCents")?;
    require_positive(application.property_value_cents, "propertyValueCents")?;
    require_positive(application.income_cents, "incomeCents")?;
    require_positive(application.down_payment_cents, "downPaymentCents")?;

    if !application.interest_rate.is_finite()
        || application.interest_rate < 0.0
        || application.interest_rate > 100.0
    {
        return Err(ValidationError::InterestRateOutOfRange {
            found: application.interest_rate,
        });
    }

    require_credit_score(application.credit_score, "creditScore")?;

    if !SUPPORTED_LOAN_TERMS_YEARS.contains(&application.loan_term_years) {
        return Err(ValidationError::UnsupportedLoanTerm {
            found: application.loan_term_years,
        });
    }

    require_non_blank(&application.borrower_name, "borrowerName")?;
    require_non_blank(&application.region, "region")?;

    if let Some(co_borrower) = &application.co_borrower {
        validate_co_borrower(co_borrower)?;
    }

    Ok(())
}

/// Validate only the fields the draft actually carries; absent fields are
/// legitimate while the borrower is still typing.
pub fn validate_draft(draft: &ApplicationDraft) -> Result<(), ValidationError> {
    if let Some(score) = draft.credit_score {
        require_credit_score(score, "creditScore")?;
    }
    if let Some(co_borrower) = &draft.co_borrower {
        validate_co_borrower(co_borrower)?;
    }
    Ok(())
}

/// Normalize an in-progress draft to a snapshot: absent numbers become 0,
/// an absent region matches no state, an absent loan type behaves like a
/// conventional loan, and absent booleans read as false.
pub fn snapshot_from_draft(draft: &ApplicationDraft) -> ApplicationSnapshot {
    ApplicationSnapshot {
        loan_amount_cents: draft.loan_amount_cents.unwrap_or(0),
        loan_type: draft.loan_type.unwrap_or(LoanType::Conventional),
        region: draft.region.clone().unwrap_or_default(),
        first_time_buyer: draft.first_time_buyer.unwrap_or(false),
        government_assistance: draft.government_assistance,
        property_value_cents: draft.property_value_cents.unwrap_or(0),
        down_payment_cents: draft.down_payment_cents.unwrap_or(0),
        income_cents: draft.income_cents.unwrap_or(0),
        credit_score: draft.credit_score,
        employment_status: draft.employment_status,
        co_borrower_present: draft.co_borrower.is_some(),
    }
}

fn validate_co_borrower(co_borrower: &CoBorrowerInfo) -> Result<(), ValidationError> {
    require_non_blank(&co_borrower.name, "coBorrower.name")?;
    require_positive(co_borrower.income_cents, "coBorrower.incomeCents")?;
    require_credit_score(co_borrower.credit_score, "coBorrower.creditScore")
}

fn require_positive(value: u64, field: &'static str) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::NonPositiveAmount { field });
    }
    Ok(())
}

fn require_credit_score(found: u16, field: &'static str) -> Result<(), ValidationError> {
    if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&found) {
        return Err(ValidationError::CreditScoreOutOfRange { field, found });
    }
    Ok(())
}

fn require_non_blank(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField { field });
    }
    Ok(())
}
