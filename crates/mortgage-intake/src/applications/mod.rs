//! Mortgage application intake, disclosure requirement evaluation, and the
//! HTTP surface that exposes them.

pub mod domain;
pub mod evaluation;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationDraft, ApplicationId, ApplicationSnapshot, ApplicationUpdate, CoBorrowerInfo,
    EmploymentStatus, LoanType, MortgageApplication, PropertyType, RequiredFieldSet,
    RequirementTag,
};
pub use evaluation::{EvaluationConfig, RequirementEvaluator};
pub use repository::{ApplicationRecord, ApplicationRepository, RepositoryError};
pub use router::{application_router, RequiredFieldsResponse};
pub use service::{ApplicationServiceError, MortgageApplicationService};
pub use validation::ValidationError;
