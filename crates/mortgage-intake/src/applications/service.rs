use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{
    ApplicationDraft, ApplicationId, ApplicationSnapshot, ApplicationUpdate, MortgageApplication,
    RequiredFieldSet,
};
use super::evaluation::{EvaluationConfig, RequirementEvaluator};
use super::repository::{ApplicationRecord, ApplicationRepository, RepositoryError};
use super::validation::{self, ValidationError};

/// Service composing intake validation, the requirement engine, and the
/// repository. The authoritative persisted set and the speculative draft
/// check both go through the same evaluator instance, so the two can never
/// disagree about which disclosures an application owes.
pub struct MortgageApplicationService<R> {
    repository: Arc<R>,
    evaluator: Arc<RequirementEvaluator>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("mtg-{id:06}"))
}

impl<R> MortgageApplicationService<R>
where
    R: ApplicationRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: EvaluationConfig) -> Self {
        Self {
            repository,
            evaluator: Arc::new(RequirementEvaluator::new(config)),
        }
    }

    /// Validate and persist a new application together with its computed
    /// requirement set.
    pub fn create(
        &self,
        application: MortgageApplication,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        validation::validate_application(&application)?;

        let snapshot = ApplicationSnapshot::from_application(&application);
        let required_fields = self.evaluator.evaluate(&snapshot);

        let now = Utc::now();
        let record = ApplicationRecord {
            id: next_application_id(),
            application,
            created_at: now,
            updated_at: now,
            required_fields,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    pub fn get(&self, id: &ApplicationId) -> Result<ApplicationRecord, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list(&self) -> Result<Vec<ApplicationRecord>, ApplicationServiceError> {
        Ok(self.repository.list()?)
    }

    /// Merge a partial update, re-validate the result, and recompute the
    /// stored requirement set.
    pub fn update(
        &self,
        id: &ApplicationId,
        update: ApplicationUpdate,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let mut record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        record.application.apply_update(update);
        validation::validate_application(&record.application)?;

        let snapshot = ApplicationSnapshot::from_application(&record.application);
        record.required_fields = self.evaluator.evaluate(&snapshot);
        record.updated_at = Utc::now();

        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Speculative evaluation for in-progress form state; never persists.
    pub fn requirements(
        &self,
        draft: &ApplicationDraft,
    ) -> Result<RequiredFieldSet, ApplicationServiceError> {
        validation::validate_draft(draft)?;
        let snapshot = validation::snapshot_from_draft(draft);
        Ok(self.evaluator.evaluate(&snapshot))
    }

    pub fn evaluator(&self) -> &RequirementEvaluator {
        &self.evaluator
    }
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
