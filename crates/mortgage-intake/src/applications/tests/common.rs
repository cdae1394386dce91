use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::applications::domain::{
    ApplicationId, ApplicationSnapshot, EmploymentStatus, LoanType, MortgageApplication,
    PropertyType,
};
use crate::applications::evaluation::RequirementEvaluator;
use crate::applications::repository::{ApplicationRecord, ApplicationRepository, RepositoryError};
use crate::applications::{application_router, EvaluationConfig, MortgageApplicationService};

/// $647,200 in cents; every test configures the limit explicitly.
pub(super) const CONFORMING_LOAN_LIMIT_CENTS: u64 = 64_720_000;

pub(super) fn evaluation_config() -> EvaluationConfig {
    EvaluationConfig {
        conforming_loan_limit_cents: CONFORMING_LOAN_LIMIT_CENTS,
    }
}

pub(super) fn evaluator() -> RequirementEvaluator {
    RequirementEvaluator::new(evaluation_config())
}

pub(super) fn application() -> MortgageApplication {
    MortgageApplication {
        loan_amount_cents: 32_500_000,
        interest_rate: 6.25,
        loan_term_years: 30,
        property_type: PropertyType::SingleFamily,
        property_value_cents: 41_000_000,
        borrower_name: "Jordan Avery".to_string(),
        income_cents: 780_000,
        credit_score: 712,
        employment_status: EmploymentStatus::Employed,
        down_payment_cents: 8_500_000,
        loan_type: LoanType::Conventional,
        first_time_buyer: false,
        co_borrower: None,
        region: "Texas".to_string(),
        government_assistance: None,
        completed: false,
    }
}

pub(super) fn snapshot(
    region: &str,
    loan_amount_cents: u64,
    first_time_buyer: bool,
) -> ApplicationSnapshot {
    ApplicationSnapshot {
        loan_amount_cents,
        loan_type: LoanType::Conventional,
        region: region.to_string(),
        first_time_buyer,
        government_assistance: None,
        property_value_cents: 41_000_000,
        down_payment_cents: 8_500_000,
        income_cents: 780_000,
        credit_score: Some(712),
        employment_status: Some(EmploymentStatus::Employed),
        co_borrower_present: false,
    }
}

pub(super) fn build_service() -> (
    MortgageApplicationService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = MortgageApplicationService::new(repository.clone(), evaluation_config());
    (service, repository)
}

pub(super) fn application_router_with_service(
    service: MortgageApplicationService<MemoryRepository>,
) -> axum::Router {
    application_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if !guard.contains_key(&record.id) {
            return Err(RepositoryError::NotFound);
        }
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }
}

pub(super) struct ConflictRepository;

impl ApplicationRepository for ConflictRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(None)
    }

    fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
