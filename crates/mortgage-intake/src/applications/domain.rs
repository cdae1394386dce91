use serde::{Deserialize, Serialize};

/// Identifier wrapper for persisted mortgage applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Loan programs accepted at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    Conventional,
    #[serde(rename = "FHA")]
    Fha,
    #[serde(rename = "VA")]
    Va,
    #[serde(rename = "USDA")]
    Usda,
}

impl LoanType {
    /// FHA, VA, and USDA loans are backed by federal assistance programs.
    pub const fn is_government_program(self) -> bool {
        matches!(self, LoanType::Fha | LoanType::Va | LoanType::Usda)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "Single-family")]
    SingleFamily,
    #[serde(rename = "Multi-family")]
    MultiFamily,
    Condo,
    Townhouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Employed,
    #[serde(rename = "Self-Employed")]
    SelfEmployed,
    Unemployed,
}

/// Co-borrower details captured when a second borrower joins the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoBorrowerInfo {
    pub name: String,
    pub income_cents: u64,
    pub credit_score: u16,
    pub employment_status: EmploymentStatus,
}

/// A mortgage application as submitted and persisted.
///
/// Monetary fields are integer cents so threshold comparisons stay exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageApplication {
    pub loan_amount_cents: u64,
    /// Annual interest rate in percent, 0 through 100.
    pub interest_rate: f64,
    pub loan_term_years: u8,
    pub property_type: PropertyType,
    pub property_value_cents: u64,
    pub borrower_name: String,
    pub income_cents: u64,
    pub credit_score: u16,
    pub employment_status: EmploymentStatus,
    pub down_payment_cents: u64,
    pub loan_type: LoanType,
    pub first_time_buyer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co_borrower: Option<CoBorrowerInfo>,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub government_assistance: Option<bool>,
    #[serde(default)]
    pub completed: bool,
}

impl MortgageApplication {
    /// Merge a partial update; only fields present in the patch overwrite.
    pub fn apply_update(&mut self, update: ApplicationUpdate) {
        if let Some(value) = update.loan_amount_cents {
            self.loan_amount_cents = value;
        }
        if let Some(value) = update.interest_rate {
            self.interest_rate = value;
        }
        if let Some(value) = update.loan_term_years {
            self.loan_term_years = value;
        }
        if let Some(value) = update.property_type {
            self.property_type = value;
        }
        if let Some(value) = update.property_value_cents {
            self.property_value_cents = value;
        }
        if let Some(value) = update.borrower_name {
            self.borrower_name = value;
        }
        if let Some(value) = update.income_cents {
            self.income_cents = value;
        }
        if let Some(value) = update.credit_score {
            self.credit_score = value;
        }
        if let Some(value) = update.employment_status {
            self.employment_status = value;
        }
        if let Some(value) = update.down_payment_cents {
            self.down_payment_cents = value;
        }
        if let Some(value) = update.loan_type {
            self.loan_type = value;
        }
        if let Some(value) = update.first_time_buyer {
            self.first_time_buyer = value;
        }
        if let Some(value) = update.co_borrower {
            self.co_borrower = Some(value);
        }
        if let Some(value) = update.region {
            self.region = value;
        }
        if let Some(value) = update.government_assistance {
            self.government_assistance = Some(value);
        }
        if let Some(value) = update.completed {
            self.completed = value;
        }
    }
}

/// Partial update payload; absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationUpdate {
    pub loan_amount_cents: Option<u64>,
    pub interest_rate: Option<f64>,
    pub loan_term_years: Option<u8>,
    pub property_type: Option<PropertyType>,
    pub property_value_cents: Option<u64>,
    pub borrower_name: Option<String>,
    pub income_cents: Option<u64>,
    pub credit_score: Option<u16>,
    pub employment_status: Option<EmploymentStatus>,
    pub down_payment_cents: Option<u64>,
    pub loan_type: Option<LoanType>,
    pub first_time_buyer: Option<bool>,
    pub co_borrower: Option<CoBorrowerInfo>,
    pub region: Option<String>,
    pub government_assistance: Option<bool>,
    pub completed: Option<bool>,
}

/// In-progress form state accepted by the speculative requirements check.
/// Every field is optional; normalization fills the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub loan_amount_cents: Option<u64>,
    pub loan_type: Option<LoanType>,
    pub region: Option<String>,
    pub first_time_buyer: Option<bool>,
    pub government_assistance: Option<bool>,
    pub property_value_cents: Option<u64>,
    pub down_payment_cents: Option<u64>,
    pub income_cents: Option<u64>,
    pub credit_score: Option<u16>,
    pub employment_status: Option<EmploymentStatus>,
    pub co_borrower: Option<CoBorrowerInfo>,
}

/// The read-only view of an application consumed by the requirement engine.
///
/// Fields beyond what the current rules consume are carried so new rules can
/// be added without changing the evaluator's call contract.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationSnapshot {
    pub loan_amount_cents: u64,
    pub loan_type: LoanType,
    pub region: String,
    pub first_time_buyer: bool,
    pub government_assistance: Option<bool>,
    pub property_value_cents: u64,
    pub down_payment_cents: u64,
    pub income_cents: u64,
    pub credit_score: Option<u16>,
    pub employment_status: Option<EmploymentStatus>,
    pub co_borrower_present: bool,
}

impl ApplicationSnapshot {
    pub fn from_application(application: &MortgageApplication) -> Self {
        Self {
            loan_amount_cents: application.loan_amount_cents,
            loan_type: application.loan_type,
            region: application.region.clone(),
            first_time_buyer: application.first_time_buyer,
            government_assistance: application.government_assistance,
            property_value_cents: application.property_value_cents,
            down_payment_cents: application.down_payment_cents,
            income_cents: application.income_cents,
            credit_score: Some(application.credit_score),
            employment_status: Some(application.employment_status),
            co_borrower_present: application.co_borrower.is_some(),
        }
    }

    /// Absent means the borrower has not answered yet; rules read it as false.
    pub fn government_assistance(&self) -> bool {
        self.government_assistance.unwrap_or(false)
    }
}

/// Stable identifier naming one additional disclosure or certification
/// obligation. The serialized names are a public contract; renaming one is a
/// breaking change for every consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequirementTag {
    GovernmentAssistance,
    CaliforniaDisclosure,
    NewYorkDisclosure,
    JumboLoanDisclosure,
    FirstTimeBuyerCertification,
}

impl RequirementTag {
    pub const fn identifier(self) -> &'static str {
        match self {
            RequirementTag::GovernmentAssistance => "governmentAssistance",
            RequirementTag::CaliforniaDisclosure => "californiaDisclosure",
            RequirementTag::NewYorkDisclosure => "newYorkDisclosure",
            RequirementTag::JumboLoanDisclosure => "jumboLoanDisclosure",
            RequirementTag::FirstTimeBuyerCertification => "firstTimeBuyerCertification",
        }
    }
}

/// Ordered, duplicate-free set of requirement tags. Order follows rule
/// declaration order so UI rendering stays stable across evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredFieldSet(Vec<RequirementTag>);

impl RequiredFieldSet {
    pub(crate) fn from_tags(tags: Vec<RequirementTag>) -> Self {
        debug_assert!(
            tags.iter()
                .enumerate()
                .all(|(index, tag)| !tags[..index].contains(tag)),
            "requirement tags must be unique"
        );
        Self(tags)
    }

    pub fn tags(&self) -> &[RequirementTag] {
        &self.0
    }

    pub fn identifiers(&self) -> Vec<&'static str> {
        self.0.iter().map(|tag| tag.identifier()).collect()
    }

    pub fn contains(&self, tag: RequirementTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
