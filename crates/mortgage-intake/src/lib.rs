//! Mortgage application intake and disclosure requirement evaluation.
//!
//! The load-bearing piece is [`applications::evaluation::RequirementEvaluator`],
//! a pure rule-table engine mapping an application snapshot to the ordered set
//! of additional disclosures the application must satisfy before submission.
//! The surrounding modules supply intake validation, the persistence contract,
//! the application service, and the HTTP router that exposes them.

pub mod applications;
pub mod config;
pub mod error;
pub mod telemetry;
