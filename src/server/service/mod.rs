//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Rejecting self-relations, unknown clubs, malformed input
//! - **Orchestration**: Coordinating multiple repository calls per operation
//! - **Projection**: Assembling clubs with their chants, fans and relations
//! - **Auditing**: Recording every successful mutation in the audit log

pub mod audit_log;
pub mod brawl;
pub mod club;
pub mod member;
