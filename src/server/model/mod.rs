//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed into DTOs at the controller boundary. Parameter types carry the
//! validated input of each service operation.

pub mod audit_log;
pub mod brawl;
pub mod club;
pub mod member;
