//! SeaORM entity models for the fan-club directory.
//!
//! One module per table. Entities are only used inside the data layer of the
//! server; repositories convert them into domain models before returning.

pub mod prelude;

pub mod audit_log;
pub mod brawl;
pub mod chant;
pub mod club;
pub mod club_relation;
pub mod member;
