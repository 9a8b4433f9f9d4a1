//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! table of the club directory. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. All database queries,
//! inserts, updates, and deletes are performed through these repositories.

pub mod audit_log;
pub mod brawl;
pub mod chant;
pub mod club;
pub mod club_relation;
pub mod member;
