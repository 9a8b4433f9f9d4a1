//! Wire-level DTOs shared by every HTTP endpoint.
//!
//! These types define the JSON request and response bodies. Domain models in
//! `server::model` convert into and out of them at the controller boundary.

pub mod api;
pub mod brawl;
pub mod club;
pub mod member;
