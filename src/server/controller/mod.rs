//! HTTP request handlers.
//!
//! Each handler converts the request DTO into service parameters, calls a service
//! and wraps the result in the `{ success, data }` envelope. Failures are returned
//! as `AppError` and mapped to status codes by its `IntoResponse` implementation.

pub mod brawl;
pub mod club;
pub mod extract;
pub mod member;
pub mod param;

#[cfg(test)]
mod test;
