//! Kibol Alert Test Utils
//!
//! Shared testing utilities for the fan-club directory server. Provides a builder for
//! creating test contexts backed by in-memory SQLite databases and factories for
//! inserting clubs, chants, members, relations and brawls with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Entity factories with builder-style customization
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_clubs() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_club_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let club = factory::create_club(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
