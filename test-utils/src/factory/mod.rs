//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has a `*Factory` builder for customization and a `create_*` shorthand.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let club = factory::create_club(&db).await?;
//! let chant = factory::create_chant(&db, club.id).await?;
//!
//! let fan = factory::member::MemberFactory::new(&db)
//!     .name("Zenek")
//!     .club_id(club.id)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `club` - Club entities (active by default)
//! - `chant` - Chants owned by a club
//! - `member` - Fans, optionally affiliated with a club
//! - `club_relation` - Single directed relation rows
//! - `brawl` - Brawl records between two clubs
//! - `helpers` - ID generation and multi-entity helpers

pub mod brawl;
pub mod chant;
pub mod club;
pub mod club_relation;
pub mod helpers;
pub mod member;

pub use brawl::create_brawl;
pub use chant::create_chant;
pub use club::create_club;
pub use club_relation::create_relation;
pub use helpers::create_relation_pair;
pub use member::create_member;
