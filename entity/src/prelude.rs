pub use super::audit_log::Entity as AuditLog;
pub use super::brawl::Entity as Brawl;
pub use super::chant::Entity as Chant;
pub use super::club::Entity as Club;
pub use super::club_relation::Entity as ClubRelation;
pub use super::member::Entity as Member;
