pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_club_table;
mod m20261016_000002_create_member_table;
mod m20261016_000003_create_chant_table;
mod m20261016_000004_create_club_relation_table;
mod m20261016_000005_create_brawl_table;
mod m20261016_000006_create_audit_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_club_table::Migration),
            Box::new(m20261016_000002_create_member_table::Migration),
            Box::new(m20261016_000003_create_chant_table::Migration),
            Box::new(m20261016_000004_create_club_relation_table::Migration),
            Box::new(m20261016_000005_create_brawl_table::Migration),
            Box::new(m20261016_000006_create_audit_log_table::Migration),
        ]
    }
}
