mod delete_club;
mod get_clubs;

use super::*;
use crate::model::club::RelationKind;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::club::ClubFactory};

async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new().with_club_tables().build().await.unwrap()
}

fn key(first_club_id: i32, second_club_id: i32, kind: RelationKind) -> ClubRelationKey {
    ClubRelationKey {
        first_club_id,
        second_club_id,
        kind,
    }
}

/// Messages written to the audit log, oldest first.
async fn audit_messages(db: &DatabaseConnection) -> Vec<String> {
    entity::prelude::AuditLog::find()
        .all(db)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.message)
        .collect()
}
