mod get_incoming;

use super::*;
use crate::model::club::RelationKind;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::Club)
        .with_table(entity::prelude::ClubRelation)
        .build()
        .await
        .unwrap()
}

fn key(first_club_id: i32, second_club_id: i32, kind: RelationKind) -> ClubRelationKey {
    ClubRelationKey {
        first_club_id,
        second_club_id,
        kind,
    }
}
