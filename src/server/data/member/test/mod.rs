
use super::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::member::MemberFactory};

async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::Club)
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap()
}
