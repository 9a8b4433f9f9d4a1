
use super::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::chant::ChantFactory};

async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::Club)
        .with_table(entity::prelude::Chant)
        .build()
        .await
        .unwrap()
}
