
use super::*;
use test_utils::{builder::TestBuilder, factory, factory::club::ClubFactory};

async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new().with_club_tables().build().await.unwrap()
}
