mod create;
mod delete;

use super::*;
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::brawl::BrawlFactory};

async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::Club)
        .with_table(entity::prelude::Brawl)
        .build()
        .await
        .unwrap()
}

fn date(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}
