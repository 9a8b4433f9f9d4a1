mod add_brawl;

use super::*;
use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::club::ClubFactory};

use crate::{model::brawl::CreateBrawlDto, server::util::parse::parse_brawl_date};

async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new().with_club_tables().build().await.unwrap()
}

fn add_params(first: &str, second: &str, date: &str) -> Result<AddBrawlParams, AppError> {
    AddBrawlParams::from_dto(CreateBrawlDto {
        first_club_name: first.to_string(),
        second_club_name: second.to_string(),
        date: date.to_string(),
        longitude: 10.0,
        latitude: 20.0,
    })
}
