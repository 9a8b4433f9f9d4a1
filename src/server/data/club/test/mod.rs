mod soft_delete;

use super::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::club::ClubFactory};
