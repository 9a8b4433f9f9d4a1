use sea_orm_migration::{prelude::*, schema::*};

use super::m20261016_000001_create_club_table::Club;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Brawl::Table)
                    .if_not_exists()
                    .col(pk_auto(Brawl::Id))
                    .col(integer(Brawl::FirstClubId))
                    .col(integer(Brawl::SecondClubId))
                    .col(date_time(Brawl::Date))
                    .col(double(Brawl::Longitude))
                    .col(double(Brawl::Latitude))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_brawl_first_club_id")
                            .from(Brawl::Table, Brawl::FirstClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_brawl_second_club_id")
                            .from(Brawl::Table, Brawl::SecondClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Brawl::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Brawl {
    Table,
    Id,
    FirstClubId,
    SecondClubId,
    Date,
    Longitude,
    Latitude,
}
