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
                    .table(ClubRelation::Table)
                    .if_not_exists()
                    .col(integer(ClubRelation::FirstClubId))
                    .col(integer(ClubRelation::SecondClubId))
                    .col(string(ClubRelation::Kind))
                    .primary_key(
                        Index::create()
                            .col(ClubRelation::FirstClubId)
                            .col(ClubRelation::SecondClubId)
                            .col(ClubRelation::Kind),
                    )
                    // Hard-deleting a club that still owns outgoing relations must fail.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_relation_first_club_id")
                            .from(ClubRelation::Table, ClubRelation::FirstClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_relation_second_club_id")
                            .from(ClubRelation::Table, ClubRelation::SecondClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClubRelation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClubRelation {
    Table,
    FirstClubId,
    SecondClubId,
    Kind,
}
