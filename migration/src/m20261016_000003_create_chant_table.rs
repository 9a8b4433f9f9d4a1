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
                    .table(Chant::Table)
                    .if_not_exists()
                    .col(pk_auto(Chant::Id))
                    .col(integer(Chant::ClubId))
                    .col(text(Chant::Lyrics))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chant_club_id")
                            .from(Chant::Table, Chant::ClubId)
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
            .drop_table(Table::drop().table(Chant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chant {
    Table,
    Id,
    ClubId,
    Lyrics,
}
