use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(pk_auto(Club::Id))
                    .col(string(Club::Name))
                    .col(string_null(Club::League))
                    .col(string_null(Club::LogoUri))
                    .col(string_null(Club::City))
                    .col(double_null(Club::Longitude))
                    .col(double_null(Club::Latitude))
                    .col(boolean(Club::IsDeleted).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_club_name")
                    .table(Club::Table)
                    .col(Club::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Club::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Club {
    Table,
    Id,
    Name,
    League,
    LogoUri,
    City,
    Longitude,
    Latitude,
    IsDeleted,
}
