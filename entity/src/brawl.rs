use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "brawl")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_club_id: i32,
    pub second_club_id: i32,
    pub date: DateTime,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::club::Entity",
        from = "Column::FirstClubId",
        to = "super::club::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    FirstClub,
    #[sea_orm(
        belongs_to = "super::club::Entity",
        from = "Column::SecondClubId",
        to = "super::club::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    SecondClub,
}

impl ActiveModelBehavior for ActiveModel {}
