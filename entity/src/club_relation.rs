use sea_orm::entity::prelude::*;

/// Directed edge between two clubs.
///
/// Identified by the full `(first_club_id, second_club_id, kind)` triple. Rows
/// are written in mirrored pairs but each direction is stored and removed on
/// its own.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club_relation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub first_club_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub second_club_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub kind: String,
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
        on_delete = "Cascade"
    )]
    SecondClub,
}

impl ActiveModelBehavior for ActiveModel {}
