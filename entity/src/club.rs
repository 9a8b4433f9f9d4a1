use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "club")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub league: Option<String>,
    pub logo_uri: Option<String>,
    pub city: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::chant::Entity")]
    Chant,
    #[sea_orm(has_many = "super::member::Entity")]
    Member,
}

impl Related<super::chant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chant.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
