use sea_orm::entity::prelude::*;

/// Latest known occupancy per space. Exactly one row per space, replaced
/// on every accepted reading; `version` increments with each replacement.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "current_occupancy")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub space_id: i32,
    pub count: i32,
    pub percentage: f64,
    pub crowd_level: String,
    pub version: i32,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::space::Entity",
        from = "Column::SpaceId",
        to = "super::space::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Space,
}

impl Related<super::space::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Space.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
