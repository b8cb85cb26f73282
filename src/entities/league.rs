use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::StoreEntity;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leagues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Optional business key carried from upstream data feeds.
    pub external_id: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub abbreviation: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::conference::Entity")]
    Conferences,
}

impl Related<super::conference::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conferences.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl StoreEntity for Entity {
    type ActiveModel = ActiveModel;
    const NAME: &'static str = "league";
}
