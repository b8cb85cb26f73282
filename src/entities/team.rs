use sea_orm::entity::prelude::*;
use sea_orm::{IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

use super::{SoftDelete, StoreEntity};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub division_id: i32,
    /// Optional business key carried from upstream data feeds.
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub code: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub location: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub abbreviation: Option<String>,
    pub win: i32,
    pub loss: i32,
    pub tie: i32,
    pub points_for: i32,
    pub points_against: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub stadium: Option<String>,
    pub capacity: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(200))", nullable)]
    pub address: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub city: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub state: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub zip: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeUtc>,
    #[sea_orm(column_type = "String(StringLen::N(200))", nullable)]
    pub deleted_reason: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub deleted_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::division::Entity",
        from = "Column::DivisionId",
        to = "super::division::Column::Id",
        on_delete = "Cascade"
    )]
    Division,
    #[sea_orm(has_many = "super::player::Entity")]
    Players,
}

impl Related<super::division::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Division.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl StoreEntity for Entity {
    type ActiveModel = ActiveModel;
    const NAME: &'static str = "team";

    fn soft_delete() -> Option<SoftDelete<Self>> {
        Some(SoftDelete {
            flag: Column::IsDeleted,
            mark: |model, at| {
                let mut active = model.into_active_model();
                active.is_deleted = Set(true);
                active.deleted_at = Set(Some(at));
                active
            },
        })
    }
}
