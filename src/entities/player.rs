use sea_orm::entity::prelude::*;
use sea_orm::{IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

use super::{SoftDelete, StoreEntity};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// May be unset before the player is assigned to a roster.
    pub team_id: Option<i32>,
    pub number: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub position: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub age: Option<i32>,
    pub birth_date: Option<Date>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub experience: Option<String>,
    pub draft_year: Option<i32>,
    pub draft_round: Option<i32>,
    pub draft_pick: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub college: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub state: Option<String>,
    pub rank: Option<i32>,
    pub rating: Option<i32>,
    pub depth: Option<i32>,
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
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_delete = "Cascade"
    )]
    Team,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl StoreEntity for Entity {
    type ActiveModel = ActiveModel;
    const NAME: &'static str = "player";

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
