use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "category_id", column_type = "Uuid")]
    pub category_id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub name: String,

    // 0-100
    pub level: i32,

    pub order_index: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::skill_categories::Entity",
        from = "Column::CategoryId",
        to = "super::skill_categories::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SkillCategories,
}

impl Related<super::skill_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SkillCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
