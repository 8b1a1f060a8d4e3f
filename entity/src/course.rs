use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::CourseStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub instructor_id: i32,
    pub category_id: Option<i32>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: CourseStatus,
    pub thumbnail_key: Option<String>,
    pub thumbnail_url: Option<String>,
    pub points: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub published_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::InstructorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Instructor,
    #[sea_orm(
        belongs_to = "super::course_category::Entity",
        from = "Column::CategoryId",
        to = "super::course_category::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    CourseCategory,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::course_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
