use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub lesson_id: i32,
    pub quiz_bank_id: i32,
    pub title: String,
    pub quiz_size: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Lesson,
    #[sea_orm(
        belongs_to = "super::quiz_bank::Entity",
        from = "Column::QuizBankId",
        to = "super::quiz_bank::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    QuizBank,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl Related<super::quiz_bank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuizBank.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
