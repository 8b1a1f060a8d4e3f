use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_attempt_answer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub attempt_id: i32,
    pub question_id: i32,
    pub selected_option_id: i32,
    pub is_correct: bool,
    pub answered_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz_attempt::Entity",
        from = "Column::AttemptId",
        to = "super::quiz_attempt::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    QuizAttempt,
    #[sea_orm(
        belongs_to = "super::quiz_bank_question::Entity",
        from = "Column::QuestionId",
        to = "super::quiz_bank_question::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Question,
    #[sea_orm(
        belongs_to = "super::mcq_question_option::Entity",
        from = "Column::SelectedOptionId",
        to = "super::mcq_question_option::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SelectedOption,
}

impl Related<super::quiz_attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuizAttempt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
