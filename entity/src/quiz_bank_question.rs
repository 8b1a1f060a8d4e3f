use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_bank_question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub quiz_bank_id: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub explanation: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz_bank::Entity",
        from = "Column::QuizBankId",
        to = "super::quiz_bank::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    QuizBank,
}

impl Related<super::quiz_bank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuizBank.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
