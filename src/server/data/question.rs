//! Quiz bank question repository.
//!
//! Questions are always returned with their options so callers never see a question
//! without its choices.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::quiz::{CreateQuestionParams, Question};

pub struct QuestionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a question and its options in the given order.
    pub async fn create(&self, params: CreateQuestionParams) -> Result<Question, DbErr> {
        let question = entity::quiz_bank_question::ActiveModel {
            quiz_bank_id: ActiveValue::Set(params.quiz_bank_id),
            text: ActiveValue::Set(params.text),
            explanation: ActiveValue::Set(params.explanation),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut options = Vec::with_capacity(params.options.len());
        for option in params.options {
            let option = entity::mcq_question_option::ActiveModel {
                question_id: ActiveValue::Set(question.id),
                text: ActiveValue::Set(option.text),
                is_correct: ActiveValue::Set(option.is_correct),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            options.push(option);
        }

        Ok(Question::from_entity(question, options))
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::quiz_bank_question::Model>, DbErr> {
        entity::prelude::QuizBankQuestion::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all questions of a bank with options, oldest first.
    pub async fn get_by_bank(&self, quiz_bank_id: i32) -> Result<Vec<Question>, DbErr> {
        let questions = entity::prelude::QuizBankQuestion::find()
            .filter(entity::quiz_bank_question::Column::QuizBankId.eq(quiz_bank_id))
            .order_by_asc(entity::quiz_bank_question::Column::Id)
            .all(self.db)
            .await?;

        self.with_options(questions).await
    }

    /// Gets questions with options by id, keyed by question id.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Question>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let questions = entity::prelude::QuizBankQuestion::find()
            .filter(entity::quiz_bank_question::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(self
            .with_options(questions)
            .await?
            .into_iter()
            .map(|q| (q.id, q))
            .collect())
    }

    /// Gets only the ids of a bank's questions, for sampling.
    pub async fn get_ids_by_bank(&self, quiz_bank_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::QuizBankQuestion::find()
            .select_only()
            .column(entity::quiz_bank_question::Column::Id)
            .filter(entity::quiz_bank_question::Column::QuizBankId.eq(quiz_bank_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn find_option(
        &self,
        option_id: i32,
    ) -> Result<Option<entity::mcq_question_option::Model>, DbErr> {
        entity::prelude::McqQuestionOption::find_by_id(option_id)
            .one(self.db)
            .await
    }

    /// Deletes a question; options and attempt rows referencing it cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::QuizBankQuestion::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn with_options(
        &self,
        questions: Vec<entity::quiz_bank_question::Model>,
    ) -> Result<Vec<Question>, DbErr> {
        if questions.is_empty() {
            return Ok(Vec::new());
        }

        let question_ids: Vec<i32> = questions.iter().map(|q| q.id).collect();
        let mut options: HashMap<i32, Vec<entity::mcq_question_option::Model>> = HashMap::new();
        for option in entity::prelude::McqQuestionOption::find()
            .filter(entity::mcq_question_option::Column::QuestionId.is_in(question_ids))
            .order_by_asc(entity::mcq_question_option::Column::Id)
            .all(self.db)
            .await?
        {
            options.entry(option.question_id).or_default().push(option);
        }

        Ok(questions
            .into_iter()
            .map(|q| {
                let opts = options.remove(&q.id).unwrap_or_default();
                Question::from_entity(q, opts)
            })
            .collect())
    }
}
