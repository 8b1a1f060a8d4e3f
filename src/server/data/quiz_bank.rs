use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::quiz::QuizBank;

pub struct QuizBankRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizBankRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, course_id: i32, name: String) -> Result<QuizBank, DbErr> {
        let entity = entity::quiz_bank::ActiveModel {
            course_id: ActiveValue::Set(course_id),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(QuizBank::from_entity(entity, 0))
    }

    /// Finds a bank with its current question count
    pub async fn find_by_id(&self, id: i32) -> Result<Option<QuizBank>, DbErr> {
        let Some(entity) = entity::prelude::QuizBank::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let question_count = entity::prelude::QuizBankQuestion::find()
            .filter(entity::quiz_bank_question::Column::QuizBankId.eq(id))
            .count(self.db)
            .await?;

        Ok(Some(QuizBank::from_entity(entity, question_count)))
    }

    /// Gets a course's banks with question counts, oldest first
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<QuizBank>, DbErr> {
        let banks = entity::prelude::QuizBank::find()
            .filter(entity::quiz_bank::Column::CourseId.eq(course_id))
            .order_by_asc(entity::quiz_bank::Column::Id)
            .all(self.db)
            .await?;

        let bank_ids: Vec<i32> = banks.iter().map(|b| b.id).collect();
        let mut counts: HashMap<i32, u64> = HashMap::new();
        if !bank_ids.is_empty() {
            for question in entity::prelude::QuizBankQuestion::find()
                .filter(entity::quiz_bank_question::Column::QuizBankId.is_in(bank_ids))
                .all(self.db)
                .await?
            {
                *counts.entry(question.quiz_bank_id).or_default() += 1;
            }
        }

        Ok(banks
            .into_iter()
            .map(|bank| {
                let count = counts.get(&bank.id).copied().unwrap_or(0);
                QuizBank::from_entity(bank, count)
            })
            .collect())
    }
}
