use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::quiz::{CreateQuizParams, Quiz};

pub struct QuizRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateQuizParams) -> Result<Quiz, DbErr> {
        let entity = entity::quiz::ActiveModel {
            lesson_id: ActiveValue::Set(params.lesson_id),
            quiz_bank_id: ActiveValue::Set(params.quiz_bank_id),
            title: ActiveValue::Set(params.title),
            quiz_size: ActiveValue::Set(params.quiz_size),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Quiz::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Quiz>, DbErr> {
        let entity = entity::prelude::Quiz::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Quiz::from_entity))
    }

    pub async fn find_by_lesson(&self, lesson_id: i32) -> Result<Option<Quiz>, DbErr> {
        let entity = entity::prelude::Quiz::find()
            .filter(entity::quiz::Column::LessonId.eq(lesson_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Quiz::from_entity))
    }

    /// Gets the quizzes attached to any of the given lessons
    pub async fn get_by_lessons(&self, lesson_ids: Vec<i32>) -> Result<Vec<entity::quiz::Model>, DbErr> {
        if lesson_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Quiz::find()
            .filter(entity::quiz::Column::LessonId.is_in(lesson_ids))
            .order_by_asc(entity::quiz::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a quiz; its attempts cascade
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Quiz::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
