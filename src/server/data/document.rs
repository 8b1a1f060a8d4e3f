use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::lesson::CreateDocumentParams;

pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateDocumentParams) -> Result<entity::document::Model, DbErr> {
        entity::document::ActiveModel {
            lesson_id: ActiveValue::Set(params.lesson_id),
            title: ActiveValue::Set(params.title),
            file_key: ActiveValue::Set(params.file_key),
            file_url: ActiveValue::Set(params.file_url),
            content_type: ActiveValue::Set(params.content_type),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::document::Model>, DbErr> {
        entity::prelude::Document::find_by_id(id).one(self.db).await
    }

    /// Gets documents of the given lessons ordered by creation
    pub async fn get_by_lessons(
        &self,
        lesson_ids: Vec<i32>,
    ) -> Result<Vec<entity::document::Model>, DbErr> {
        if lesson_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Document::find()
            .filter(entity::document::Column::LessonId.is_in(lesson_ids))
            .order_by_asc(entity::document::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Document::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
