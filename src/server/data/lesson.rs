use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::lesson::{CreateLessonParams, UpdateLessonParams};

pub struct LessonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a lesson, appending it after the last lesson when no position is given
    pub async fn create(&self, params: CreateLessonParams) -> Result<entity::lesson::Model, DbErr> {
        let position = match params.position {
            Some(position) => position,
            None => self.next_position(params.course_id).await?,
        };

        entity::lesson::ActiveModel {
            course_id: ActiveValue::Set(params.course_id),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            position: ActiveValue::Set(position),
            points: ActiveValue::Set(params.points),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::lesson::Model>, DbErr> {
        entity::prelude::Lesson::find_by_id(id).one(self.db).await
    }

    /// Gets a course's lessons ordered by position, then creation
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<entity::lesson::Model>, DbErr> {
        entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::CourseId.eq(course_id))
            .order_by_asc(entity::lesson::Column::Position)
            .order_by_asc(entity::lesson::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets lessons by id, in no particular order
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::lesson::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    pub async fn update(&self, params: UpdateLessonParams) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            position: ActiveValue::Set(params.position),
            points: ActiveValue::Set(params.points),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Deletes a lesson; documents, quiz and progress rows cascade
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Lesson::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Position one past the highest existing position, 0 for an empty course
    async fn next_position(&self, course_id: i32) -> Result<i32, DbErr> {
        let max: Option<Option<i32>> = entity::prelude::Lesson::find()
            .select_only()
            .column_as(entity::lesson::Column::Position.max(), "max_position")
            .filter(entity::lesson::Column::CourseId.eq(course_id))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(max.flatten().map_or(0, |p| p + 1))
    }
}
