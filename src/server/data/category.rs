use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::category::{Category, CategoryParams};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories ordered by name
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::CourseCategory::find()
            .order_by_asc(entity::course_category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::CourseCategory::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Finds a category by exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::CourseCategory::find()
            .filter(entity::course_category::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    pub async fn create(&self, params: CategoryParams) -> Result<Category, DbErr> {
        let description = params.stored_description();
        let entity = entity::course_category::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    /// Updates a category's name and description
    ///
    /// Returns None if the category doesn't exist
    pub async fn update(&self, id: i32, params: CategoryParams) -> Result<Option<Category>, DbErr> {
        if entity::prelude::CourseCategory::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let description = params.stored_description();
        let entity = entity::course_category::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(description),
        }
        .update(self.db)
        .await?;

        Ok(Some(Category::from_entity(entity)))
    }

    /// Deletes a category; courses referencing it keep existing without a category
    ///
    /// Returns true if a row was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CourseCategory::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
