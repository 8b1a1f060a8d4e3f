use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::category::Technology;

pub struct TechnologyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TechnologyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all technologies ordered by name
    pub async fn get_all(&self) -> Result<Vec<Technology>, DbErr> {
        let entities = entity::prelude::Technology::find()
            .order_by_asc(entity::technology::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Technology::from_entity).collect())
    }

    /// Gets technologies by id; unknown ids are skipped
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Technology>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Technology::find()
            .filter(entity::technology::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Technology::from_entity).collect())
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Technology>, DbErr> {
        let entity = entity::prelude::Technology::find()
            .filter(entity::technology::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Technology::from_entity))
    }

    pub async fn create(&self, name: String) -> Result<Technology, DbErr> {
        let entity = entity::technology::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Technology::from_entity(entity))
    }

    /// Deletes a technology and its course links
    ///
    /// Returns true if a row was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Technology::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
