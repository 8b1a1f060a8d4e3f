//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Users are upserted from token claims by external id, and profile fields are updated
//! separately so a token refresh never overwrites them.

use crate::server::model::user::{UpdateProfileParams, UpsertUserParams, User};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from token identity fields.
    ///
    /// Inserts a new user or refreshes the email, name and role of the user with the same
    /// external id. Profile fields (headline, bio, avatar) are left untouched on conflict.
    ///
    /// # Arguments
    /// - `params` - Identity fields from a validated token
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, params: UpsertUserParams) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            external_id: ActiveValue::Set(params.external_id),
            email: ActiveValue::Set(params.email),
            full_name: ActiveValue::Set(params.full_name),
            role: ActiveValue::Set(params.role),
            headline: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            avatar_key: ActiveValue::Set(None),
            avatar_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::ExternalId)
                .update_columns([
                    entity::user::Column::Email,
                    entity::user::Column::FullName,
                    entity::user::Column::Role,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by the token subject they were provisioned from.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - Subject not provisioned yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ExternalId.eq(external_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all users with the given ids, in no particular order.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets every user. Used to build the leaderboard standings.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find().all(self.db).await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Updates the user's name, headline and bio.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(params.user_id),
            full_name: ActiveValue::Set(params.full_name),
            headline: ActiveValue::Set(params.headline),
            bio: ActiveValue::Set(params.bio),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Replaces the stored avatar key and URL.
    pub async fn set_avatar(&self, user_id: i32, key: String, url: String) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            avatar_key: ActiveValue::Set(Some(key)),
            avatar_url: ActiveValue::Set(Some(url)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Counts all users.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }
}
