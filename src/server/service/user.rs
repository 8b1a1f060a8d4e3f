//! User profile service.
//!
//! Identity fields (email, role) come from the bearer token and are refreshed by the
//! auth guard; this service only manages the learner-editable profile.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpdateProfileParams, User},
    storage::{storage_key, FileStorage},
    util::upload::{require_image, Upload},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's profile by id
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_profile(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Updates name, headline and bio. Blank headline or bio clears the field.
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<User, AppError> {
        if params.full_name.is_empty() {
            return Err(AppError::BadRequest("Full name is required".to_string()));
        }

        let user = UserRepository::new(self.db).update_profile(params).await?;

        Ok(user)
    }

    /// Stores a new avatar image and removes the previous file.
    ///
    /// # Returns
    /// - `Ok(User)` - User with the new avatar URL
    /// - `Err(AppError::BadRequest)` - Upload is not an image
    /// - `Err(AppError::StorageErr)` - Failed to write the file
    pub async fn upload_avatar(
        &self,
        storage: &dyn FileStorage,
        user: &User,
        mut upload: Upload,
    ) -> Result<User, AppError> {
        require_image(&mut upload)?;

        let key = storage_key("avatars", &upload.file_name);
        let url = storage
            .save(&key, &upload.bytes, &upload.content_type)
            .await?;

        let updated = UserRepository::new(self.db)
            .set_avatar(user.id, key, url)
            .await?;

        if let Some(previous) = &user.avatar_key {
            if let Err(e) = storage.delete(previous).await {
                tracing::warn!("Failed to delete previous avatar {}: {}", previous, e);
            }
        }

        Ok(updated)
    }
}
