//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db).role(UserRole::Admin).name("Ada").build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    external_id: String,
    email: String,
    full_name: String,
    role: UserRole,
    headline: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - external_id: `"user-{id}"`
    /// - email: `"user{id}@example.com"`
    /// - full_name: `"User {id}"`
    /// - role: `Learner`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            external_id: format!("user-{}", id),
            email: format!("user{}@example.com", id),
            full_name: format!("User {}", id),
            role: UserRole::Learner,
            headline: None,
        }
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    pub fn name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    /// Inserts the user into the database.
    ///
    /// # Returns
    /// - `Ok(user::Model)` - The created user
    /// - `Err(DbErr)` - Database error (e.g. duplicate external id)
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            external_id: ActiveValue::Set(self.external_id),
            email: ActiveValue::Set(self.email),
            full_name: ActiveValue::Set(self.full_name),
            role: ActiveValue::Set(self.role),
            headline: ActiveValue::Set(self.headline),
            bio: ActiveValue::Set(None),
            avatar_key: ActiveValue::Set(None),
            avatar_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a learner with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an instructor with default values.
pub async fn create_instructor(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(UserRole::Instructor).build().await
}

/// Creates an admin with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(UserRole::Admin).build().await
}
