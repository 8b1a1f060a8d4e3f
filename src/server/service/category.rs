use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, CategoryParams},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    /// Creates a category with a unique, non-empty name
    pub async fn create(&self, params: CategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        self.validate_name(&repo, &params.name, None).await?;

        let category = repo.create(params).await?;
        tracing::info!("Created category {} ({})", category.id, category.name);

        Ok(category)
    }

    pub async fn update(&self, id: i32, params: CategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        self.validate_name(&repo, &params.name, Some(id)).await?;

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        Ok(())
    }

    async fn validate_name(
        &self,
        repo: &CategoryRepository<'_>,
        name: &str,
        current_id: Option<i32>,
    ) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::BadRequest("Category name is required".to_string()));
        }

        if let Some(existing) = repo.find_by_name(name).await? {
            if Some(existing.id) != current_id {
                return Err(AppError::BadRequest(format!(
                    "Category '{}' already exists",
                    name
                )));
            }
        }

        Ok(())
    }
}
