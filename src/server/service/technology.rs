use sea_orm::DatabaseConnection;

use crate::server::{
    data::technology::TechnologyRepository, error::AppError, model::category::Technology,
};

pub struct TechnologyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TechnologyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Technology>, AppError> {
        Ok(TechnologyRepository::new(self.db).get_all().await?)
    }

    /// Creates a technology with a unique, non-empty name
    pub async fn create(&self, name: &str) -> Result<Technology, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Technology name is required".to_string()));
        }

        let repo = TechnologyRepository::new(self.db);
        if repo.find_by_name(name).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Technology '{}' already exists",
                name
            )));
        }

        Ok(repo.create(name.to_string()).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TechnologyRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Technology not found".to_string()));
        }

        Ok(())
    }
}
