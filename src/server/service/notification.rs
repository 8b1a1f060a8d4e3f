use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{kind_name, NewNotification, Notification, PaginatedNotifications},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Delivers a notification to a single user
    pub async fn notify(&self, params: NewNotification) -> Result<Notification, AppError> {
        let user_id = params.user_id;
        let notification = NotificationRepository::new(self.db).create(params).await?;

        tracing::debug!(
            "Notified user {} ({})",
            user_id,
            kind_name(notification.kind)
        );

        Ok(notification)
    }

    /// Gets a page of the user's notifications, newest first
    pub async fn list(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
        unread_only: bool,
    ) -> Result<PaginatedNotifications, AppError> {
        let per_page = per_page.clamp(1, 100);
        let (notifications, total) = NotificationRepository::new(self.db)
            .get_paginated_by_user(user_id, page, per_page, unread_only)
            .await?;

        Ok(PaginatedNotifications {
            notifications,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .count_unread(user_id)
            .await?)
    }

    /// Marks one of the user's notifications as read
    ///
    /// Notifications of other users are reported as not found
    pub async fn mark_read(&self, user_id: i32, id: i32) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);
        self.require_own(&repo, user_id, id).await?;

        Ok(repo.mark_read(id).await?)
    }

    /// Marks all of the user's notifications as read, returning how many changed
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?)
    }

    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);
        self.require_own(&repo, user_id, id).await?;

        repo.delete(id).await?;

        Ok(())
    }

    async fn require_own(
        &self,
        repo: &NotificationRepository<'_>,
        user_id: i32,
        id: i32,
    ) -> Result<Notification, AppError> {
        match repo.find_by_id(id).await? {
            Some(notification) if notification.user_id == user_id => Ok(notification),
            _ => Err(AppError::NotFound("Notification not found".to_string())),
        }
    }
}
