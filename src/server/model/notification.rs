//! Notification domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NotificationKind;

use crate::model::notification::{NotificationDto, PaginatedNotificationsDto};

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            title: entity.title,
            message: entity.message,
            link: entity.link,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            kind: kind_name(self.kind).to_string(),
            title: self.title,
            message: self.message,
            link: self.link,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

pub fn kind_name(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Enrollment => "enrollment",
        NotificationKind::CourseCompleted => "course_completed",
        NotificationKind::CertificateIssued => "certificate_issued",
        NotificationKind::BadgeUnlocked => "badge_unlocked",
        NotificationKind::ForumReply => "forum_reply",
        NotificationKind::CoursePublished => "course_published",
    }
}

/// Notification to be delivered to one user.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: i32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Relative link into the application, such as `/courses/3`.
    pub link: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PaginatedNotifications {
    pub notifications: Vec<Notification>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedNotifications {
    pub fn into_dto(self) -> PaginatedNotificationsDto {
        PaginatedNotificationsDto {
            notifications: self
                .notifications
                .into_iter()
                .map(Notification::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
