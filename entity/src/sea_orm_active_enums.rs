use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "instructor")]
    Instructor,
    #[sea_orm(string_value = "learner")]
    Learner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CourseStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum NotificationKind {
    #[sea_orm(string_value = "enrollment")]
    Enrollment,
    #[sea_orm(string_value = "course_completed")]
    CourseCompleted,
    #[sea_orm(string_value = "certificate_issued")]
    CertificateIssued,
    #[sea_orm(string_value = "badge_unlocked")]
    BadgeUnlocked,
    #[sea_orm(string_value = "forum_reply")]
    ForumReply,
    #[sea_orm(string_value = "course_published")]
    CoursePublished,
}
