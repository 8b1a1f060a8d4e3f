pub use super::badge::Entity as Badge;
pub use super::certificate::Entity as Certificate;
pub use super::course::Entity as Course;
pub use super::course_category::Entity as CourseCategory;
pub use super::course_technology::Entity as CourseTechnology;
pub use super::document::Entity as Document;
pub use super::document_progress::Entity as DocumentProgress;
pub use super::enrollment::Entity as Enrollment;
pub use super::external_certificate::Entity as ExternalCertificate;
pub use super::forum_comment::Entity as ForumComment;
pub use super::forum_reply::Entity as ForumReply;
pub use super::lesson::Entity as Lesson;
pub use super::lesson_progress::Entity as LessonProgress;
pub use super::mcq_question_option::Entity as McqQuestionOption;
pub use super::notification::Entity as Notification;
pub use super::quiz::Entity as Quiz;
pub use super::quiz_attempt::Entity as QuizAttempt;
pub use super::quiz_attempt_answer::Entity as QuizAttemptAnswer;
pub use super::quiz_attempt_question::Entity as QuizAttemptQuestion;
pub use super::quiz_bank::Entity as QuizBank;
pub use super::quiz_bank_question::Entity as QuizBankQuestion;
pub use super::technology::Entity as Technology;
pub use super::user::Entity as User;
pub use super::user_badge::Entity as UserBadge;
