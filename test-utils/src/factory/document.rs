//! Document factory for creating lesson documents.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a PDF document in `lesson_id` with a unique file key.
pub async fn create_document(
    db: &DatabaseConnection,
    lesson_id: i32,
) -> Result<entity::document::Model, DbErr> {
    let id = next_id();
    let file_key = format!("documents/test-{}.pdf", id);

    entity::document::ActiveModel {
        lesson_id: ActiveValue::Set(lesson_id),
        title: ActiveValue::Set(format!("Document {}", id)),
        file_url: ActiveValue::Set(format!("http://localhost/files/{}", file_key)),
        file_key: ActiveValue::Set(file_key),
        content_type: ActiveValue::Set("application/pdf".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
