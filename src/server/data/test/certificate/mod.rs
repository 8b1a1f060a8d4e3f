use crate::server::{data::certificate::CertificateRepository, model::certificate::NewCertificate};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod create_or_get;

/// Adds the (user, course) unique index the migrations create.
async fn add_user_course_index(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared(
        "CREATE UNIQUE INDEX idx_certificate_user_course ON certificate (user_id, course_id)",
    )
    .await?;

    Ok(())
}

fn certificate(user_id: i32, course_id: i32, number: &str) -> NewCertificate {
    NewCertificate {
        user_id,
        course_id,
        certificate_number: number.to_string(),
        file_key: format!("certificates/{}.html", number),
        file_url: format!("http://localhost/files/certificates/{}.html", number),
    }
}
