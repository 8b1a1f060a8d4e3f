use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CertificateDto {
    pub id: i32,
    pub user_id: i32,
    pub learner_name: String,
    pub course_id: i32,
    pub course_title: String,
    pub certificate_number: String,
    pub file_url: String,
    pub issued_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ExternalCertificateDto {
    pub id: i32,
    pub title: String,
    pub issuer: String,
    pub issued_on: NaiveDate,
    pub credential_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpsertExternalCertificateDto {
    pub title: String,
    pub issuer: String,
    pub issued_on: NaiveDate,
    /// Must be an absolute URL when present.
    pub credential_url: Option<String>,
}
