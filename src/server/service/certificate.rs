//! Course certificates and user-entered external certificates.
//!
//! A course certificate is issued once per learner and course after every progress
//! item is done. The certificate itself is a standalone HTML page written to file
//! storage under `certificates/{number}.html`.

use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use url::Url;

use crate::server::{
    data::{
        certificate::CertificateRepository, course::CourseRepository,
        external_certificate::ExternalCertificateRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        certificate::{
            Certificate, ExternalCertificate, ExternalCertificateParams, NewCertificate,
        },
        notification::NewNotification,
    },
    service::{notification::NotificationService, progress::ProgressService},
    storage::{delete_files, FileStorage},
    util::id::certificate_number,
};

pub struct CertificateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CertificateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues the learner's certificate for a course, or returns the one already issued.
    ///
    /// # Returns
    /// - `Ok(Certificate)` - New or existing certificate
    /// - `Err(AppError::BadRequest)` - Learner has not completed every item of the course
    /// - `Err(AppError::NotFound)` - Learner or course does not exist
    pub async fn generate(
        &self,
        storage: &dyn FileStorage,
        user_id: i32,
        course_id: i32,
    ) -> Result<Certificate, AppError> {
        let repo = CertificateRepository::new(self.db);

        let learner = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        let course = CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if let Some(existing) = repo.find_by_user_and_course(user_id, course_id).await? {
            return Ok(Certificate::from_entity(
                existing,
                learner.full_name,
                course.title,
            ));
        }

        let progress = ProgressService::new(self.db)
            .compute(user_id, course_id)
            .await?;
        if !progress.is_complete() {
            return Err(AppError::BadRequest(
                "Complete every lesson item before requesting a certificate".to_string(),
            ));
        }

        let number = certificate_number();
        let issued_on = chrono::Utc::now().date_naive();
        let html = render_certificate(&number, &learner.full_name, &course.title, issued_on);

        let key = format!("certificates/{}.html", number);
        let url = storage.save(&key, html.as_bytes(), "text/html").await?;

        let (certificate, issued) = repo
            .create_or_get(NewCertificate {
                user_id,
                course_id,
                certificate_number: number.clone(),
                file_key: key.clone(),
                file_url: url,
            })
            .await?;
        if !issued {
            delete_files(storage, [key]).await;
            return Ok(Certificate::from_entity(
                certificate,
                learner.full_name,
                course.title,
            ));
        }

        NotificationService::new(self.db)
            .notify(NewNotification {
                user_id,
                kind: NotificationKind::CertificateIssued,
                title: "Certificate issued".to_string(),
                message: format!("Your certificate for '{}' is ready", course.title),
                link: Some(format!("/certificates/{}", number)),
            })
            .await?;

        tracing::info!(
            "Issued certificate {} to user {} for course {}",
            number,
            user_id,
            course_id
        );

        Ok(Certificate::from_entity(
            certificate,
            learner.full_name,
            course.title,
        ))
    }

    /// Lists the user's certificates, newest first
    pub async fn list_mine(&self, user_id: i32) -> Result<Vec<Certificate>, AppError> {
        let certificates = CertificateRepository::new(self.db)
            .get_by_user(user_id)
            .await?;
        let learner_name = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(|u| u.full_name)
            .unwrap_or_default();

        let titles = self
            .course_titles(certificates.iter().map(|c| c.course_id).collect())
            .await?;

        Ok(certificates
            .into_iter()
            .map(|c| {
                let title = titles.get(&c.course_id).cloned().unwrap_or_default();
                Certificate::from_entity(c, learner_name.clone(), title)
            })
            .collect())
    }

    /// Looks a certificate up by its public number, for verification
    pub async fn get_by_number(&self, number: &str) -> Result<Certificate, AppError> {
        let certificate = CertificateRepository::new(self.db)
            .find_by_number(number)
            .await?
            .ok_or_else(|| AppError::NotFound("Certificate not found".to_string()))?;

        let learner_name = UserRepository::new(self.db)
            .find_by_id(certificate.user_id)
            .await?
            .map(|u| u.full_name)
            .unwrap_or_default();
        let course_title = self
            .course_titles(vec![certificate.course_id])
            .await?
            .remove(&certificate.course_id)
            .unwrap_or_default();

        Ok(Certificate::from_entity(certificate, learner_name, course_title))
    }

    pub async fn list_external(&self, user_id: i32) -> Result<Vec<ExternalCertificate>, AppError> {
        Ok(ExternalCertificateRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    pub async fn create_external(
        &self,
        params: ExternalCertificateParams,
    ) -> Result<ExternalCertificate, AppError> {
        validate_external(&params)?;

        Ok(ExternalCertificateRepository::new(self.db)
            .create(params)
            .await?)
    }

    /// Updates one of the user's external certificates
    pub async fn update_external(
        &self,
        id: i32,
        params: ExternalCertificateParams,
    ) -> Result<ExternalCertificate, AppError> {
        validate_external(&params)?;
        self.require_own_external(params.user_id, id).await?;

        Ok(ExternalCertificateRepository::new(self.db)
            .update(id, params)
            .await?)
    }

    pub async fn delete_external(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        self.require_own_external(user_id, id).await?;

        ExternalCertificateRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Other users' records are reported as missing.
    async fn require_own_external(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        ExternalCertificateRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|c| c.user_id == user_id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("External certificate not found".to_string()))
    }

    async fn course_titles(&self, ids: Vec<i32>) -> Result<HashMap<i32, String>, AppError> {
        Ok(CourseRepository::new(self.db)
            .get_by_ids(ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c.title))
            .collect())
    }
}

fn validate_external(params: &ExternalCertificateParams) -> Result<(), AppError> {
    if params.title.is_empty() {
        return Err(AppError::BadRequest("Certificate title is required".to_string()));
    }
    if params.issuer.is_empty() {
        return Err(AppError::BadRequest("Certificate issuer is required".to_string()));
    }

    if let Some(credential_url) = &params.credential_url {
        let url = Url::parse(credential_url).map_err(|e| {
            AppError::BadRequest(format!("Invalid credential URL '{}': {}", credential_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::BadRequest(
                "Credential URL must use http or https".to_string(),
            ));
        }
    }

    Ok(())
}

/// Renders the printable certificate page.
fn render_certificate(
    number: &str,
    learner_name: &str,
    course_title: &str,
    issued_on: chrono::NaiveDate,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Certificate {number}</title>
<style>
body {{ font-family: Georgia, serif; text-align: center; padding: 4rem; }}
h1 {{ font-size: 2.5rem; margin-bottom: 0.5rem; }}
.name {{ font-size: 2rem; font-weight: bold; margin: 2rem 0; }}
.meta {{ color: #555; margin-top: 3rem; }}
</style>
</head>
<body>
<h1>Certificate of Completion</h1>
<p>This certifies that</p>
<p class="name">{name}</p>
<p>has completed the course</p>
<h2>{course}</h2>
<p class="meta">Issued on {date} &middot; Certificate number {number}</p>
</body>
</html>
"#,
        number = escape_html(number),
        name = escape_html(learner_name),
        course = escape_html(course_title),
        date = issued_on.format("%B %-d, %Y"),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
