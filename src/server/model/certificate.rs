//! Issued and external certificate domain models.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::certificate::{
    CertificateDto, ExternalCertificateDto, UpsertExternalCertificateDto,
};

#[derive(Debug, Clone)]
pub struct Certificate {
    pub id: i32,
    pub user_id: i32,
    pub learner_name: String,
    pub course_id: i32,
    pub course_title: String,
    pub certificate_number: String,
    pub file_key: String,
    pub file_url: String,
    pub issued_at: DateTime<Utc>,
}

impl Certificate {
    pub fn from_entity(
        entity: entity::certificate::Model,
        learner_name: String,
        course_title: String,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            learner_name,
            course_id: entity.course_id,
            course_title,
            certificate_number: entity.certificate_number,
            file_key: entity.file_key,
            file_url: entity.file_url,
            issued_at: entity.issued_at,
        }
    }

    pub fn into_dto(self) -> CertificateDto {
        CertificateDto {
            id: self.id,
            user_id: self.user_id,
            learner_name: self.learner_name,
            course_id: self.course_id,
            course_title: self.course_title,
            certificate_number: self.certificate_number,
            file_url: self.file_url,
            issued_at: self.issued_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewCertificate {
    pub user_id: i32,
    pub course_id: i32,
    pub certificate_number: String,
    pub file_key: String,
    pub file_url: String,
}

#[derive(Debug, Clone)]
pub struct ExternalCertificate {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub issuer: String,
    pub issued_on: NaiveDate,
    pub credential_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ExternalCertificate {
    pub fn from_entity(entity: entity::external_certificate::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            issuer: entity.issuer,
            issued_on: entity.issued_on,
            credential_url: entity.credential_url,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ExternalCertificateDto {
        ExternalCertificateDto {
            id: self.id,
            title: self.title,
            issuer: self.issuer,
            issued_on: self.issued_on,
            credential_url: self.credential_url,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExternalCertificateParams {
    pub user_id: i32,
    pub title: String,
    pub issuer: String,
    pub issued_on: NaiveDate,
    pub credential_url: Option<String>,
}

impl ExternalCertificateParams {
    pub fn from_dto(user_id: i32, dto: UpsertExternalCertificateDto) -> Self {
        Self {
            user_id,
            title: dto.title.trim().to_string(),
            issuer: dto.issuer.trim().to_string(),
            issued_on: dto.issued_on,
            credential_url: dto
                .credential_url
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
        }
    }
}
