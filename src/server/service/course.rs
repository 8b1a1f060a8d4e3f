//! Course service.
//!
//! Only the course's instructor or an admin may change a course. Drafts are hidden from
//! everyone else and reported as not found.

use entity::sea_orm_active_enums::{CourseStatus, NotificationKind};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::CategoryRepository, certificate::CertificateRepository,
        course::CourseRepository, document::DocumentRepository, lesson::LessonRepository,
        technology::TechnologyRepository,
    },
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        course::{
            average_points, can_manage, is_visible_to, Course, CourseDetail, CourseFilter,
            CreateCourseParams, PaginatedCourses, UpdateCourseParams,
        },
        notification::NewNotification,
        user::User,
    },
    service::{lesson::LessonService, notification::NotificationService},
    storage::{delete_files, storage_key, FileStorage},
    util::upload::{require_image, Upload},
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of the published catalog
    pub async fn list_published(&self, mut filter: CourseFilter) -> Result<PaginatedCourses, AppError> {
        filter.per_page = filter.per_page.clamp(1, 100);

        let (courses, total) = CourseRepository::new(self.db)
            .get_published_paginated(&filter)
            .await?;

        let courses: Result<Vec<_>, _> = courses
            .into_iter()
            .map(Course::from_with_relations)
            .collect();

        Ok(PaginatedCourses {
            courses: courses?,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages: total.div_ceil(filter.per_page),
        })
    }

    /// Gets a course with its lessons
    ///
    /// # Returns
    /// - `Ok(CourseDetail)` - Course and ordered lessons
    /// - `Err(AppError::NotFound)` - Course missing or a draft the viewer cannot manage
    pub async fn get_detail(&self, id: i32, viewer: Option<&User>) -> Result<CourseDetail, AppError> {
        self.require_visible(id, viewer).await?;

        let course = self.load(id).await?;
        let lessons = LessonService::new(self.db).get_course_lessons(id).await?;

        Ok(CourseDetail { course, lessons })
    }

    /// Gets every course the user authors, drafts included
    pub async fn get_mine(&self, user: &User) -> Result<Vec<Course>, AppError> {
        let courses = CourseRepository::new(self.db)
            .get_by_instructor(user.id)
            .await?;

        courses
            .into_iter()
            .map(Course::from_with_relations)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    pub async fn create(&self, user: &User, params: CreateCourseParams) -> Result<Course, AppError> {
        self.validate(&params.title, params.category_id, &params.technology_ids)
            .await?;

        let course = CourseRepository::new(self.db).create(params).await?;
        tracing::info!("User {} created course {}", user.id, course.id);

        self.load(course.id).await
    }

    pub async fn update(&self, user: &User, params: UpdateCourseParams) -> Result<Course, AppError> {
        self.require_manageable(params.id, user).await?;
        self.validate(&params.title, params.category_id, &params.technology_ids)
            .await?;

        let course = CourseRepository::new(self.db).update(params).await?;

        self.load(course.id).await
    }

    /// Deletes a course; lessons, enrollments, progress and certificates cascade.
    ///
    /// The thumbnail, document files and certificate files are removed from storage
    /// once the rows are gone.
    pub async fn delete(
        &self,
        storage: &dyn FileStorage,
        user: &User,
        id: i32,
    ) -> Result<(), AppError> {
        let course = self.require_manageable(id, user).await?;

        let lesson_ids = LessonRepository::new(self.db)
            .get_by_course(id)
            .await?
            .into_iter()
            .map(|l| l.id)
            .collect();
        let mut keys: Vec<String> = DocumentRepository::new(self.db)
            .get_by_lessons(lesson_ids)
            .await?
            .into_iter()
            .map(|d| d.file_key)
            .collect();
        keys.extend(
            CertificateRepository::new(self.db)
                .get_by_course(id)
                .await?
                .into_iter()
                .map(|c| c.file_key),
        );
        keys.extend(course.thumbnail_key);

        CourseRepository::new(self.db).delete(id).await?;
        tracing::info!("User {} deleted course {}", user.id, id);

        delete_files(storage, keys).await;

        Ok(())
    }

    /// Publishes a course once every lesson carries a document or a quiz.
    ///
    /// # Returns
    /// - `Ok(Course)` - The published course
    /// - `Err(AppError::BadRequest)` - No lessons, or a lesson without content
    /// - `Err(AppError::AuthErr)` - Caller cannot manage the course
    pub async fn publish(&self, user: &User, id: i32) -> Result<Course, AppError> {
        let course = self.require_manageable(id, user).await?;

        let lessons = LessonService::new(self.db).get_course_lessons(id).await?;
        if lessons.is_empty() {
            return Err(AppError::BadRequest(
                "A course needs at least one lesson before publishing".to_string(),
            ));
        }
        if let Some(empty) = lessons.iter().find(|l| !l.has_content()) {
            return Err(AppError::BadRequest(format!(
                "Lesson '{}' needs a document or a quiz before publishing",
                empty.title
            )));
        }

        let repo = CourseRepository::new(self.db);
        repo.set_status(id, CourseStatus::Published).await?;

        NotificationService::new(self.db)
            .notify(NewNotification {
                user_id: course.instructor_id,
                kind: NotificationKind::CoursePublished,
                title: "Course published".to_string(),
                message: format!("'{}' is now visible in the catalog", course.title),
                link: Some(format!("/courses/{}", id)),
            })
            .await?;

        tracing::info!("User {} published course {}", user.id, id);

        self.load(id).await
    }

    pub async fn unpublish(&self, user: &User, id: i32) -> Result<Course, AppError> {
        self.require_manageable(id, user).await?;

        CourseRepository::new(self.db)
            .set_status(id, CourseStatus::Draft)
            .await?;

        self.load(id).await
    }

    /// Stores a thumbnail image, replacing the previous file
    pub async fn set_thumbnail(
        &self,
        storage: &dyn FileStorage,
        user: &User,
        id: i32,
        mut upload: Upload,
    ) -> Result<Course, AppError> {
        let course = self.require_manageable(id, user).await?;
        require_image(&mut upload)?;

        let key = storage_key("thumbnails", &upload.file_name);
        let url = storage
            .save(&key, &upload.bytes, &upload.content_type)
            .await?;

        CourseRepository::new(self.db)
            .set_thumbnail(id, key, url)
            .await?;

        delete_files(storage, course.thumbnail_key).await;

        self.load(id).await
    }

    /// Recomputes course points as the rounded average of its lesson points
    pub async fn recompute_points(&self, course_id: i32) -> Result<i32, AppError> {
        let lessons = LessonRepository::new(self.db).get_by_course(course_id).await?;
        let points: Vec<i32> = lessons.iter().map(|l| l.points).collect();
        let average = average_points(&points);

        CourseRepository::new(self.db)
            .set_points(course_id, average)
            .await?;

        Ok(average)
    }

    /// Loads the course row and checks the user may manage it.
    ///
    /// # Returns
    /// - `Ok(course::Model)` - The course
    /// - `Err(AppError::NotFound)` - No course with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - User is neither its instructor nor an admin
    pub async fn require_manageable(
        &self,
        course_id: i32,
        user: &User,
    ) -> Result<entity::course::Model, AppError> {
        let course = self.find(course_id).await?;

        if !can_manage(&course, user) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User attempted to manage course {} they do not own", course_id),
            )
            .into());
        }

        Ok(course)
    }

    /// Loads the course row if the viewer may see it, otherwise reports it as not found.
    pub async fn require_visible(
        &self,
        course_id: i32,
        viewer: Option<&User>,
    ) -> Result<entity::course::Model, AppError> {
        let course = self.find(course_id).await?;

        if !is_visible_to(&course, viewer) {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        Ok(course)
    }

    pub async fn find(&self, course_id: i32) -> Result<entity::course::Model, AppError> {
        CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    async fn load(&self, id: i32) -> Result<Course, AppError> {
        let result = CourseRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(InternalError::MissingAfterWrite { entity: "course", id })?;

        Ok(Course::from_with_relations(result)?)
    }

    async fn validate(
        &self,
        title: &str,
        category_id: Option<i32>,
        technology_ids: &[i32],
    ) -> Result<(), AppError> {
        if title.is_empty() {
            return Err(AppError::BadRequest("Course title is required".to_string()));
        }

        if let Some(category_id) = category_id {
            if CategoryRepository::new(self.db)
                .get_by_id(category_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Category {} does not exist",
                    category_id
                )));
            }
        }

        let found = TechnologyRepository::new(self.db)
            .get_by_ids(technology_ids.to_vec())
            .await?;
        if found.len() != technology_ids.len() {
            return Err(AppError::BadRequest(
                "One or more technologies do not exist".to_string(),
            ));
        }

        Ok(())
    }
}
