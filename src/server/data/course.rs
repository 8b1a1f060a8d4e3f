//! Course data repository.
//!
//! Courses are returned together with their instructor, category, technologies and
//! lesson count. Relations for a page of courses are fetched with one query per
//! related table and joined in memory.

use chrono::Utc;
use entity::sea_orm_active_enums::CourseStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::course::{
    CourseFilter, CourseWithRelations, CreateCourseParams, UpdateCourseParams,
};

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a draft course and links its technologies.
    ///
    /// # Returns
    /// - `Ok(course::Model)` - The created course with 0 points
    /// - `Err(DbErr)` - Database error, including unknown category or technology ids
    pub async fn create(&self, params: CreateCourseParams) -> Result<entity::course::Model, DbErr> {
        let now = Utc::now();
        let course = entity::course::ActiveModel {
            instructor_id: ActiveValue::Set(params.instructor_id),
            category_id: ActiveValue::Set(params.category_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(CourseStatus::Draft),
            thumbnail_key: ActiveValue::Set(None),
            thumbnail_url: ActiveValue::Set(None),
            points: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            published_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.set_technologies(course.id, params.technology_ids)
            .await?;

        Ok(course)
    }

    /// Finds the bare course row, for permission checks and state transitions.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(id).one(self.db).await
    }

    /// Gets a course by ID with all relations loaded.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CourseWithRelations>, DbErr> {
        let Some(course) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.load_relations(vec![course]).await?.pop())
    }

    /// Gets a page of published courses, newest first.
    ///
    /// # Returns
    /// - `Ok((courses, total))` - Courses on the requested page and the total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_published_paginated(
        &self,
        filter: &CourseFilter,
    ) -> Result<(Vec<CourseWithRelations>, u64), DbErr> {
        let mut condition =
            Condition::all().add(entity::course::Column::Status.eq(CourseStatus::Published));

        if let Some(category_id) = filter.category_id {
            condition = condition.add(entity::course::Column::CategoryId.eq(category_id));
        }

        // SQLite LIKE is case-insensitive for ASCII
        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            condition = condition.add(entity::course::Column::Title.contains(search));
        }

        let paginator = entity::prelude::Course::find()
            .filter(condition)
            .order_by_desc(entity::course::Column::PublishedAt)
            .order_by_desc(entity::course::Column::Id)
            .paginate(self.db, filter.per_page.max(1));

        let total = paginator.num_items().await?;
        if filter.page.saturating_mul(filter.per_page.max(1)) >= total {
            return Ok((Vec::new(), total));
        }
        let courses = paginator.fetch_page(filter.page).await?;

        Ok((self.load_relations(courses).await?, total))
    }

    /// Gets every course authored by `instructor_id`, drafts included, newest first.
    pub async fn get_by_instructor(
        &self,
        instructor_id: i32,
    ) -> Result<Vec<CourseWithRelations>, DbErr> {
        let courses = entity::prelude::Course::find()
            .filter(entity::course::Column::InstructorId.eq(instructor_id))
            .order_by_desc(entity::course::Column::CreatedAt)
            .order_by_desc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(courses).await
    }

    /// Gets bare course rows by id, in no particular order.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::course::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Updates title, description, category and technologies.
    pub async fn update(&self, params: UpdateCourseParams) -> Result<entity::course::Model, DbErr> {
        let course = entity::course::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            category_id: ActiveValue::Set(params.category_id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.set_technologies(course.id, params.technology_ids)
            .await?;

        Ok(course)
    }

    /// Replaces the course's technology links with `technology_ids`.
    pub async fn set_technologies(&self, course_id: i32, technology_ids: Vec<i32>) -> Result<(), DbErr> {
        entity::prelude::CourseTechnology::delete_many()
            .filter(entity::course_technology::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        if technology_ids.is_empty() {
            return Ok(());
        }

        let links = technology_ids
            .into_iter()
            .map(|technology_id| entity::course_technology::ActiveModel {
                course_id: ActiveValue::Set(course_id),
                technology_id: ActiveValue::Set(technology_id),
            });

        entity::prelude::CourseTechnology::insert_many(links)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets the publication state. `published_at` is set when publishing and cleared otherwise.
    pub async fn set_status(
        &self,
        id: i32,
        status: CourseStatus,
    ) -> Result<entity::course::Model, DbErr> {
        let now = Utc::now();
        let published_at = (status == CourseStatus::Published).then_some(now);

        entity::course::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status),
            published_at: ActiveValue::Set(published_at),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Stores the derived course points.
    pub async fn set_points(&self, id: i32, points: i32) -> Result<(), DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::Unchanged(id),
            points: ActiveValue::Set(points),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Replaces the thumbnail key and URL.
    pub async fn set_thumbnail(
        &self,
        id: i32,
        key: String,
        url: String,
    ) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::Unchanged(id),
            thumbnail_key: ActiveValue::Set(Some(key)),
            thumbnail_url: ActiveValue::Set(Some(url)),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Deletes a course; lessons, quizzes, enrollments and progress cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Course::find().count(self.db).await
    }

    pub async fn count_published(&self) -> Result<u64, DbErr> {
        entity::prelude::Course::find()
            .filter(entity::course::Column::Status.eq(CourseStatus::Published))
            .count(self.db)
            .await
    }

    /// Gets (course_id, technology) pairs for the given courses.
    pub async fn get_technologies_for_courses(
        &self,
        course_ids: Vec<i32>,
    ) -> Result<Vec<(i32, entity::technology::Model)>, DbErr> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let links = entity::prelude::CourseTechnology::find()
            .filter(entity::course_technology::Column::CourseId.is_in(course_ids))
            .find_also_related(entity::prelude::Technology)
            .all(self.db)
            .await?;

        Ok(links
            .into_iter()
            .filter_map(|(link, technology)| technology.map(|t| (link.course_id, t)))
            .collect())
    }

    /// Loads instructors, categories, technologies and lesson counts for `courses`,
    /// preserving the input order.
    async fn load_relations(
        &self,
        courses: Vec<entity::course::Model>,
    ) -> Result<Vec<CourseWithRelations>, DbErr> {
        if courses.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<i32> = courses.iter().map(|c| c.id).collect();
        let instructor_ids: Vec<i32> = courses.iter().map(|c| c.instructor_id).collect();
        let category_ids: Vec<i32> = courses.iter().filter_map(|c| c.category_id).collect();

        let instructors: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(instructor_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let categories: HashMap<i32, entity::course_category::Model> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::CourseCategory::find()
                .filter(entity::course_category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        let mut technologies: HashMap<i32, Vec<entity::technology::Model>> = HashMap::new();
        for (course_id, technology) in self.get_technologies_for_courses(course_ids.clone()).await? {
            technologies.entry(course_id).or_default().push(technology);
        }

        let mut lesson_counts: HashMap<i32, u64> = HashMap::new();
        for lesson in entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::CourseId.is_in(course_ids))
            .all(self.db)
            .await?
        {
            *lesson_counts.entry(lesson.course_id).or_default() += 1;
        }

        Ok(courses
            .into_iter()
            .map(|course| CourseWithRelations {
                instructor: instructors.get(&course.instructor_id).cloned(),
                category: course.category_id.and_then(|id| categories.get(&id).cloned()),
                technologies: technologies.remove(&course.id).unwrap_or_default(),
                lesson_count: lesson_counts.get(&course.id).copied().unwrap_or(0),
                course,
            })
            .collect())
    }
}
