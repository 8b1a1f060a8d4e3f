use crate::server::{
    data::course::CourseRepository,
    model::course::{CourseFilter, CreateCourseParams},
};
use entity::sea_orm_active_enums::CourseStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_published_paginated;
mod set_status;
