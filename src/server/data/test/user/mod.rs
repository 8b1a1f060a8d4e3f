use crate::server::{
    data::user::UserRepository,
    model::user::{UpdateProfileParams, UpsertUserParams},
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_external_id;
mod update_profile;
mod upsert;
