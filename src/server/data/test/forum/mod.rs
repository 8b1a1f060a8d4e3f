use crate::server::{data::forum::ForumRepository, model::forum::CreateCommentParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_comment;
mod get_comments;
