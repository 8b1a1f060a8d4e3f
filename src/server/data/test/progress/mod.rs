use crate::server::data::progress::ProgressRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod mark_document_complete;
