pub mod id;
pub mod markdown;
pub mod upload;
