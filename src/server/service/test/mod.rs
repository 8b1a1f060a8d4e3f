use async_trait::async_trait;
use std::{collections::HashMap, sync::Mutex};

use crate::server::{error::storage::StorageError, model::user::User, storage::FileStorage};

mod analytics;
mod badge;
mod certificate;
mod course;
mod cv;
mod enrollment;
mod forum;
mod leaderboard;
mod notification;
mod progress;
mod quiz;
mod quiz_attempt;

/// In-memory file storage recording every saved file.
#[derive(Default)]
pub struct MemoryStorage {
    files: Mutex<HashMap<String, (Vec<u8>, String)>>,
}

impl MemoryStorage {
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn content_type(&self, key: &str) -> Option<String> {
        self.files.lock().unwrap().get(key).map(|(_, ct)| ct.clone())
    }
}

#[async_trait]
impl FileStorage for MemoryStorage {
    async fn save(
        &self,
        key: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.files
            .lock()
            .unwrap()
            .insert(key.to_string(), (bytes.to_vec(), content_type.to_string()));

        Ok(self.url(key))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.files.lock().unwrap().remove(key);

        Ok(())
    }

    fn url(&self, key: &str) -> String {
        format!("http://localhost/files/{}", key)
    }
}

/// Converts a factory-created user into the domain model services expect.
pub fn as_user(model: &entity::user::Model) -> User {
    User::from_entity(model.clone())
}
