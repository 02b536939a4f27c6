use crate::app_lib::AppError;
use auth_forms::{Error, KeyValueStore};
use web_sys::Storage;

/// `window.localStorage`. Private browsing modes can deny access; every call
/// then fails with [`Error::Storage`] and the page carries on without it.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten();
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, AppError> {
        self.storage
            .as_ref()
            .ok_or_else(|| AppError::Storage("localStorage is not available".to_string()))
    }
}

fn denied(action: &str) -> AppError {
    AppError::Storage(format!("localStorage {action} was rejected"))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.storage()?.get_item(key).map_err(|_| denied("read"))?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        Ok(self
            .storage()?
            .set_item(key, value)
            .map_err(|_| denied("write"))?)
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        Ok(self.storage()?.remove_item(key).map_err(|_| denied("remove"))?)
    }
}
