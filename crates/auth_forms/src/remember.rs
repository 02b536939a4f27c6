//! "Remember me": one email persisted in durable key-value storage.

use crate::{
    error::Error,
    fields::{Checkbox, Field},
    surface::FormSurface,
};
use tracing::warn;

pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";

/// Durable string storage such as `window.localStorage`.
pub trait KeyValueStore {
    /// # Errors
    /// Returns [`Error::Storage`] when the backend is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    /// # Errors
    /// Returns [`Error::Storage`] when the backend is unavailable or full.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
    /// # Errors
    /// Returns [`Error::Storage`] when the backend is unavailable.
    fn remove(&mut self, key: &str) -> Result<(), Error>;
}

/// Prefills the email field and checks the remember box from storage.
/// Returns whether a stored email was applied.
pub fn restore<S: FormSurface, K: KeyValueStore>(surface: &mut S, store: &K) -> bool {
    if surface.is_checked(Checkbox::Remember).is_none() || surface.value(Field::Email).is_none() {
        return false;
    }
    let saved = match store.get(REMEMBERED_EMAIL_KEY) {
        Ok(saved) => saved,
        Err(err) => {
            warn!(error = %err, "unable to read remembered email");
            return false;
        }
    };
    match saved.filter(|email| !email.is_empty()) {
        Some(email) => {
            surface.set_value(Field::Email, &email);
            surface.set_checked(Checkbox::Remember, true);
            true
        }
        None => false,
    }
}

/// Stores the current email while the box is checked, otherwise forgets it.
pub fn sync<S: FormSurface, K: KeyValueStore>(surface: &S, store: &mut K) {
    let Some(checked) = surface.is_checked(Checkbox::Remember) else {
        return;
    };
    let result = match (checked, surface.value(Field::Email)) {
        (true, Some(email)) => store.set(REMEMBERED_EMAIL_KEY, &email),
        _ => store.remove(REMEMBERED_EMAIL_KEY),
    };
    if let Err(err) = result {
        warn!(error = %err, "unable to update remembered email");
    }
}
