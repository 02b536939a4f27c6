#![allow(dead_code)]

use auth_forms::{
    Backend, Error, FormController, FormsConfig, RegistrationRequest, SignInRequest,
    SocialProvider,
    memory::{MemoryHost, MemoryStore, MemorySurface},
};
use std::cell::{Cell, RefCell};

pub type Controller = FormController<MemorySurface, MemoryStore, MemoryHost>;

pub fn controller(surface: MemorySurface) -> Controller {
    with_store(surface, MemoryStore::default())
}

pub fn with_store(surface: MemorySurface, store: MemoryStore) -> Controller {
    FormController::new(surface, store, MemoryHost::default(), FormsConfig::default())
}

/// Backend that settles immediately with a fixed outcome and counts calls.
#[derive(Default)]
pub struct StubBackend {
    pub fail: bool,
    pub calls: Cell<usize>,
    pub emails: RefCell<Vec<String>>,
}

impl StubBackend {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn outcome(&self) -> Result<(), Error> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            Err(Error::Backend("unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Backend for StubBackend {
    async fn sign_in(&self, request: &SignInRequest) -> Result<(), Error> {
        self.emails.borrow_mut().push(request.email.clone());
        self.outcome()
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<(), Error> {
        self.emails.borrow_mut().push(request.email.clone());
        self.outcome()
    }

    async fn social_sign_in(&self, _provider: SocialProvider) -> Result<(), Error> {
        self.outcome()
    }
}
