//! Binds Leptos event handlers to one page's [`FormController`]. The handle is
//! `Copy` so every handler in the page can capture it; the controller itself
//! lives in local storage owned by the page component.

use crate::app_lib::{AppError, config};
use crate::dom::{BrowserHost, DomSurface, GlooTimer, LocalStore};
use auth_forms::{FormController, FormEvent, FormKind, SimulatedBackend, ViewLifetime, drive};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, info};

type PageController = FormController<DomSurface, LocalStore, BrowserHost>;

struct Binding {
    controller: Rc<RefCell<PageController>>,
    backend: Rc<SimulatedBackend<GlooTimer>>,
}

impl Binding {
    fn fire(&self, event: FormEvent) {
        // Events raised while the controller is mid-update (blur during a
        // navigation, for one) are dropped.
        let Ok(mut controller) = self.controller.try_borrow_mut() else {
            debug!(?event, "controller busy; event dropped");
            return;
        };
        let dispatch = controller.handle(event);
        drop(controller);

        if !dispatch.is_pending() {
            return;
        }
        let controller = Rc::clone(&self.controller);
        let backend = Rc::clone(&self.backend);
        spawn_local(async move {
            drive(&controller, backend.as_ref(), dispatch).await;
        });
    }
}

#[derive(Clone, Copy)]
pub struct FormHandle {
    binding: StoredValue<Binding, LocalStorage>,
}

impl FormHandle {
    /// # Errors
    /// Returns [`AppError::Dom`] when the document is unavailable.
    pub fn new(host: BrowserHost) -> Result<Self, AppError> {
        let config = config::load();
        let backend = SimulatedBackend::new(GlooTimer, config.clone());
        let controller = FormController::new(DomSurface::new()?, LocalStore::new(), host, config);

        Ok(Self {
            binding: StoredValue::new_local(Binding {
                controller: Rc::new(RefCell::new(controller)),
                backend: Rc::new(backend),
            }),
        })
    }

    /// Ties the controller to the calling component: the remembered email is
    /// applied once the markup is mounted, and the view lifetime ends when the
    /// component is cleaned up.
    pub fn attach(self) {
        if let Some(lifetime) = self.lifetime() {
            on_cleanup(move || lifetime.end());
        }
        Effect::new(move |_| self.init());
    }

    fn init(self) {
        self.binding.try_with_value(|binding| {
            if let Ok(mut controller) = binding.controller.try_borrow_mut()
                && controller.init()
            {
                info!("remembered email restored");
            }
        });
    }

    fn lifetime(self) -> Option<ViewLifetime> {
        self.binding
            .try_with_value(|binding| binding.controller.borrow().lifetime())
    }

    pub fn fire(self, event: FormEvent) {
        if self
            .binding
            .try_with_value(|binding| binding.fire(event))
            .is_none()
        {
            debug!(?event, "page disposed; event dropped");
        }
    }

    pub fn submit(self, event: SubmitEvent, form: FormKind) {
        event.prevent_default();
        self.fire(FormEvent::Submit(form));
    }
}
