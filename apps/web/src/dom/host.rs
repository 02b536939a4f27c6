use auth_forms::Host;
use std::rc::Rc;
use tracing::warn;

type Navigate = Rc<dyn Fn(&str)>;

/// `window.alert` plus client-side navigation through the router.
#[derive(Clone)]
pub struct BrowserHost {
    navigate: Navigate,
}

impl BrowserHost {
    pub fn new(navigate: impl Fn(&str) + 'static) -> Self {
        Self {
            navigate: Rc::new(navigate),
        }
    }
}

impl Host for BrowserHost {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            warn!("alert failed: {err:?}");
        }
    }

    fn navigate(&self, target: &str) {
        (self.navigate)(target);
    }
}
