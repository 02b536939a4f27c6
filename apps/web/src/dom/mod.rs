//! Browser implementations of the form controller's seams.

mod host;
mod storage;
mod surface;
mod timer;

pub(crate) use host::BrowserHost;
pub(crate) use storage::LocalStore;
pub(crate) use surface::DomSurface;
pub(crate) use timer::GlooTimer;
