//! Shared frontend utilities: configuration, errors, logging, and build metadata.
//!
//! ## Page lifecycle
//!
//! 1. **Load:** [`config::load`] merges build-time `GERBANG_*` values with the
//!    optional `window.GERBANG_CONFIG` object.
//! 2. **Mount:** a page builds its form handle, then restores the remembered
//!    email once the markup is in the document.
//! 3. **Leave:** the page's cleanup hook ends the view lifetime so pending
//!    simulated submissions do not touch a detached view.
//!
//! Nothing here handles secrets; configuration values are public.

pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod logging;

pub(crate) use errors::AppError;
