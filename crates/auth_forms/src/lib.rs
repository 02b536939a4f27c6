//! Validation and interaction controller for the sign-in and registration forms.
//!
//! The crate is framework-free: the page's DOM is reached only through the
//! [`FormSurface`] binding, alerts and navigation through [`Host`], and the
//! remembered email through a [`KeyValueStore`]. The web app implements those
//! traits over `web_sys`; the [`memory`] module implements them in memory for
//! tests and headless use.
//!
//! ## Flow Overview
//!
//! 1. **Event:** the binding layer forwards a [`FormEvent`] to
//!    [`FormController::handle`].
//! 2. **Validate:** submit events run every field rule and annotate failures
//!    inline. Valid input moves the flow to `Submitting` and yields a
//!    [`Dispatch`].
//! 3. **Complete:** the binding layer awaits the [`Backend`] (see [`drive`]) and
//!    hands the outcome to [`FormController::complete`], which alerts and
//!    navigates on success or restores the submit button on failure.
//!
//! Nothing here logs field values; emails and passwords stay out of traces.

pub mod annotations;
pub mod config;
pub mod controller;
mod error;
pub mod fields;
pub mod memory;
pub mod messages;
pub mod remember;
pub mod rules;
pub mod strength;
pub mod submission;
pub mod surface;

pub use config::FormsConfig;
pub use controller::{Dispatch, FormController, FormEvent, drive};
pub use error::Error;
pub use fields::{Checkbox, Field, FormKind, SocialProvider, Target};
pub use remember::KeyValueStore;
pub use strength::StrengthMeter;
pub use submission::{
    Backend, Flow, RegistrationRequest, SignInRequest, SimulatedBackend, SubmissionState, Ticket,
    Timer, ViewLifetime,
};
pub use surface::{AnnotationContent, AnnotationKind, FormSurface, Host};
