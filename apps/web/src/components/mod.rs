//! Shared UI components exported for routes.

pub(crate) mod form;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use form::{AuthCard, CheckboxField, SelectField, SocialButtons, SubmitButton, TextField};
pub(crate) use layout::AppShell;
pub(crate) use ui::{Alert, AlertKind};
