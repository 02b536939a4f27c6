//! Form building blocks. Each one renders the ids and classes the controller
//! looks up and forwards its events through a [`FormHandle`].
//!
//! [`FormHandle`]: crate::features::forms::FormHandle

mod card;
mod fields;
mod social;

pub(crate) use card::AuthCard;
pub(crate) use fields::{CheckboxField, SelectField, SubmitButton, TextField};
pub(crate) use social::SocialButtons;
