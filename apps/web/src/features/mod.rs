//! Page features built on the form controller.

pub(crate) mod forms;
