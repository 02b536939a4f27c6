//! Inline banners for page-level problems, such as a missing document. Form
//! outcomes use the browser's blocking alert instead.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => "alert alert-error",
        AlertKind::Info => "alert alert-info",
    };

    view! { <div class=class role="alert">{message}</div> }
}
