use crate::features::forms::FormHandle;
use auth_forms::FormEvent;
use leptos::prelude::*;

/// Card container with the hover lift. `index` is the card's position among
/// the page's `.auth-card` elements.
#[component]
pub fn AuthCard(
    forms: FormHandle,
    #[prop(default = 0)] index: usize,
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="auth-card"
            on:mouseenter=move |_| forms.fire(FormEvent::CardHover { card: index, entered: true })
            on:mouseleave=move |_| forms.fire(FormEvent::CardHover { card: index, entered: false })
        >
            <div class="auth-card-header">
                <h1>{title}</h1>
                <p>{subtitle}</p>
            </div>
            {children()}
        </section>
    }
}
