use crate::features::forms::FormHandle;
use auth_forms::{FormEvent, SocialProvider};
use leptos::prelude::*;

#[component]
pub fn SocialButtons(forms: FormHandle) -> impl IntoView {
    view! {
        <div class="divider">
            <span>"atau"</span>
        </div>
        <div class="social-login">
            {SocialProvider::ALL
                .into_iter()
                .map(|provider| {
                    view! {
                        <button
                            type="button"
                            class=format!("social-btn {}", provider.class())
                            on:click=move |_| forms.fire(FormEvent::Social(provider))
                        >
                            <i class=format!("fab fa-{}", provider.class())></i>
                            {provider.name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
