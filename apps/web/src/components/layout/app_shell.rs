//! Shared layout wrapper with navigation, content container, and footer. The
//! header links between the sign-in and registration pages; navigation stays
//! client-side.

use crate::app_lib::build_info;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

/// Wraps routes with a header, main content container, and build footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let location = use_location();
    let on_login = move || location.pathname.get() == paths::LOGIN;
    let on_register = move || location.pathname.get() == paths::REGISTER;

    view! {
        <div class="auth-shell">
            <header class="auth-header">
                <nav class="auth-nav">
                    <A href=paths::HOME {..} class="brand" on:click=move |_| set_menu_open.set(false)>
                        <i class="fas fa-door-open"></i>
                        <span>"Gerbang"</span>
                    </A>
                    <button
                        type="button"
                        class="menu-toggle"
                        aria-controls="auth-menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Buka menu"</span>
                        <i class="fas fa-bars"></i>
                    </button>
                    <ul id="auth-menu" class="nav-links" class:open=move || menu_open.get()>
                        <li>
                            <A
                                href=paths::LOGIN
                                {..}
                                class:active=on_login
                                on:click=move |_| set_menu_open.set(false)
                            >
                                "Masuk"
                            </A>
                        </li>
                        <li>
                            <A
                                href=paths::REGISTER
                                {..}
                                class:active=on_register
                                on:click=move |_| set_menu_open.set(false)
                            >
                                "Daftar"
                            </A>
                        </li>
                    </ul>
                </nav>
            </header>
            <main class="auth-main">{children()}</main>
            <footer class="auth-footer">
                <small>
                    {format!("v{} ({})", build_info::VERSION, build_info::GIT_COMMIT_HASH)}
                </small>
            </footer>
        </div>
    }
}
