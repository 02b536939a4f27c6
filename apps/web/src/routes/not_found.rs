//! Fallback page for unknown routes.

use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="not-found">
                <h1>"404"</h1>
                <p>"Halaman yang Anda cari tidak ditemukan."</p>
                <div class="not-found-actions">
                    <A href=paths::HOME {..} class="btn btn-primary">
                        "Ke Beranda"
                    </A>
                    <button
                        type="button"
                        class="btn btn-outline"
                        on:click=move |_| {
                            if let Some(history) = web_sys::window()
                                .and_then(|window| window.history().ok())
                            {
                                let _ = history.back();
                            }
                        }
                    >
                        "Kembali"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
