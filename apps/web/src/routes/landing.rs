use crate::components::{Alert, AlertKind, AppShell};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="landing">
                <h1>"Gerbang"</h1>
                <Alert
                    kind=AlertKind::Info
                    message="Halaman ini adalah demo; tidak ada data yang dikirim ke server.".to_string()
                />
                <div class="landing-actions">
                    <A href=paths::LOGIN {..} class="btn btn-primary">
                        "Masuk"
                    </A>
                    <A href=paths::REGISTER {..} class="btn btn-outline">
                        "Daftar"
                    </A>
                </div>
            </section>
        </AppShell>
    }
}
