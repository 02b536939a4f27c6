use crate::components::{
    Alert, AlertKind, AppShell, AuthCard, CheckboxField, SocialButtons, SubmitButton, TextField,
};
use crate::dom::BrowserHost;
use crate::features::forms::FormHandle;
use crate::routes::paths;
use auth_forms::{Checkbox, Field, FormKind};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let host = BrowserHost::new(move |target| navigate(target, Default::default()));

    let content = match FormHandle::new(host) {
        Ok(forms) => {
            forms.attach();
            view! { <LoginCard forms /> }.into_any()
        }
        Err(err) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any(),
    };

    view! { <AppShell>{content}</AppShell> }
}

#[component]
fn LoginCard(forms: FormHandle) -> impl IntoView {
    view! {
        <AuthCard forms title="Selamat Datang Kembali" subtitle="Masuk untuk melanjutkan ke akun Anda">
            <form
                id=FormKind::SignIn.dom_id()
                class="auth-form"
                novalidate
                on:submit=move |event| forms.submit(event, FormKind::SignIn)
            >
                <TextField
                    forms
                    field=Field::Email
                    label="Email"
                    icon="fa-envelope"
                    input_type="email"
                    placeholder="nama@email.com"
                    autocomplete="email"
                />
                <TextField
                    forms
                    field=Field::Password
                    label="Password"
                    icon="fa-lock"
                    placeholder="Masukkan password"
                    autocomplete="current-password"
                />
                <div class="form-options">
                    <CheckboxField forms checkbox=Checkbox::Remember>
                        "Ingat saya"
                    </CheckboxField>
                    <a href="#" class="forgot-link">
                        "Lupa password?"
                    </a>
                </div>
                <SubmitButton label="Masuk" />
            </form>
            <SocialButtons forms />
            <p class="auth-switch">
                "Belum punya akun? "
                <A href=paths::REGISTER>"Daftar sekarang"</A>
            </p>
        </AuthCard>
    }
}
