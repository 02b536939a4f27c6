use crate::components::{
    Alert, AlertKind, AppShell, AuthCard, CheckboxField, SelectField, SubmitButton, TextField,
};
use crate::dom::BrowserHost;
use crate::features::forms::FormHandle;
use crate::routes::paths;
use auth_forms::{Checkbox, Field, FormKind};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

const USER_TYPES: &[(&str, &str)] = &[
    ("personal", "Pribadi"),
    ("business", "Bisnis"),
    ("student", "Pelajar / Mahasiswa"),
];

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let host = BrowserHost::new(move |target| navigate(target, Default::default()));

    let content = match FormHandle::new(host) {
        Ok(forms) => {
            forms.attach();
            view! { <RegisterCard forms /> }.into_any()
        }
        Err(err) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any(),
    };

    view! { <AppShell>{content}</AppShell> }
}

#[component]
fn RegisterCard(forms: FormHandle) -> impl IntoView {
    view! {
        <AuthCard forms title="Buat Akun Baru" subtitle="Isi data di bawah untuk mendaftar">
            <form
                id=FormKind::Register.dom_id()
                class="auth-form"
                novalidate
                on:submit=move |event| forms.submit(event, FormKind::Register)
            >
                <div class="form-row">
                    <TextField
                        forms
                        field=Field::FirstName
                        label="Nama Depan"
                        icon="fa-user"
                        placeholder="Nama depan"
                        autocomplete="given-name"
                    />
                    <TextField
                        forms
                        field=Field::LastName
                        label="Nama Belakang"
                        icon="fa-user"
                        placeholder="Nama belakang"
                        autocomplete="family-name"
                    />
                </div>
                <TextField
                    forms
                    field=Field::Email
                    label="Email"
                    icon="fa-envelope"
                    input_type="email"
                    placeholder="nama@email.com"
                    autocomplete="email"
                />
                <SelectField
                    forms
                    field=Field::UserType
                    label="Tipe Pengguna"
                    placeholder="Pilih tipe pengguna"
                    options=USER_TYPES
                />
                <TextField
                    forms
                    field=Field::Password
                    label="Password"
                    icon="fa-lock"
                    placeholder="Minimal 8 karakter"
                    autocomplete="new-password"
                />
                <TextField
                    forms
                    field=Field::ConfirmPassword
                    label="Konfirmasi Password"
                    icon="fa-lock"
                    placeholder="Ulangi password"
                    autocomplete="new-password"
                />
                <CheckboxField forms checkbox=Checkbox::Terms>
                    "Saya menyetujui "
                    <a href="#">"Syarat & Ketentuan"</a>
                </CheckboxField>
                <SubmitButton label="Daftar" />
            </form>
            <p class="auth-switch">
                "Sudah punya akun? "
                <A href=paths::LOGIN>"Masuk di sini"</A>
            </p>
        </AuthCard>
    }
}
