use crate::features::forms::FormHandle;
use auth_forms::{Checkbox, Field, FormEvent};
use leptos::prelude::*;

/// Text, email, or password input inside a `.form-group`. Secret fields get a
/// `.toggle-password` icon right after the input.
#[component]
pub fn TextField(
    forms: FormHandle,
    field: Field,
    label: &'static str,
    icon: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = "off")] autocomplete: &'static str,
) -> impl IntoView {
    let input_type = if field.is_secret() {
        "password"
    } else {
        input_type
    };

    view! {
        <div class="form-group">
            <label for=field.dom_id()>{label}</label>
            <div class="input-wrapper">
                <i class=format!("fas {icon} input-icon")></i>
                <input
                    id=field.dom_id()
                    name=field.dom_id()
                    type=input_type
                    placeholder=placeholder
                    autocomplete=autocomplete
                    on:input=move |_| forms.fire(FormEvent::Input(field))
                    on:focus=move |_| forms.fire(FormEvent::Focus(field))
                    on:blur=move |_| forms.fire(FormEvent::Blur(field))
                />
                {field
                    .is_secret()
                    .then(|| {
                        view! {
                            <i
                                class="fas fa-eye toggle-password"
                                on:click=move |_| forms.fire(FormEvent::TogglePassword(field))
                            ></i>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
pub fn SelectField(
    forms: FormHandle,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.dom_id()>{label}</label>
            <select
                id=field.dom_id()
                name=field.dom_id()
                on:input=move |_| forms.fire(FormEvent::Input(field))
                on:focus=move |_| forms.fire(FormEvent::Focus(field))
                on:blur=move |_| forms.fire(FormEvent::Blur(field))
            >
                <option value="">{placeholder}</option>
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Checkbox inside a `.checkbox-container`. Only the remember box reports
/// changes; the terms box is read at submit time.
#[component]
pub fn CheckboxField(forms: FormHandle, checkbox: Checkbox, children: Children) -> impl IntoView {
    view! {
        <label class="checkbox-container">
            <input
                id=checkbox.dom_id()
                type="checkbox"
                on:change=move |_| {
                    if checkbox == Checkbox::Remember {
                        forms.fire(FormEvent::RememberChanged);
                    }
                }
            />
            <span class="checkmark"></span>
            {children()}
        </label>
    }
}

#[component]
pub fn SubmitButton(label: &'static str) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary">
            {label}
        </button>
    }
}
