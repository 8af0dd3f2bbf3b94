//! Form Field Components
//!
//! Floating-label inputs bound to a string signal, with an inline error
//! line. Border and label turn red while an error is shown.

use leptos::prelude::*;

fn field_class(error: Signal<Option<&'static str>>) -> impl Fn() -> &'static str {
    move || if error.get().is_some() { "form-field has-error" } else { "form-field" }
}

/// Inline error message under a field
#[component]
fn FieldError(error: Signal<Option<&'static str>>) -> impl IntoView {
    move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })
}

/// Single-line input (text, email, tel, password)
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class=field_class(error)>
            <label for=id>{label}</label>
            <input
                id=id
                name=id
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

/// Drop-down over (value, label) options
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div class=field_class(error)>
            <label for=id>{label}</label>
            <select
                id=id
                name=id
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options.iter().map(|&(val, text)| view! {
                    <option value=val>{text}</option>
                }).collect_view()}
            </select>
            <FieldError error=error />
        </div>
    }
}

/// Multi-line input
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <textarea
                id=id
                name=id
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
