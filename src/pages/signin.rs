//! Sign-In Page
//!
//! Email and password with a "remember me" flag. Submitting only logs.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::TextField;
use crate::config::REGISTER_PATH;
use crate::form_state::FormErrors;
use crate::schema::{SignInField, SignInInput};

#[component]
pub fn SignInPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);

    let snapshot = move || SignInInput {
        email: email.get(),
        password: password.get(),
        remember: remember.get(),
    };
    let errors = FormErrors::new(snapshot);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        errors.submit("sign-in", snapshot());
    };

    view! {
        <div class="page-center">
            <div class="page-narrow">
                <div class="page-header">
                    <h1>"Sign In"</h1>
                    <p>"Just sign in if you have an account in here. Enjoy our Website"</p>
                </div>

                <div class="card">
                    <form class="card-body stack" on:submit=on_submit novalidate=true>
                        <TextField
                            id="email"
                            label="Your Email / Username"
                            input_type="email"
                            placeholder="soeraji@squareteam.com"
                            value=email
                            error=errors.message(SignInField::Email)
                        />
                        <TextField
                            id="password"
                            label="Enter Password"
                            input_type="password"
                            placeholder="••••••••"
                            value=password
                            error=errors.message(SignInField::Password)
                        />

                        <div class="row-between">
                            <label class="checkbox">
                                <input
                                    id="remember"
                                    type="checkbox"
                                    prop:checked=move || remember.get()
                                    on:change=move |ev| remember.set(event_target_checked(&ev))
                                />
                                "Remember Me"
                            </label>
                            <a href="#" class="link">"Forgot Password"</a>
                        </div>

                        <button type="submit" class="btn btn-primary btn-block">"Login"</button>
                        <p class="footnote">
                            "Don't have account? "
                            <A href=REGISTER_PATH attr:class="link">"Register"</A>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
