//! Registration Page
//!
//! Eight-field sign-up form. Submitting only logs; "Login" navigates to
//! sign-in without validating.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{SelectField, TextAreaField, TextField};
use crate::config::{COUNTRIES, SIGNIN_PATH};
use crate::form_state::FormErrors;
use crate::schema::{RegisterField, RegisterInput};

/// Field signals of the registration form
#[derive(Clone, Copy)]
struct RegisterForm {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    phone: RwSignal<String>,
    country: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    confirm_password: RwSignal<String>,
    about: RwSignal<String>,
}

impl RegisterForm {
    fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            country: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
            about: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> RegisterInput {
        let about = self.about.get();
        RegisterInput {
            first_name: self.first_name.get(),
            last_name: self.last_name.get(),
            phone: self.phone.get(),
            country: self.country.get(),
            email: self.email.get(),
            password: self.password.get(),
            confirm_password: self.confirm_password.get(),
            about: (!about.is_empty()).then_some(about),
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RegisterForm::new();
    let errors = FormErrors::new(move || form.snapshot());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        errors.submit("register", form.snapshot());
    };

    let go_to_signin = move |_| navigate(SIGNIN_PATH, Default::default());

    view! {
        <div class="page-center">
            <div class="page-wide">
                <div class="page-header">
                    <h1>"Register"</h1>
                    <p>"Let’s sign up first for enter into Square Website. Uh She Up!"</p>
                </div>

                <div class="card">
                    <form on:submit=on_submit novalidate=true>
                        <div class="card-body grid-2">
                            <TextField
                                id="firstName"
                                label="First Name"
                                placeholder="Soeraji"
                                value=form.first_name
                                error=errors.message(RegisterField::FirstName)
                            />
                            <TextField
                                id="lastName"
                                label="Last Name"
                                placeholder="Doe"
                                value=form.last_name
                                error=errors.message(RegisterField::LastName)
                            />
                            <TextField
                                id="phone"
                                label="Phone Number"
                                input_type="tel"
                                placeholder="+62"
                                value=form.phone
                                error=errors.message(RegisterField::Phone)
                            />
                            <SelectField
                                id="country"
                                label="Your Country"
                                options=COUNTRIES
                                value=form.country
                                error=errors.message(RegisterField::Country)
                            />
                            <div class="span-2">
                                <TextField
                                    id="email"
                                    label="Mail Address"
                                    input_type="email"
                                    placeholder="soeraji@squareteam.com"
                                    value=form.email
                                    error=errors.message(RegisterField::Email)
                                />
                            </div>
                            <TextField
                                id="password"
                                label="Password"
                                input_type="password"
                                placeholder="••••••••"
                                value=form.password
                                error=errors.message(RegisterField::Password)
                            />
                            <TextField
                                id="confirmPassword"
                                label="Confirm Password"
                                input_type="password"
                                placeholder="••••••••"
                                value=form.confirm_password
                                error=errors.message(RegisterField::ConfirmPassword)
                            />
                            <div class="span-2">
                                <TextAreaField
                                    id="about"
                                    label="Tell us about yourself"
                                    placeholder="Hello my name..."
                                    value=form.about
                                />
                            </div>
                        </div>

                        <div class="card-footer row-between">
                            <button type="button" class="btn btn-outline" on:click=go_to_signin>
                                "Login"
                            </button>
                            <button type="submit" class="btn btn-primary">"Register"</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
