//! Form Schemas
//!
//! Input models for the registration and sign-in forms and their rule sets.

use serde::{Serialize, Serializer};

use crate::config::{MIN_PASSWORD_CHARS, MIN_PHONE_CHARS};
use crate::validation::{Check, CrossFieldRule, FieldRule, FormField, FormSchema};

/// Serialize secrets as a fixed mask so submit logs never carry them
fn redacted<T: ?Sized, S: Serializer>(_: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("********")
}

// ========================
// Registration
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegisterField {
    FirstName,
    LastName,
    Phone,
    Country,
    Email,
    Password,
    ConfirmPassword,
    About,
}

impl FormField for RegisterField {
    fn name(self) -> &'static str {
        match self {
            RegisterField::FirstName => "firstName",
            RegisterField::LastName => "lastName",
            RegisterField::Phone => "phone",
            RegisterField::Country => "country",
            RegisterField::Email => "email",
            RegisterField::Password => "password",
            RegisterField::ConfirmPassword => "confirmPassword",
            RegisterField::About => "about",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub country: String,
    pub email: String,
    #[serde(serialize_with = "redacted")]
    pub password: String,
    #[serde(serialize_with = "redacted")]
    pub confirm_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

const REGISTER_RULES: &[FieldRule<RegisterField>] = &[
    FieldRule::new(RegisterField::FirstName, Check::Required, "First name required"),
    FieldRule::new(RegisterField::LastName, Check::Required, "Last name required"),
    FieldRule::new(RegisterField::Phone, Check::MinChars(MIN_PHONE_CHARS), "Phone number not valid"),
    FieldRule::new(RegisterField::Country, Check::Required, "Country required"),
    FieldRule::new(RegisterField::Email, Check::Email, "Invalid email"),
    FieldRule::new(RegisterField::Password, Check::MinChars(MIN_PASSWORD_CHARS), "Min 6 chars"),
    FieldRule::new(RegisterField::ConfirmPassword, Check::MinChars(MIN_PASSWORD_CHARS), "Confirm password"),
];

const REGISTER_CROSS_RULES: &[CrossFieldRule<RegisterInput>] = &[CrossFieldRule {
    target: RegisterField::ConfirmPassword,
    holds: |input: &RegisterInput| input.password == input.confirm_password,
    message: "Passwords do not match",
}];

impl FormSchema for RegisterInput {
    type Field = RegisterField;

    fn field_rules() -> &'static [FieldRule<RegisterField>] {
        REGISTER_RULES
    }

    fn cross_field_rules() -> &'static [CrossFieldRule<Self>] {
        REGISTER_CROSS_RULES
    }

    fn value(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::FirstName => &self.first_name,
            RegisterField::LastName => &self.last_name,
            RegisterField::Phone => &self.phone,
            RegisterField::Country => &self.country,
            RegisterField::Email => &self.email,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
            RegisterField::About => self.about.as_deref().unwrap_or(""),
        }
    }
}

// ========================
// Sign-in
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignInField {
    Email,
    Password,
}

impl FormField for SignInField {
    fn name(self) -> &'static str {
        match self {
            SignInField::Email => "email",
            SignInField::Password => "password",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignInInput {
    pub email: String,
    #[serde(serialize_with = "redacted")]
    pub password: String,
    pub remember: bool,
}

const SIGNIN_RULES: &[FieldRule<SignInField>] = &[
    FieldRule::new(SignInField::Email, Check::Email, "Please enter a valid email"),
    FieldRule::new(
        SignInField::Password,
        Check::MinChars(MIN_PASSWORD_CHARS),
        "Password must be at least 6 characters",
    ),
];

impl FormSchema for SignInInput {
    type Field = SignInField;

    fn field_rules() -> &'static [FieldRule<SignInField>] {
        SIGNIN_RULES
    }

    fn value(&self, field: SignInField) -> &str {
        match field {
            SignInField::Email => &self.email,
            SignInField::Password => &self.password,
        }
    }
}
