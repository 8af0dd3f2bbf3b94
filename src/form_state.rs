//! Form Error State
//!
//! Reactive wrapper around `validate` shared by the form pages. Validation
//! runs on submit; after the first attempt it re-runs on every change.

use leptos::prelude::*;
use serde::Serialize;

use crate::validation::{validate, FieldErrors, FormSchema};

pub struct FormErrors<S: FormSchema> {
    errors: RwSignal<FieldErrors<S::Field>>,
    attempted: RwSignal<bool>,
}

impl<S: FormSchema> Clone for FormErrors<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: FormSchema> Copy for FormErrors<S> {}

impl<S: FormSchema + Serialize> FormErrors<S> {
    /// Create the error state and re-validate whenever `input` changes
    /// after the first submit
    pub fn new(input: impl Fn() -> S + 'static) -> Self {
        let this = Self::detached();
        Effect::new(move |_| this.revalidate(&input()));
        this
    }

    /// Error state with no change tracking
    pub fn detached() -> Self {
        Self {
            errors: RwSignal::new(FieldErrors::default()),
            attempted: RwSignal::new(false),
        }
    }

    /// Refresh errors for the current input, once a submit was attempted
    pub fn revalidate(&self, input: &S) {
        if self.attempted.get() {
            self.errors.set(validate(input).err().unwrap_or_default());
        }
    }

    /// Validate on submit; returns the input only when every rule passes
    pub fn submit(&self, form: &'static str, input: S) -> Option<S> {
        self.attempted.set(true);
        match validate(&input) {
            Ok(()) => {
                self.errors.set(FieldErrors::default());
                match serde_json::to_string(&input) {
                    Ok(json) => log::info!("{form} submitted: {json}"),
                    Err(e) => log::warn!("{form} submitted, log encoding failed: {e}"),
                }
                Some(input)
            }
            Err(errors) => {
                log::debug!("{form} blocked: {errors}");
                self.errors.set(errors);
                None
            }
        }
    }

    /// Error message for a field, if any
    pub fn message(&self, field: S::Field) -> Signal<Option<&'static str>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.message(field)))
    }
}
