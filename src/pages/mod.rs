//! Screens
//!
//! One component per route.

mod not_found;
mod register;
mod signin;
mod todo;

pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use signin::SignInPage;
pub use todo::TodoPage;
