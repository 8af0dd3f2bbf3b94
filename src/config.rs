//! App Configuration
//!
//! Compile-time settings: routes, validation thresholds, seed data.

/// Route paths
pub const SIGNIN_PATH: &str = "/signin";
pub const REGISTER_PATH: &str = "/register";
pub const TODO_PATH: &str = "/todo";

/// Minimum characters for passwords (both forms)
pub const MIN_PASSWORD_CHARS: usize = 6;
/// Minimum characters for a registration phone number
pub const MIN_PHONE_CHARS: usize = 8;

/// Country options for registration: (value, label)
pub const COUNTRIES: &[(&str, &str)] = &[
    ("", "Select Country"),
    ("Indonesia", "Indonesia"),
    ("Singapore", "Singapore"),
    ("Malaysia", "Malaysia"),
    ("Other", "Other"),
];

/// Tasks shown when the to-do page opens: (id, text, completed)
pub const SEED_TASKS: &[(u64, &str, bool)] = &[
    (1, "Hello", true),
    (2, "This", false),
    (3, "Good", false),
];

/// Navbar avatar source
pub const AVATAR_URL: &str = "https://i.pravatar.cc/40";

/// Console log level
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
