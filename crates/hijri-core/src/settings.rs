//! Global library settings.
//!
//! [`Settings`] holds the **default calculation method**, used whenever a
//! conversion is requested without an explicit [`CalendarMethod`].  It is a
//! process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! On first access the default is read from the `HIJRI_DEFAULT_METHOD`
//! environment variable (a method code such as `UAQ`); unset or invalid
//! values fall back to [`CalendarMethod::HJCoSA`].

use std::sync::{Mutex, OnceLock, PoisonError};

use crate::method::CalendarMethod;

/// Environment variable consulted when the settings are first created.
pub const DEFAULT_METHOD_ENV: &str = "HIJRI_DEFAULT_METHOD";

/// Process-wide settings used by the hijri-datetime crates.
pub struct Settings {
    default_method: Mutex<CalendarMethod>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            default_method: Mutex::new(method_from_env()),
        })
    }

    /// The method used when none is specified.
    pub fn default_method(&self) -> CalendarMethod {
        *self
            .default_method
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the default method, returning the previous one.
    pub fn set_default_method(&self, method: CalendarMethod) -> CalendarMethod {
        let mut guard = self
            .default_method
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, method)
    }

    /// Reset the default method to [`CalendarMethod::HJCoSA`].
    pub fn reset_default_method(&self) {
        self.set_default_method(CalendarMethod::default());
    }
}

fn method_from_env() -> CalendarMethod {
    match std::env::var(DEFAULT_METHOD_ENV) {
        Ok(raw) => raw.parse().unwrap_or_else(|err| {
            tracing::warn!(value = %raw, %err, "ignoring {DEFAULT_METHOD_ENV}");
            CalendarMethod::default()
        }),
        Err(_) => CalendarMethod::default(),
    }
}

/// Sets the default method for the lifetime of the guard.
///
/// The previous default is restored on drop.
#[must_use = "the default is restored as soon as the guard is dropped"]
pub struct ScopedDefaultMethod {
    previous: CalendarMethod,
}

impl ScopedDefaultMethod {
    /// Make `method` the default until the returned guard is dropped.
    pub fn new(method: CalendarMethod) -> Self {
        Self {
            previous: Settings::instance().set_default_method(method),
        }
    }
}

impl Drop for ScopedDefaultMethod {
    fn drop(&mut self) {
        Settings::instance().set_default_method(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the singleton is shared by every test thread.
    #[test]
    fn scoped_override_restores_previous() {
        let settings = Settings::instance();
        let before = settings.default_method();
        {
            let _guard = ScopedDefaultMethod::new(CalendarMethod::Diyanet);
            assert_eq!(settings.default_method(), CalendarMethod::Diyanet);
            {
                let _inner = ScopedDefaultMethod::new(CalendarMethod::Mathematical);
                assert_eq!(settings.default_method(), CalendarMethod::Mathematical);
            }
            assert_eq!(settings.default_method(), CalendarMethod::Diyanet);
        }
        assert_eq!(settings.default_method(), before);

        let prev = settings.set_default_method(CalendarMethod::UmmAlQura);
        assert_eq!(prev, before);
        settings.reset_default_method();
        assert_eq!(settings.default_method(), CalendarMethod::HJCoSA);
        settings.set_default_method(before);
    }
}
