//! Singleton pattern.
//!
//! The idiomatic Rust singleton is a `static` `std::sync::LazyLock<T>`.
//! This module re-exports `LazyLock` and provides a convenience macro
//! [`define_singleton!`] for declaring singletons with a chosen visibility.

/// Re-export `LazyLock` as the canonical singleton container.
pub use std::sync::LazyLock;

/// Define a singleton instance of type `$ty`.
///
/// The instance is lazily initialised on first access via `LazyLock`.
///
/// # Example
/// ```
/// use hijri_core::define_singleton;
///
/// struct Registry { data: Vec<String> }
/// define_singleton!(REGISTRY, Registry, Registry { data: Vec::new() });
///
/// assert!(REGISTRY.data.is_empty());
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($vis:vis $name:ident, $ty:ty, $init:expr) => {
        /// Lazily-initialised global singleton.
        $vis static $name: std::sync::LazyLock<$ty> = std::sync::LazyLock::new(|| $init);
    };
}
