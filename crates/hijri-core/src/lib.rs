//! # hijri-core
//!
//! Core types, settings, and error definitions for hijri-datetime.
//!
//! This crate provides the building blocks shared by the other crates in
//! the workspace: the day-ordinal alias, the error taxonomy, the
//! [`CalendarMethod`] enum, process-wide [`Settings`], and the
//! [`RelinkableHandle`] used to publish datasets atomically.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Atomically relinkable shared handle.
pub mod handle;

/// Hijri calculation methods.
pub mod method;

/// Design patterns: singleton.
pub mod patterns;

/// Global library settings (default calculation method).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Day count since the Hijra epoch: ordinal 0 is 622-07-19 (proleptic
/// Gregorian), the first day of the Hijri calendar.
pub type Ordinal = i64;

/// A signed number of days.
pub type Days = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use handle::RelinkableHandle;
pub use method::CalendarMethod;
pub use settings::{ScopedDefaultMethod, Settings};
