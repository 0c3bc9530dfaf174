//! # wallclock-engine
//!
//! Token-based calendar formatting, parsing, and timezone-offset resolution.
//!
//! The engine renders millisecond instants into strings from patterns built
//! of calendar tokens (`YYYY-MM-DD HH:mm:ss Z`, …), recovers instants from
//! such strings, and derives a zone's UTC offset at any instant by diffing
//! wall clocks — no bundled timezone database; offset resolution delegates to
//! the host civil calendar (chrono / chrono-tz).
//!
//! Everything is synchronous and side-effect free: instants and civil
//! components are immutable values, no module-level state is consulted, and
//! all functions are safe to call concurrently.
//!
//! ## Modules
//!
//! - [`token`] — the format-token vocabulary and the longest-match scanner
//! - [`offset`] — per-instant UTC offset resolution for IANA zones
//! - [`format`] — instant + pattern + {locale, timezone} → string
//! - [`parse`] — string + pattern → instant (exact inverse of formatting)
//! - [`timepoint`] — immutable fluent wrapper with arithmetic, boundary, and
//!   comparison operations
//! - [`civil`] — the `Instant` and `CivilComponents` value types
//! - [`error`] — error types
//!
//! Month and weekday name tables live in a private `locale` module; the
//! formatter and parser reach them through their `locale` options.

pub mod civil;
pub mod error;
pub mod format;
pub mod offset;
pub mod parse;
pub mod timepoint;
pub mod token;

mod locale;

pub use civil::{CivilComponents, Instant};
pub use error::{ClockError, Result};
pub use format::{format, FormatOptions};
pub use offset::{resolve_offset, ZoneOffset};
pub use parse::parse;
pub use timepoint::{leap_year, Timepoint};
pub use token::{tokenize, PatternItem, Token};
