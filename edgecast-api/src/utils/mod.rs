//! Utility modules.

/// Serde helpers for identifiers the API returns as either strings or numbers.
pub mod id;

/// Serde helper that reads JSON `null` collections as empty.
pub mod nullable;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
