//! Log sanitization utilities
//!
//! Keeps policy documents, WAF rule bodies and credentials from being fully
//! exposed in debug/error logs.

/// Number of characters kept by [`truncate_for_log`].
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters left visible by [`mask_secret`].
const MASK_VISIBLE: usize = 4;

/// Cut a response or request body down to a loggable size.
///
/// Bodies up to `TRUNCATE_LIMIT` characters are returned as-is; longer ones
/// keep their head and report the full byte length.
pub fn truncate_for_log(body: &str) -> String {
    match body.char_indices().nth(TRUNCATE_LIMIT) {
        None => body.to_string(),
        Some((cut, _)) => format!(
            "{}... [truncated, total {} bytes]",
            &body[..cut],
            body.len()
        ),
    }
}

/// Mask a credential for `Debug` output, keeping only a short prefix.
pub fn mask_secret(s: &str) -> String {
    if s.chars().count() <= MASK_VISIBLE * 2 {
        return "****".to_string();
    }
    let prefix: String = s.chars().take(MASK_VISIBLE).collect();
    format!("{prefix}****")
}
