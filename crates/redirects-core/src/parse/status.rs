//! Status field decoding.
//!
//! The third field of a rule is an integer status code, optionally followed
//! by a `!` force marker (e.g. `200!`).

use super::error::StatusError;

/// The status used when a rule has no status field.
pub const DEFAULT_STATUS: i64 = 301;

/// The suffix marking a forced rule.
pub const FORCE_MARKER: char = '!';

/// Decodes a status field into `(status, force)`.
///
/// When the field ends with `!` the rule is forced and every `!` in the
/// field is removed before the integer conversion, so `2!00!` decodes to
/// `(200, true)`. A `!` that is not at the end is left in place and makes
/// the conversion fail. The resulting integer is not range-checked.
pub fn parse_status(field: &str) -> Result<(i64, bool), StatusError> {
    let (digits, force) = if field.ends_with(FORCE_MARKER) {
        (field.replace(FORCE_MARKER, ""), true)
    } else {
        (field.to_string(), false)
    };

    let status = digits
        .parse::<i64>()
        .map_err(|source| StatusError::new(field, source))?;

    Ok((status, force))
}
