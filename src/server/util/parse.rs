use chrono::NaiveDateTime;

use crate::server::error::AppError;

/// Textual brawl date pattern, `YYYY.MM.DD HH:MM:SS`.
pub const BRAWL_DATE_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Parses a brawl date in the strict `YYYY.MM.DD HH:MM:SS` pattern.
///
/// Every component must be zero-padded to its full width; chrono alone would
/// accept `2020.1.1 9:00:00`.
///
/// # Arguments
/// - `value` - Date string from the request
///
/// # Returns
/// - `Ok(NaiveDateTime)` - Successfully parsed date
/// - `Err(AppError::BadRequest)` - Value does not match the pattern or is not a
///   real calendar date
pub fn parse_brawl_date(value: &str) -> Result<NaiveDateTime, AppError> {
    let invalid = || {
        AppError::BadRequest(format!(
            "Invalid date '{}', expected format YYYY.MM.DD HH:MM:SS",
            value
        ))
    };

    let well_formed = value.len() == 19
        && value.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '.',
            10 => c == ' ',
            13 | 16 => c == ':',
            _ => c.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDateTime::parse_from_str(value, BRAWL_DATE_FORMAT).map_err(|_| invalid())
}

/// Formats a brawl date back into the `YYYY.MM.DD HH:MM:SS` pattern.
pub fn format_brawl_date(date: &NaiveDateTime) -> String {
    date.format(BRAWL_DATE_FORMAT).to_string()
}
