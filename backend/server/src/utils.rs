use crate::error::AppError;

/// Parses an optional heat bound. Absent or blank falls back to `default`,
/// anything else must be a whole number.
pub fn parse_heat(param: &'static str, raw: Option<&str>, default: i32) -> Result<i32, AppError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };

    raw.parse().map_err(|_| AppError::InvalidHeat {
        param,
        value: raw.to_string(),
    })
}
