use crate::server::error::AppError;

/// Parses a todo identifier from a path segment.
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(u32)` - Successfully parsed non-negative identifier
/// - `Err(AppError::BadRequest)` - Not a base-10 integer within the `u32` range, or
///   carries a sign
pub fn parse_id(value: &str) -> Result<u32, AppError> {
    let invalid = || AppError::BadRequest("Invalid ID".to_string());

    if !value.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid());
    }

    value.parse::<u32>().map_err(|_| invalid())
}
