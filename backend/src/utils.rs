use crate::error::ApiError;
use shared::models::RecordId;

/// Reads the `id` query parameter.
///
/// In lenient mode a missing or non-numeric value becomes `0`, an id the
/// store never assigns, so the request ends in a 404 for that resource.
/// Strict mode rejects it with a 400 instead.
pub fn parse_record_id(raw: Option<&str>, strict: bool) -> Result<RecordId, ApiError> {
    match raw.map(|s| s.parse::<RecordId>()) {
        Some(Ok(id)) => Ok(id),
        _ if strict => Err(ApiError::InvalidId),
        _ => Ok(0),
    }
}
