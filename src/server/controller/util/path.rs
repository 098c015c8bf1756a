use crate::server::error::{provider::ProviderError, Error};

/// Longest identifier accepted in a request path.
pub const MAX_RESOURCE_ID_LEN: usize = 128;

/// Validates a provider resource identifier before it is interpolated into an upstream URL.
///
/// Identifiers must be non-empty, at most [`MAX_RESOURCE_ID_LEN`] characters and contain only
/// ASCII alphanumerics, `-` or `_`.
pub fn validate_resource_id<'a>(field: &'static str, value: &'a str) -> Result<&'a str, Error> {
    let valid = !value.is_empty()
        && value.len() <= MAX_RESOURCE_ID_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if !valid {
        return Err(ProviderError::InvalidIdentifier {
            field,
            value: value.to_string(),
        }
        .into());
    }

    Ok(value)
}
