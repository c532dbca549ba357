//! Translation of raw responses into values or typed errors.

use serde_json::Value;

use crate::error::{ClubhouseError, Result, DEFAULT_ERROR_MESSAGE};
use crate::transport::HttpResponse;

/// Interpret a transport response.
///
/// A 2xx response yields its decoded JSON body, or `None` when the body is
/// empty or `null`. Any other status yields exactly one API error, carrying
/// the body's `message` field when present.
///
/// # Errors
///
/// Returns the API error matching the status code, or
/// [`ClubhouseError::Decode`] if a 2xx body is not valid JSON.
pub(crate) fn interpret(response: &HttpResponse) -> Result<Option<Value>> {
    if !response.is_success() {
        let message = error_message(&response.body);
        return Err(ClubhouseError::from_status(response.status, message));
    }

    if is_blank(&response.body) {
        return Ok(None);
    }

    match serde_json::from_slice(&response.body).map_err(ClubhouseError::Decode)? {
        Value::Null => Ok(None),
        value => Ok(Some(value)),
    }
}

fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|json| json.get("message"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_ERROR_MESSAGE)
        .to_string()
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}
