use serde_json::Value;

use crate::AnkiError;

/// Checks the `{result, error}` envelope and hands back `result`.
pub fn validate_response(response: Value) -> Result<Value, AnkiError> {
    let Value::Object(mut fields) = response else {
        return Err(AnkiError::UnexpectedFieldCount(0));
    };
    if fields.len() != 2 {
        return Err(AnkiError::UnexpectedFieldCount(fields.len()));
    }
    let error = fields.remove("error").ok_or(AnkiError::MissingField("error"))?;
    let result = fields
        .remove("result")
        .ok_or(AnkiError::MissingField("result"))?;
    match error {
        Value::Null => Ok(result),
        Value::String(message) => Err(AnkiError::Service(message)),
        other => Err(AnkiError::Service(other.to_string())),
    }
}
