//! # Response Shape Validation
//!
//! Assertions over [`ApiResponse`] status codes and JSON shapes, plus helpers
//! that pull identifiers out of the loosely-typed payloads the API returns.
//!
//! Ids arrive either as JSON strings or as integers (serial primary keys);
//! everything here normalizes them to `String`.

use reqwest::StatusCode;
use serde_json::{Map, Value};

use crate::error::{ClientError, ClientResult};
use crate::types::ApiResponse;

/// Require an exact status code
pub fn expect_status(resp: &ApiResponse, expected: StatusCode) -> ClientResult<()> {
    if resp.status == expected {
        Ok(())
    } else {
        Err(ClientError::unexpected_status(
            &resp.context,
            expected.as_u16().to_string(),
            resp.status.as_u16(),
        ))
    }
}

/// Require one of several status codes
pub fn expect_status_in(resp: &ApiResponse, allowed: &[StatusCode]) -> ClientResult<()> {
    if allowed.contains(&resp.status) {
        return Ok(());
    }
    let expected = allowed
        .iter()
        .map(|s| s.as_u16().to_string())
        .collect::<Vec<_>>()
        .join(" or ");
    Err(ClientError::unexpected_status(
        &resp.context,
        expected,
        resp.status.as_u16(),
    ))
}

/// Require a JSON content type
pub fn expect_json_content_type(resp: &ApiResponse) -> ClientResult<()> {
    if resp.is_json() {
        Ok(())
    } else {
        Err(ClientError::assertion(
            &resp.context,
            format!(
                "expected JSON response, got Content-Type: {}",
                resp.content_type.as_deref().unwrap_or("<none>")
            ),
        ))
    }
}

/// Require a parsed JSON body
pub fn expect_json_body(resp: &ApiResponse) -> ClientResult<&Value> {
    match (&resp.body, &resp.json_error) {
        (Some(body), _) => Ok(body),
        (None, Some(err)) => Err(ClientError::assertion(
            &resp.context,
            format!("response is not valid JSON: {}", err),
        )),
        (None, None) => Err(ClientError::assertion(&resp.context, "response body is empty")),
    }
}

/// Require a JSON object
pub fn expect_object<'a>(value: &'a Value, context: &str) -> ClientResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ClientError::assertion(context, format!("response JSON is not an object: {}", kind_of(value))))
}

/// Require a JSON object with at least one key
pub fn expect_non_empty_object<'a>(
    value: &'a Value,
    context: &str,
) -> ClientResult<&'a Map<String, Value>> {
    let object = expect_object(value, context)?;
    if object.is_empty() {
        return Err(ClientError::assertion(context, "response JSON object is empty"));
    }
    Ok(object)
}

/// Require `field` to be present and hold an array
pub fn expect_array_field<'a>(
    value: &'a Value,
    field: &str,
    context: &str,
) -> ClientResult<&'a Vec<Value>> {
    let object = expect_object(value, context)?;
    match object.get(field) {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(ClientError::assertion(
            context,
            format!("'{}' is not a list: {}", field, kind_of(other)),
        )),
        None => Err(ClientError::assertion(
            context,
            format!("response JSON does not contain '{}' key", field),
        )),
    }
}

/// Require `field` to be a non-empty string and return it
pub fn expect_non_empty_string<'a>(
    value: &'a Value,
    field: &str,
    context: &str,
) -> ClientResult<&'a str> {
    match value.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        Some(Value::String(_)) => Err(ClientError::invalid_response(field, "empty string")),
        Some(other) => Err(ClientError::invalid_response(
            field,
            format!("expected string, got {} ({})", kind_of(other), context),
        )),
        None => Err(ClientError::invalid_response(
            field,
            format!("missing ({})", context),
        )),
    }
}

/// Accept a list whose items are all objects, or a non-empty object
pub fn expect_list_of_objects_or_non_empty_object(value: &Value, context: &str) -> ClientResult<()> {
    match value {
        Value::Array(items) => {
            if let Some((index, item)) = items.iter().enumerate().find(|(_, item)| !item.is_object()) {
                return Err(ClientError::assertion(
                    context,
                    format!("item {} is not an object: {}", index, kind_of(item)),
                ));
            }
            Ok(())
        }
        Value::Object(_) => expect_non_empty_object(value, context).map(|_| ()),
        other => Err(ClientError::assertion(
            context,
            format!("response should be a list or object, got {}", kind_of(other)),
        )),
    }
}

/// Normalize a JSON id (non-empty string or integer) to a string
pub fn json_id_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

/// First usable id field of an object, in priority order
fn first_id(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .find_map(json_id_to_string)
}

/// Pull a company id out of a `/api/companies` response
///
/// Accepts a bare list, `{"companies": [...]}`, or a single company object.
pub fn extract_company_id(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items.first().and_then(|c| first_id(c, &["id", "company_id"])),
        Value::Object(object) => match object.get("companies") {
            Some(Value::Array(items)) => items.first().and_then(|c| first_id(c, &["id", "company_id"])),
            _ => first_id(value, &["id"]),
        },
        _ => None,
    }
}

/// Pull a company id out of a `/api/profile` response, top-level or under `user`
pub fn extract_profile_company_id(value: &Value) -> Option<String> {
    first_id(value, &["company_id", "id"]).or_else(|| {
        value
            .get("user")
            .and_then(|user| first_id(user, &["company_id", "id"]))
    })
}

/// Pull the id of a created resource: `id`, `<wrapper>_id`, or `<wrapper>.id`
pub fn extract_created_id(value: &Value, wrapper: &str) -> Option<String> {
    let wrapped_key = format!("{}_id", wrapper);
    first_id(value, &["id", wrapped_key.as_str()])
        .or_else(|| value.get(wrapper).and_then(|inner| first_id(inner, &["id"])))
}

/// Read a number or numeric string as `f64`
pub fn json_number_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Whether a JSON value equals `expected` once ids are normalized
pub fn json_matches_id(value: &Value, expected: &str) -> bool {
    json_id_to_string(value).as_deref() == Some(expected)
}

/// Short name of a JSON value's type for assertion messages
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
