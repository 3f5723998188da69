use super::AppState;
use crate::app::{contact_create, ContactCreateReq, ContactCreatedDto};
use crate::error::AppError;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

const INVALID_BODY_MESSAGE: &str = "Invalid JSON body";

/// Only a JSON object whose known fields are strings or null gets through.
fn decode_request(body: &[u8]) -> Result<ContactCreateReq, AppError> {
    let invalid = |reason: String| {
        log::debug!("rejecting request body: {}", reason);
        AppError::Validation(INVALID_BODY_MESSAGE.into())
    };
    let value: Value = serde_json::from_slice(body).map_err(|e| invalid(e.to_string()))?;
    if !value.is_object() {
        return Err(invalid("body is not a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
}

pub async fn create_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ContactCreatedDto>), AppError> {
    let req = decode_request(&body)?;
    let store = state.store.clone();
    // rusqlite is blocking; keep it off the async workers
    let created = tokio::task::spawn_blocking(move || contact_create(store.as_ref(), req))
        .await
        .map_err(|e| AppError::Internal(format!("intake task failed: {e}")))??;
    Ok((StatusCode::CREATED, Json(created)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_accepts_object_with_nulls() {
        let req = decode_request(br#"{"phone": null, "name": "Ana", "extra": 1}"#).unwrap();
        assert!(req.phone.is_none());
        assert_eq!(req.name.as_deref(), Some("Ana"));
        assert!(req.email.is_none());
    }

    #[test]
    fn decode_rejects_non_objects_and_wrong_types() {
        let bodies: [&[u8]; 6] = [
            b"",
            b"not json",
            b"[]",
            br#"["a","b","c"]"#,
            b"42",
            br#"{"phone": 555}"#,
        ];
        for body in bodies {
            let err = decode_request(body).unwrap_err();
            assert_eq!(err.code(), "VALIDATION_ERROR");
            assert_eq!(err.to_string(), INVALID_BODY_MESSAGE);
        }
    }
}
