use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Uniform response envelope: `{ success, data?, error? }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Error body as documented in OpenAPI; the serialized form of `ApiResponse::error`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub error: String,
}

/// Request body for operations addressing a single entity by id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct IdDto {
    pub id: i32,
}

/// Deserializes a field that is present in the payload, keeping an explicit `null`
/// distinct from an omitted field.
///
/// Combine with `#[serde(default)]` on an `Option<Option<T>>` field: omitted gives
/// `None`, `null` gives `Some(None)` and a value gives `Some(Some(value))`.
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_present")]
        city: Option<Option<String>>,
    }

    #[test]
    fn distinguishes_omitted_null_and_value() {
        let omitted: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"city":null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"city":"Gdańsk"}"#).unwrap();

        assert_eq!(omitted.city, None);
        assert_eq!(null.city, Some(None));
        assert_eq!(value.city, Some(Some("Gdańsk".to_string())));
    }

    #[test]
    fn error_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::error("Club not found")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": "Club not found" })
        );
    }
}
