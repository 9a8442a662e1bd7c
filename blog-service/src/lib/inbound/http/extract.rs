use axum::async_trait;
use axum::body::Bytes;
use axum::extract::FromRequest;
use axum::extract::Request;
use serde::de::DeserializeOwned;

use super::handlers::ApiError;

/// JSON request body where an absent body reads as `T::default()`.
///
/// Missing fields then surface as domain validation errors instead of
/// framework rejections. Unparseable JSON is a validation error.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ApiError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Payload {
        title: Option<String>,
        likes: Option<i64>,
    }

    async fn extract(body: &'static str) -> Result<Payload, ApiError> {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();

        JsonBody::<Payload>::from_request(request, &())
            .await
            .map(|JsonBody(payload)| payload)
    }

    #[tokio::test]
    async fn test_empty_body_is_default() {
        assert_eq!(extract("").await, Ok(Payload::default()));
        assert_eq!(extract("  \n").await, Ok(Payload::default()));
    }

    #[tokio::test]
    async fn test_parses_json() {
        assert_eq!(
            extract(r#"{"title":"Rust","likes":3}"#).await,
            Ok(Payload {
                title: Some("Rust".to_string()),
                likes: Some(3),
            })
        );
    }

    #[tokio::test]
    async fn test_invalid_json_is_validation_error() {
        assert!(matches!(extract("{").await, Err(ApiError::Validation(_))));
        assert!(matches!(
            extract(r#"{"likes":"many"}"#).await,
            Err(ApiError::Validation(_))
        ));
    }
}
