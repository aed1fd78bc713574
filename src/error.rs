use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// dost thou know of the pepeloni
const INTERNAL_SERVER_ERROR_MESSAGE: &str = "aah the pepeloni";

/// Any possible server errors
#[derive(Debug, Error)]
pub(crate) enum ServerError {
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    ValidationError(#[from] validator::ValidationErrors),

    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    #[error(transparent)]
    DbError(#[from] sea_orm::DbErr),

    #[error("password hashing failed: {0}")]
    HashError(String),
}

impl ServerError {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            ServerError::Conflict(_) => StatusCode::CONFLICT,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::ValidationError(_) | ServerError::JsonRejection(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::DbError(_) | ServerError::HashError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ServerError::ValidationError(_) => {
                format!("Input validation error: [{}]", self).replace('\n', ", ")
            }
            ServerError::DbError(e) => {
                tracing::debug!("Database error occurred: {:?}", e);
                INTERNAL_SERVER_ERROR_MESSAGE.into()
            }
            ServerError::HashError(e) => {
                tracing::debug!("Hasher error occurred: {}", e);
                INTERNAL_SERVER_ERROR_MESSAGE.into()
            }
            _ => self.to_string(),
        };

        (
            status,
            Json(json!({ "status": status.as_u16(), "message": message })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use rstest::rstest;

    async fn body_of(err: ServerError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body to bytes");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[rstest]
    #[case(ServerError::Conflict("Email already exists".into()), StatusCode::CONFLICT)]
    #[case(ServerError::NotFound("nobody".into()), StatusCode::NOT_FOUND)]
    #[tokio::test]
    async fn classified_errors_keep_their_message(
        #[case] err: ServerError,
        #[case] expected: StatusCode,
    ) {
        let message = err.to_string();
        let (status, body) = body_of(err).await;

        assert_eq!(status, expected);
        assert_eq!(body["message"], message);
        assert_eq!(body["status"], expected.as_u16());
    }

    #[tokio::test]
    async fn database_errors_are_redacted() {
        let err = ServerError::DbError(sea_orm::DbErr::Custom("connection refused".into()));
        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], INTERNAL_SERVER_ERROR_MESSAGE);
    }
}
