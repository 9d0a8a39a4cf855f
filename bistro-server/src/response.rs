use axum::{
    http::header::CONTENT_TYPE,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::num::ParseIntError;
use tracing::error;

#[derive(Debug)]
pub struct ServerResponse<T: Serialize> {
    pub body: Option<T>,
    pub headers: HeaderMap,
    pub status_code: StatusCode,
}

#[derive(Debug)]
pub struct ServerResponseBuilder<T: Serialize> {
    pub body: Option<T>,
    pub status_code: Option<StatusCode>,
}

impl<T> ServerResponseBuilder<T>
where
    T: Serialize,
{
    pub fn body(mut self, body: T) -> Self {
        self.body = Some(body);
        self
    }

    pub fn status_code(mut self, status_code: StatusCode) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn ok(mut self) -> Self {
        self.status_code = Some(StatusCode::OK);
        self
    }

    pub fn build(self) -> ServerResponse<T> {
        ServerResponse {
            body: self.body,
            headers: HeaderMap::new(),
            status_code: self.status_code.unwrap_or(StatusCode::OK),
        }
    }

    pub fn new() -> Self {
        Self {
            body: None,
            status_code: None,
        }
    }
}

impl<T: Serialize> ServerResponse<T> {
    pub fn builder() -> ServerResponseBuilder<T> {
        ServerResponseBuilder::new()
    }
}

impl<T: Serialize> IntoResponse for ServerResponse<T> {
    fn into_response(self) -> Response {
        let body = match self.body {
            Some(body) => body,
            None => return self.status_code.into_response(),
        };

        let bytes = match serde_json::to_vec(&body) {
            Ok(b) => b,
            Err(err) => {
                tracing::error!("Error serializing response body: {:?}", err);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        let mut headers = self.headers;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        (self.status_code, headers, bytes).into_response()
    }
}

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing token: {0}")]
    MissingToken(String),
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Expired token: {0}")]
    ExpiredToken(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Internal Error: {0}")]
    InternalError(String),
    #[error("Authentication Error: {0}")]
    AuthError(AuthError),
    #[error("Bad Request: {0}")]
    BadRequest(String),
}

impl From<ParseIntError> for ServerError {
    fn from(error: ParseIntError) -> Self {
        ServerError::InternalError(error.to_string())
    }
}

impl From<mongodb::error::Error> for ServerError {
    fn from(error: mongodb::error::Error) -> Self {
        ServerError::InternalError(error.to_string())
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}

impl From<mongodb::bson::oid::Error> for ServerError {
    fn from(err: mongodb::bson::oid::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}

impl ServerError {
    pub fn internal_error(message: &str) -> Self {
        ServerError::InternalError(message.to_string())
    }

    pub fn invalid_token(message: &str) -> Self {
        ServerError::AuthError(AuthError::InvalidToken(message.to_string()))
    }

    pub fn missing_token(message: &str) -> Self {
        ServerError::AuthError(AuthError::MissingToken(message.to_string()))
    }

    pub fn expired_token(message: &str) -> Self {
        ServerError::AuthError(AuthError::ExpiredToken(message.to_string()))
    }

    pub fn bad_request(message: &str) -> Self {
        ServerError::BadRequest(message.to_string())
    }

    pub fn unauthorized(message: &str) -> Self {
        ServerError::AuthError(AuthError::Unauthorized(message.to_string()))
    }

    pub fn forbidden(message: &str) -> Self {
        ServerError::AuthError(AuthError::Forbidden(message.to_string()))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::AuthError(AuthError::Forbidden(_)) => StatusCode::FORBIDDEN,
            ServerError::AuthError(_) => StatusCode::UNAUTHORIZED,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Text sent to the client. Internal details stay in the log.
    fn message(&self) -> &str {
        match self {
            ServerError::InternalError(_) => INTERNAL_SERVER_ERROR,
            ServerError::BadRequest(message)
            | ServerError::AuthError(AuthError::MissingToken(message))
            | ServerError::AuthError(AuthError::InvalidToken(message))
            | ServerError::AuthError(AuthError::ExpiredToken(message))
            | ServerError::AuthError(AuthError::Unauthorized(message))
            | ServerError::AuthError(AuthError::Forbidden(message)) => message,
        }
    }
}

// Tell axum how `ServerError` should be converted into a response.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // How we want errors responses to be serialized
        #[derive(Serialize)]
        struct ErrorResponse {
            message: String,
        }

        let status = self.status_code();
        error!("Returning error response {} {}", status, self);

        ServerResponse::<ErrorResponse>::builder()
            .body(ErrorResponse {
                message: self.message().to_owned(),
            })
            .status_code(status)
            .build()
            .into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
pub type ServerAppResult<T> = Result<ServerResponse<T>, ServerError>;
