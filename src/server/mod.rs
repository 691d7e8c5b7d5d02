use crate::render::RenderError;
use actix_web::error::BlockingError;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use anyhow::anyhow;

pub mod protocol;
pub mod routes;

/// Anything that stops a placeholder from being served. Always a 500 with a
/// JSON `{"error": ...}` body.
#[derive(Debug)]
pub struct WebError {
    err: anyhow::Error,
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl actix_web::error::ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let err = protocol::ErrorResponse {
            error: self.to_string(),
        };

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(err)
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<RenderError> for WebError {
    fn from(err: RenderError) -> Self {
        WebError { err: anyhow!(err) }
    }
}

impl From<BlockingError> for WebError {
    fn from(_: BlockingError) -> Self {
        WebError {
            err: anyhow!("Failed to create an image."),
        }
    }
}
