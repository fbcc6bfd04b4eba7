use actix_web::http::StatusCode;
use sa_shared::errors::ErrorResponse;

/// Turn a shared `ErrorResponse` into an HTTP response
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(status).json(self)
    }
}
