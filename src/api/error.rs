use crate::navigation::NavigationError;
use actix_http::body::BoxBody;
use actix_web::{HttpResponse, error, http::StatusCode};
use std::fmt;
use tracing_batteries::prelude::*;

#[derive(Debug, Serialize, Deserialize)]
pub struct APIError {
    pub code: u16,
    pub error: String,
    pub message: String,
}

impl APIError {
    pub fn new(code: u16, error: &str, message: &str) -> Self {
        Self {
            code,
            error: error.to_string(),
            message: message.to_string(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new(400, "Bad Request", message)
    }
}

impl error::ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code())
            .content_type("application/json; charset=utf-8")
            .json(self)
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for APIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HTTP {} {}] {}", self.code, self.error, self.message)
    }
}

impl From<actix::MailboxError> for APIError {
    fn from(err: actix::MailboxError) -> Self {
        error!({ exception.message = %err }, "We were unable to reach the region catalog");

        sentry::capture_error(&err);

        Self::new(
            500,
            "Internal Server Error",
            "We ran into a problem, this has been reported and will be looked at.",
        )
    }
}

impl From<NavigationError> for APIError {
    fn from(err: NavigationError) -> Self {
        error!({ exception.message = %err }, "We were unable to bind the region selector");

        sentry::capture_error(&err);

        Self::new(
            500,
            "Internal Server Error",
            "We ran into a problem, this has been reported and will be looked at.",
        )
    }
}

impl From<askama::Error> for APIError {
    fn from(err: askama::Error) -> Self {
        error!({ exception.message = %err }, "We were unable to render the page template");

        sentry::capture_error(&err);

        Self::new(
            500,
            "Internal Server Error",
            "We ran into a problem, this has been reported and will be looked at.",
        )
    }
}
