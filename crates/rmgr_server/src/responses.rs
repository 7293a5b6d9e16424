use actix_web::http::StatusCode;
use actix_web::web::JsonConfig;
use actix_web::{HttpResponse, ResponseError};
use rmgr_core::PullError;
use rmgr_models::dtos::PullRepoResponse;
use std::fmt::{self, Display, Formatter};
use tracing::error;

/// Renders a [`PullError`] as the JSON error envelope with the status code of
/// its failure class.
#[derive(Debug)]
pub struct ApiError(pub PullError);

impl From<PullError> for ApiError {
    fn from(value: PullError) -> Self {
        Self(value)
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            PullError::Unauthorized => StatusCode::FORBIDDEN,
            PullError::InvalidPayload(_) | PullError::InvalidBranch(_) => StatusCode::BAD_REQUEST,
            PullError::PathNotFound(_)
            | PullError::Fetch(_)
            | PullError::Reset(_)
            | PullError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(PullRepoResponse::error(&self.0.to_string()))
    }
}

/// JSON extractor settings that answer undecodable bodies with the error
/// envelope instead of actix's plain text.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, req| {
        error!("Binding error on {}: {err}", req.path());
        ApiError(PullError::InvalidPayload(err.to_string())).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmgr_core::CommandFailure;
    use std::path::PathBuf;

    #[test]
    fn status_codes_follow_failure_class() {
        let failure = CommandFailure::new("exit status: 1", "");
        let cases = [
            (PullError::Unauthorized, StatusCode::FORBIDDEN),
            (
                PullError::InvalidPayload("eof".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                PullError::InvalidBranch("a..b".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                PullError::PathNotFound(PathBuf::from("/nope")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                PullError::Fetch(failure.clone()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (PullError::Reset(failure), StatusCode::INTERNAL_SERVER_ERROR),
            (
                PullError::Internal("panic".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status_code(), status);
        }
    }
}
