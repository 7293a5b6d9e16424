use crate::responses::ApiError;
use actix_web::dev::Payload;
use actix_web::web::Data;
use actix_web::{Error, FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};
use rmgr_config::RmgrConfig;
use rmgr_config::definitions::API_KEY_HEADER;
use rmgr_core::PullError;
use subtle::ConstantTimeEq;
use tracing::{debug, error};

/// Proof that the request carried the configured `X-API-Key`. Handlers that
/// take this as their first argument never run for unauthorized requests.
#[derive(Debug)]
pub struct ApiKey;

impl FromRequest for ApiKey {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            validate(req)
                .map(|_| ApiKey)
                .map_err(|e| ApiError(e).into()),
        )
    }
}

fn validate(req: &HttpRequest) -> Result<(), PullError> {
    let Some(config) = req.app_data::<Data<RmgrConfig>>() else {
        error!("server configuration is not registered");
        return Err(PullError::Internal("missing configuration".to_string()));
    };

    let provided = req.headers().get(API_KEY_HEADER).map(|v| v.as_bytes());
    match (config.api_key(), provided) {
        (Some(expected), Some(provided)) if keys_match(expected.as_bytes(), provided) => Ok(()),
        _ => {
            debug!("rejected request to {} with missing or invalid api key", req.path());
            Err(PullError::Unauthorized)
        }
    }
}

fn keys_match(expected: &[u8], provided: &[u8]) -> bool {
    expected.ct_eq(provided).into()
}
