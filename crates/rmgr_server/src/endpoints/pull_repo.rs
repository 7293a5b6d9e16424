use crate::extractors::ApiKey;
use crate::responses::ApiError;
use actix_web::rt::spawn;
use actix_web::web::{Data, Json};
use actix_web::{HttpResponse, post};
use rmgr_core::{PullError, RepoUpdater};
use rmgr_models::dtos::PullRepoRequest;
use tracing::{error, info};

#[post("/pull-repo")]
pub async fn post(
    _: ApiKey,
    updater: Data<RepoUpdater>,
    body: Json<PullRepoRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Reached handler for /pull-repo route");
    let updater = updater.into_inner();
    let request = body.into_inner();

    // A panic while updating is reported through the join handle instead of
    // tearing down the worker.
    let response = spawn(async move { updater.pull(&request).await })
        .await
        .map_err(|e| {
            error!("update task failed: {e}");
            PullError::Internal(e.to_string())
        })??;

    Ok(HttpResponse::Ok().json(response))
}
