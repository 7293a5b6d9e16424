use crate::endpoints::pull_repo;
use crate::responses::json_config;
use actix_cors::Cors;
use actix_web::web::{Data, ServiceConfig};
use actix_web::{App, HttpServer, middleware};
use anyhow::Result;
use rmgr_config::RmgrConfig;
use rmgr_config::definitions::ENV_API_KEY;
use rmgr_core::RepoUpdater;
use tracing::{info, warn};

/// Registers the routes and extractor settings of the service.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.app_data(json_config()).service(pull_repo::post);
}

pub async fn start(config: RmgrConfig) -> Result<()> {
    let address = config.server.address();
    info!("starting rmgr server at {address}");

    config.debug_info();
    if config.api_key().is_none() {
        warn!("{ENV_API_KEY} is not set, every request will be rejected");
    }

    let updater = Data::new(RepoUpdater::git(&config.git));
    let config = Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .app_data(updater.clone())
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}
