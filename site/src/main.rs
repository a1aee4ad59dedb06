use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;

mod config;
mod server;

use crate::config::SiteConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = SiteConfig::from_env()?;
    log::info!(
        "serving {} (assets: {}) on http://{}:{}",
        cfg.dist.display(),
        cfg.assets.display(),
        cfg.addr,
        cfg.port
    );
    if !cfg.dist.join("index.html").is_file() {
        log::warn!("{} has no index.html; run `trunk build` in ui/ first", cfg.dist.display());
    }

    let routes = server::routes(cfg.dist.clone(), cfg.assets.clone());
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(routes.clone())
    })
    .bind((cfg.addr, cfg.port))
    .with_context(|| format!("binding {}:{}", cfg.addr, cfg.port))?
    .run()
    .await
    .context("server stopped")?;

    Ok(())
}
