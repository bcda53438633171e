use crate::config::AppConfig;
use crate::db::connection::init_db;
use crate::db::Database;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;

mod analytics;
mod auth;
mod calculators;
mod clock;
mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod integrations;
mod pricing;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Configuration
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2. Database
    let db = Database::new(cfg.db_path.clone());
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        log::error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3. Providers
    let state = AppState::from_config(&cfg, db);

    // 4. Serve
    log::info!(
        "starting server at http://{} with {} workers",
        cfg.addr,
        cfg.max_workers
    );

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        log::error!("server ended with error: {e}");
    }

    log::info!("server shut down cleanly");
}
