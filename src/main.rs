use actix_web::{middleware, web, App, HttpServer};
use placeholder::config::RUST_LOG;
use placeholder::font;
use placeholder::params::Defaults;
use placeholder::server::routes;
use placeholder::settings::Settings;
use std::io;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(RUST_LOG)),
        )
        .init();

    let settings =
        Settings::load().map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    // Parse the font up front so a broken build shows up in the logs at startup
    if let Err(err) = font::embedded() {
        error!(error = %err, "embedded font could not be parsed, every request will fail");
    }

    let defaults = web::Data::new(Defaults::default());
    let (host, port) = settings.bind_address();
    info!(
        environment = %settings.environment,
        "starting placeholder server on {host}:{port}"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(defaults.clone())
            .wrap(middleware::Logger::default())
            .service(routes::placeholder)
    })
    .bind((host, port))?
    .run()
    .await
}
