//! HTTP server bootstrap and wiring shared by the two binaries.

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::io;
use std::sync::Arc;
use tracing::info;

use crate::config::{ForwardMode, ServerSettings, Settings};
use crate::routes::LocalForwarder;
use crate::services::{Forwarder, HttpForwarder, TemperatureService, ViaCepClient, WeatherClient};

fn startup_error(what: &str, err: impl std::fmt::Display) -> io::Error {
    tracing::error!("Failed to initialize {}: {}", what, err);
    io::Error::new(io::ErrorKind::Other, format!("{} initialization failed: {}", what, err))
}

/// Build the ViaCEP + WeatherAPI orchestrator from configuration
pub fn build_temperature_service(settings: &Settings) -> io::Result<Arc<TemperatureService>> {
    let viacep = ViaCepClient::new(settings.viacep.base_url.clone(), settings.viacep.timeout())
        .map_err(|e| startup_error("ViaCEP client", e))?;

    let weather = WeatherClient::new(
        settings.weather.base_url.clone(),
        settings.weather.api_key.clone(),
        settings.weather.timeout(),
    )
    .map_err(|e| startup_error("WeatherAPI client", e))?;

    info!(
        "Temperature service using ViaCEP at {} and WeatherAPI at {} (key {})",
        settings.viacep.base_url,
        settings.weather.base_url,
        settings.weather.masked_api_key()
    );

    Ok(Arc::new(TemperatureService::new(viacep, weather)))
}

/// Build the gateway's forwarder for the configured topology
pub fn build_forwarder(settings: &Settings) -> io::Result<Arc<dyn Forwarder>> {
    match settings.gateway.forward_mode {
        ForwardMode::Http => {
            let forwarder = HttpForwarder::new(settings.gateway.service_b_url.clone(), settings.gateway.timeout())
                .map_err(|e| startup_error("temperature service client", e))?;
            info!("Gateway forwarding to {}", settings.gateway.service_b_url);
            Ok(Arc::new(forwarder))
        }
        ForwardMode::Local => {
            let service = build_temperature_service(settings)?;
            info!("Gateway resolving temperatures in-process");
            Ok(Arc::new(LocalForwarder::new(service)))
        }
    }
}

/// Run an HTTP server with the standard middleware stack
///
/// `configure` registers the routes and state of one service; it is
/// invoked once per worker.
pub async fn serve<F>(server: &ServerSettings, configure: F) -> io::Result<()>
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let host = server.host.clone();
    let port = server.port;
    let workers = server.workers.unwrap_or(4);

    info!("Starting {} on {}:{}", server.name, host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(configure.clone())
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
