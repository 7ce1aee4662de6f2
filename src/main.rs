use actix_web::web;
use cep_weather::config::{ServiceKind, Settings, LoggingSettings};
use cep_weather::routes::{self, TemperatureState};
use cep_weather::{logging, server};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load(ServiceKind::Temperature) {
        Ok(settings) => settings,
        Err(e) => {
            logging::init(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    logging::init(&settings.logging);

    info!("Starting temperature service...");

    let state = TemperatureState {
        service: server::build_temperature_service(&settings)?,
    };
    let service_name = settings.server.name.clone();

    server::serve(&settings.server, move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(state.clone()));
        routes::temperature::configure(cfg);
        routes::health::configure(cfg, &service_name);
    })
    .await
}
