use actix_web::web;
use cep_weather::config::{ServiceKind, Settings, LoggingSettings};
use cep_weather::routes::{self, GatewayState};
use cep_weather::{logging, server};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load(ServiceKind::Gateway) {
        Ok(settings) => settings,
        Err(e) => {
            logging::init(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    logging::init(&settings.logging);

    info!("Starting CEP gateway...");

    let state = GatewayState {
        forwarder: server::build_forwarder(&settings)?,
    };
    let service_name = settings.server.name.clone();

    server::serve(&settings.server, move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(state.clone()));
        routes::gateway::configure(cfg);
        routes::health::configure(cfg, &service_name);
    })
    .await
}
