//! CEP Weather - postal code to temperature lookup
//!
//! Two services share this library: a gateway that validates Brazilian
//! postal codes (CEP) and forwards them, and a temperature service that
//! resolves a CEP to its city through ViaCEP and queries WeatherAPI for the
//! current temperature in Celsius, Fahrenheit and Kelvin.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use crate::core::{celsius_to_kelvin, is_valid_cep};
pub use models::{CepRequest, LocationInfo, TemperatureInfo, TemperatureResponse};
pub use routes::LocalForwarder;
pub use services::{Forwarder, HttpForwarder, TemperatureError, TemperatureService};
