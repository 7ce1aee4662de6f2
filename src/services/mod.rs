// Service exports
pub mod forwarder;
pub mod temperature;
pub mod viacep;
pub mod weather;

pub use forwarder::{ForwardError, ForwardedResponse, Forwarder, HttpForwarder};
pub use temperature::{TemperatureError, TemperatureService};
pub use viacep::{ViaCepClient, ViaCepError};
pub use weather::{WeatherClient, WeatherError};
