// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod upstream;

pub use domain::{LocationInfo, TemperatureInfo};
pub use requests::CepRequest;
pub use responses::{ErrorResponse, HealthResponse, TemperatureResponse};
pub use upstream::{FlagValue, ViaCepResponse, WeatherApiResponse};
