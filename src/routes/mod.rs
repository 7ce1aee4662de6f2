// Route exports
pub mod errors;
pub mod gateway;
pub mod health;
pub mod local;
pub mod pipeline;
pub mod temperature;

pub use errors::ApiError;
pub use gateway::GatewayState;
pub use local::LocalForwarder;
pub use temperature::TemperatureState;
