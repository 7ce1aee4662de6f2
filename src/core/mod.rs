// Core rule exports
pub mod cep;
pub mod temperature;

pub use cep::{is_valid_cep, CEP_LENGTH};
pub use temperature::{celsius_to_kelvin, KELVIN_OFFSET};
