//! Wire formats of the external directory (ViaCEP) and weather (WeatherAPI) providers.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::requests::null_as_empty;

/// ViaCEP lookup response
///
/// Only the city, state and error flag are read; street-level fields are
/// ignored whatever their type. Unknown postal codes come back as
/// `{"erro": true}` (older deployments send `"erro": "true"`), so the flag
/// is normalized by [`deserialize_flag`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ViaCepResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub localidade: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub uf: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub erro: bool,
}

/// Boolean flag that may be sent as a JSON boolean or as a string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Text(String),
    Other(Value),
}

impl FlagValue {
    pub fn as_bool(&self) -> bool {
        match self {
            FlagValue::Bool(b) => *b,
            FlagValue::Text(s) => matches!(s.as_str(), "true" | "1" | "True" | "TRUE"),
            FlagValue::Other(_) => false,
        }
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<FlagValue>::deserialize(deserializer)?;
    Ok(value.map(|v| v.as_bool()).unwrap_or(false))
}

/// WeatherAPI `current.json` response
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherApiResponse {
    pub location: WeatherApiLocation,
    pub current: WeatherApiCurrent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherApiLocation {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherApiCurrent {
    pub temp_c: f64,
    pub temp_f: f64,
}

/// Extract the provider's error message from a non-2xx WeatherAPI body
///
/// WeatherAPI answers `{"error": {"code": 1006, "message": "..."}}`; a bare
/// string under `error` is accepted too, and any other shape is rendered as
/// its JSON text.
pub fn weather_error_message(body: &[u8]) -> Option<String> {
    let json: Value = serde_json::from_slice(body).ok()?;
    let error = json.get("error")?;

    let message = match error {
        Value::String(s) => s.clone(),
        Value::Object(obj) => match obj.get("message") {
            Some(Value::String(s)) => s.clone(),
            _ => error.to_string(),
        },
        Value::Null => return None,
        other => other.to_string(),
    };

    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_erro(raw: &str) -> bool {
        let body = format!(r#"{{"localidade":"X","erro":{}}}"#, raw);
        serde_json::from_str::<ViaCepResponse>(&body).unwrap().erro
    }

    #[test]
    fn test_flag_true_variants() {
        for raw in ["true", r#""true""#, r#""1""#, r#""True""#, r#""TRUE""#] {
            assert!(parse_erro(raw), "expected true for {}", raw);
        }
    }

    #[test]
    fn test_flag_false_variants() {
        for raw in ["false", r#""false""#, r#""0""#, r#""False""#, r#""FALSE""#, r#""""#, "null"] {
            assert!(!parse_erro(raw), "expected false for {}", raw);
        }
    }

    #[test]
    fn test_flag_unrecognized_defaults_to_false() {
        assert!(!parse_erro(r#""yes""#));
        assert!(!parse_erro("1"));
        assert!(!parse_erro("[true]"));
    }

    #[test]
    fn test_viacep_full_payload() {
        let body = r#"{
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "complemento": "de 612 a 1510 - lado par",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "gia": "1004",
            "ddd": "11",
            "siafi": "7107"
        }"#;
        let parsed: ViaCepResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.localidade, "São Paulo");
        assert_eq!(parsed.uf, "SP");
        assert!(!parsed.erro);
    }

    #[test]
    fn test_viacep_ignores_null_and_numeric_street_fields() {
        let body = r#"{
            "cep": "01310-100",
            "logradouro": null,
            "complemento": null,
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": 3550308,
            "ddd": 11
        }"#;
        let parsed: ViaCepResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.localidade, "São Paulo");
        assert_eq!(parsed.uf, "SP");
        assert!(!parsed.erro);
    }

    #[test]
    fn test_viacep_null_locality_is_empty() {
        let parsed: ViaCepResponse = serde_json::from_str(r#"{"localidade": null, "uf": null}"#).unwrap();
        assert!(parsed.localidade.is_empty());
        assert!(parsed.uf.is_empty());
    }

    #[test]
    fn test_weather_error_message_shapes() {
        let nested = br#"{"error":{"code":1006,"message":"No matching location found."}}"#;
        assert_eq!(weather_error_message(nested).as_deref(), Some("No matching location found."));

        let flat = br#"{"error":"API key is invalid."}"#;
        assert_eq!(weather_error_message(flat).as_deref(), Some("API key is invalid."));

        let code_only = br#"{"error":{"code":2006}}"#;
        assert_eq!(weather_error_message(code_only).as_deref(), Some(r#"{"code":2006}"#));

        assert_eq!(weather_error_message(b"<html>bad gateway</html>"), None);
        assert_eq!(weather_error_message(br#"{"detail":"x"}"#), None);
    }
}
