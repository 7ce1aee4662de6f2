use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::core::is_valid_cep;

/// Postal code lookup request, shared by the gateway and the temperature service
///
/// A missing or `null` `cep` deserializes to the empty string so that it
/// fails format validation instead of JSON parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CepRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_cep_format"))]
    pub cep: String,
}

impl CepRequest {
    pub fn new(cep: impl Into<String>) -> Self {
        Self { cep: cep.into() }
    }
}

fn validate_cep_format(cep: &str) -> Result<(), ValidationError> {
    if is_valid_cep(cep) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_zipcode"))
    }
}

/// Deserialize an optional string, mapping `null` to `""`
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_validate() {
        let req: CepRequest = serde_json::from_str(r#"{"cep":"01310100"}"#).unwrap();
        assert_eq!(req.cep, "01310100");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_missing_and_null_cep_become_empty() {
        let missing: CepRequest = serde_json::from_str("{}").unwrap();
        let null: CepRequest = serde_json::from_str(r#"{"cep":null}"#).unwrap();
        assert_eq!(missing.cep, "");
        assert_eq!(null.cep, "");
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_numeric_cep_is_a_parse_error() {
        assert!(serde_json::from_str::<CepRequest>(r#"{"cep":1310100}"#).is_err());
    }

    #[test]
    fn test_invalid_format_fails_validation() {
        assert!(CepRequest::new("123").validate().is_err());
        assert!(CepRequest::new("12345-67").validate().is_err());
    }
}
