use std::collections::BTreeMap;

use ::serde::de::DeserializeOwned;
use ::serde::Serialize;
use radii_core::errors::{ErrorInfo, RadiiError};
use serde_json::{Map, Value};

use crate::newton::NewtonOpts;
use crate::report::Certificate;

fn serde_error(code: &str, err: impl ToString) -> RadiiError {
    RadiiError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<String, Value> = map
                .into_iter()
                .map(|(key, val)| (key, canonicalize(val)))
                .collect();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with deterministic key ordering.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, RadiiError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}

/// Serialises a certificate to pretty JSON.
pub fn certificate_to_json<X: Serialize>(certificate: &Certificate<X>) -> Result<String, RadiiError> {
    serde_json::to_string_pretty(certificate)
        .map_err(|err| serde_error("certificate-serialize", err))
}

/// Restores a certificate from JSON.
pub fn certificate_from_json<X: DeserializeOwned>(json: &str) -> Result<Certificate<X>, RadiiError> {
    serde_json::from_str(json).map_err(|err| serde_error("certificate-deserialize", err))
}

/// Loads Newton options; missing fields take their defaults.
pub fn opts_from_json(json: &str) -> Result<NewtonOpts, RadiiError> {
    serde_json::from_str(json).map_err(|err| serde_error("newton-opts-deserialize", err))
}
