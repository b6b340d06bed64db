//! The mission record and its create payload.
//!
//! Create requests arrive as arbitrary JSON. The payload is first read as an
//! untyped object and then checked field by field: `objective` must be a
//! string, `reward` a number, `active` and `failed` booleans. Only type is
//! checked -- an empty objective or a negative reward is accepted.

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;

/// A validated mission ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMission {
    pub objective: String,
    pub reward: f64,
    pub active: bool,
    pub failed: bool,
}

impl NewMission {
    /// Validate a parsed JSON body into a [`NewMission`].
    ///
    /// A body that is not a JSON object has none of the required fields and
    /// is rejected the same way as an object with missing fields. `null`
    /// counts as missing.
    pub fn from_json(body: &Value) -> Result<Self, CoreError> {
        let fields = body.as_object();
        let field = |name: &str| fields.and_then(|map| map.get(name));

        let objective = field("objective").and_then(Value::as_str);
        let reward = field("reward").and_then(Value::as_f64);
        let active = field("active").and_then(Value::as_bool);
        let failed = field("failed").and_then(Value::as_bool);

        match (objective, reward, active, failed) {
            (Some(objective), Some(reward), Some(active), Some(failed)) => Ok(Self {
                objective: objective.to_owned(),
                reward,
                active,
                failed,
            }),
            _ => Err(CoreError::Validation(invalid_field_names(body).join(", "))),
        }
    }
}

/// Names of the fields that are missing or carry the wrong JSON type.
fn invalid_field_names(body: &Value) -> Vec<&'static str> {
    let checks: [(&'static str, fn(&Value) -> bool); 4] = [
        ("objective", Value::is_string),
        ("reward", Value::is_number),
        ("active", Value::is_boolean),
        ("failed", Value::is_boolean),
    ];

    checks
        .into_iter()
        .filter(|&(name, is_valid)| !body.get(name).is_some_and(is_valid))
        .map(|(name, _)| name)
        .collect()
}
