//! Decoding of case records:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every field besides `keys` is a point whose name is its x coordinate.

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use num_bigint::BigUint;

use crate::algebra::radix;
use crate::error::{Error, Result};
use crate::types::Point;

const KEYS_FIELD: &str = "keys";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EncodedValue {
    pub base: String,
    pub value: String,
}

impl EncodedValue {
    pub fn decode(&self) -> Result<BigUint> {
        let base = radix::parse_base(&self.base)?;
        Ok(radix::parse_radix(&self.value, base)?)
    }
}

/// A decoded record, points sorted by x.
#[derive(Clone, Debug, PartialEq)]
pub struct Case {
    /// Point count declared in `keys`.
    pub n: usize,
    pub k: usize,
    pub points: Vec<Point>,
}

impl Case {
    pub fn new(n: usize, k: usize, mut points: Vec<Point>) -> Self {
        points.sort_by_key(|point| point.x);
        Case { n, k, points }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(json)?;
        Case::from_value(&json)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut json = String::new();
        File::open(path.as_ref())?.read_to_string(&mut json)?;
        Case::from_json(&json)
    }

    pub fn from_value(json: &serde_json::Value) -> Result<Self> {
        let fields = json
            .as_object()
            .ok_or_else(|| Error::BadFormat("case must be a json object".to_string()))?;

        let keys = fields
            .get(KEYS_FIELD)
            .ok_or_else(|| Error::BadFormat(format!("missing '{}' field", KEYS_FIELD)))?;
        let keys: Keys = serde_json::from_value(keys.clone())
            .map_err(|err| Error::BadFormat(format!("field '{}': {}", KEYS_FIELD, err)))?;

        let mut points = Vec::with_capacity(fields.len().saturating_sub(1));
        for (name, field) in fields.iter().filter(|(name, _)| name.as_str() != KEYS_FIELD) {
            let x = name.trim().parse::<u64>().map_err(|_| {
                Error::BadFormat(format!("field '{}' is not an x coordinate", name))
            })?;
            let encoded: EncodedValue = serde_json::from_value(field.clone())
                .map_err(|err| Error::BadFormat(format!("field '{}': {}", name, err)))?;
            points.push(Point::new(x, encoded.decode()?));
        }

        if points.len() != keys.n {
            warn!(
                "case declares n={} but has {} points, using the points given",
                keys.n,
                points.len()
            );
        }

        Ok(Case::new(keys.n, keys.k, points))
    }
}
