use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::error::Error;

/// A `(lon, lat)` pair, kept as `serde_json::Number` so the source
/// literal (including trailing zeros) survives parsing.
pub type Position = (Number, Number);

#[derive(Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Deserialize)]
pub struct Feature {
    pub properties: Map<String, Value>,
    pub geometry: Geometry,
}

#[derive(Deserialize)]
pub struct Geometry {
    pub coordinates: Vec<Vec<Position>>,
}

impl Feature {
    /// Derive the `"{state}-{district}"` key used for duplicate and
    /// overlap checks. Both properties must be present; the district may
    /// be a string or a number.
    pub fn district_key(&self) -> Result<String, Box<dyn Error>> {
        let state = self.property("state")?;
        let district = self.property("district")?;
        Ok(format!("{}-{}", scalar(state), scalar(district)))
    }

    pub fn outer_ring(&self) -> Result<&[Position], Box<dyn Error>> {
        let ring = self
            .geometry
            .coordinates
            .first()
            .ok_or("geometry has no outer ring")?;
        Ok(ring)
    }

    fn property(&self, name: &str) -> Result<&Value, Box<dyn Error>> {
        let value = self
            .properties
            .get(name)
            .ok_or_else(|| format!("feature is missing property '{}'", name))?;
        Ok(value)
    }
}

/// Render a property value the way it reads in the source, strings
/// without quotes, everything else as its JSON representation.
pub fn scalar(value: &Value) -> String {
    match value {
        Value::String(string) => string.clone(),
        other => other.to_string(),
    }
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
