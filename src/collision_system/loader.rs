use crate::error::CollisionError;
use crate::geo::Geo;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// decodes a JSON array of shapes
///
/// All elements are decoded before anything is returned. The first element
/// that is not a known shape fails the whole list.
pub fn shapes_from_json(json: &str) -> Result<Vec<Geo>, CollisionError> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    let shapes = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let item = value.to_string();
            serde_json::from_value::<Geo>(value).map_err(|e| CollisionError::ContractViolation {
                index,
                item,
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<Geo>, CollisionError>>()?;
    debug!(shapes = shapes.len(), "decoded shape list");
    Ok(shapes)
}

pub fn shapes_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Geo>, CollisionError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading shape list");
    shapes_from_json(&fs::read_to_string(path)?)
}
