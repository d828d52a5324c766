use log::{debug, warn};

use crate::campground::{Campground, CampgroundResponse};
use crate::nps_error::NpsError;

/// Decode a campgrounds payload.
///
/// The `{"data": [...]}` envelope is tried first. When it has no `data`, or
/// the body is not an object at all, the body is decoded as a bare array.
pub fn decode_campgrounds(body: &str) -> Result<Vec<Campground>, NpsError> {
    match serde_json::from_str::<CampgroundResponse>(body) {
        Ok(CampgroundResponse { data: Some(data) }) => {
            debug!("Parsed response envelope with {} campgrounds", data.len());
            return Ok(data);
        }
        Ok(CampgroundResponse { data: None }) => {
            warn!("No data in response - attempting alternative parsing");
        }
        Err(e) => {
            debug!("Envelope parsing failed ({}) - attempting alternative parsing", e);
        }
    }

    let campgrounds = serde_json::from_str::<Vec<Campground>>(body).map_err(|e| {
        NpsError::DataFormat(format!("Alternative parsing also failed: {}", e))
    })?;
    debug!(
        "Successfully parsed {} campgrounds from direct array",
        campgrounds.len()
    );
    Ok(campgrounds)
}

/// Top-level keys of a JSON object payload, for diagnostics
pub fn top_level_keys(body: &str) -> Vec<String> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}
