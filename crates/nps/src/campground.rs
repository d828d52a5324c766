use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Envelope returned by the NPS campgrounds endpoint
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CampgroundResponse {
    /// Campground records, absent when the payload has no `data` key
    #[serde(default)]
    pub data: Option<Vec<Campground>>,
}

/// A single campground as published by the NPS API
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Campground {
    /// Display name of the campground
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,

    /// Free-form description
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,

    /// Latitude as published (text, may be blank)
    #[serde(default, deserialize_with = "lenient_text")]
    pub latitude: Option<String>,

    /// Longitude as published (text, may be blank)
    #[serde(default, deserialize_with = "lenient_text")]
    pub longitude: Option<String>,

    /// Photos of the campground, first one is used as the thumbnail
    #[serde(default)]
    pub images: Option<Vec<CampgroundImage>>,
}

/// Image attached to a campground
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CampgroundImage {
    /// Absolute URL of the image
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
}

impl Campground {
    /// Fixed record shown before the first fetch completes
    pub fn placeholder() -> Self {
        Self {
            name: Some("Test Campground".to_string()),
            description: Some("This is a test to verify the campground list works".to_string()),
            latitude: Some("47.5".to_string()),
            longitude: Some("-120.5".to_string()),
            images: Some(vec![CampgroundImage {
                url: Some(
                    "https://www.nps.gov/common/uploads/parks/8f8a5c3a-1dd1-b71b-0b23-d1234567890a/8f8a5c3a-1dd1-b71b-0b23-d1234567890a.jpg"
                        .to_string(),
                ),
            }]),
        }
    }

    /// Coordinates formatted as `(lat, lng)`.
    ///
    /// Missing, blank or non-numeric values are shown as `0.0`.
    pub fn lat_long(&self) -> String {
        let lat = parse_coordinate(self.latitude.as_deref());
        let lng = parse_coordinate(self.longitude.as_deref());
        format!("({}, {})", format_coordinate(lat), format_coordinate(lng))
    }

    /// URL of the first image, if any
    pub fn image_url(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|images| images.first())
            .and_then(|image| image.url.as_deref())
    }

    /// Number of attached images
    pub fn image_count(&self) -> usize {
        self.images.as_ref().map_or(0, Vec::len)
    }
}

fn parse_coordinate(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Renders a double the way the JVM does: plain decimal with at least one
/// fractional digit inside `[1e-3, 1e7)`, `d.dddEn` outside it
fn format_coordinate(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || (1e-3..1e7).contains(&magnitude) {
        if value.fract() == 0.0 {
            format!("{:.1}", value)
        } else {
            value.to_string()
        }
    } else {
        let scientific = format!("{:e}", value);
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                format!("{}E{}", mantissa, exponent)
            }
            Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
            None => scientific,
        }
    }
}

/// Accepts strings, and numbers or booleans as their textual form
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected text, found {}",
            other
        ))),
    }
}
